use crate::domain::entities::EntityKind;

/// Admin changelist URL for `kind`, filtered by `filters`.
///
/// `changelist_url(EntityKind::Product, &[("collection__id", "3")])` gives
/// `/admin/store/product/?collection__id=3`.
pub fn changelist_url(kind: EntityKind, filters: &[(&str, &str)]) -> String {
    let mut url = format!("/admin/{}/{}/", kind.app_label(), kind.model_name());
    if !filters.is_empty() {
        let query = filters
            .iter()
            .map(|(key, value)| {
                format!(
                    "{}={}",
                    urlencoding::encode(key),
                    urlencoding::encode(value)
                )
            })
            .collect::<Vec<_>>()
            .join("&");
        url.push('?');
        url.push_str(&query);
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_changelist_url_without_filters() {
        assert_eq!(changelist_url(EntityKind::Order, &[]), "/admin/store/order/");
    }

    #[test]
    fn test_changelist_url_with_filters() {
        assert_eq!(
            changelist_url(EntityKind::Product, &[("collection__id", "3")]),
            "/admin/store/product/?collection__id=3"
        );
        assert_eq!(
            changelist_url(EntityKind::Product, &[("q", "green tea"), ("o", "-title")]),
            "/admin/store/product/?q=green%20tea&o=-title"
        );
    }
}
