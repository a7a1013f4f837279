//! Row and filter types for the admin changelist queries.

use crate::domain::entities::{Membership, Money, PaymentStatus};
use chrono::{DateTime, Datelike, Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn sql(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

/// Column a changelist can be sorted by, named as in the `o` query parameter
pub trait SortField: Sized + Copy {
    fn from_name(name: &str) -> Option<Self>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOrder<F> {
    pub field: F,
    pub direction: SortDirection,
}

impl<F: SortField> SortOrder<F> {
    /// Parse `title` / `-title`; unknown columns fall back to `default`.
    pub fn parse(raw: Option<&str>, default: SortOrder<F>) -> SortOrder<F> {
        let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
            return default;
        };
        let (direction, name) = match raw.strip_prefix('-') {
            Some(name) => (SortDirection::Desc, name),
            None => (SortDirection::Asc, raw),
        };
        match F::from_name(name) {
            Some(field) => SortOrder { field, direction },
            None => default,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionSort {
    Id,
    Title,
    ProductsCount,
}

impl SortField for CollectionSort {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "id" => Some(Self::Id),
            "title" => Some(Self::Title),
            "products_count" => Some(Self::ProductsCount),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductSort {
    Id,
    Title,
    UnitPrice,
    Inventory,
    CollectionTitle,
    LastUpdate,
}

impl SortField for ProductSort {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "id" => Some(Self::Id),
            "title" => Some(Self::Title),
            "unit_price" => Some(Self::UnitPrice),
            // inventory_status is computed from inventory and sorts by it
            "inventory" | "inventory_status" => Some(Self::Inventory),
            "collection_title" => Some(Self::CollectionTitle),
            "last_update" => Some(Self::LastUpdate),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomerSort {
    Id,
    FirstName,
    LastName,
    Membership,
    OrderCount,
}

impl SortField for CustomerSort {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "id" => Some(Self::Id),
            "first_name" => Some(Self::FirstName),
            "last_name" => Some(Self::LastName),
            "membership" => Some(Self::Membership),
            "order_count" => Some(Self::OrderCount),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderSort {
    Id,
    PlacedAt,
    PaymentStatus,
    CustomerName,
}

impl SortField for OrderSort {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "id" => Some(Self::Id),
            "placed_at" => Some(Self::PlacedAt),
            "payment_status" => Some(Self::PaymentStatus),
            "customer_name" => Some(Self::CustomerName),
            _ => None,
        }
    }
}

/// Date-hierarchy choices for `last_update`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LastUpdateFilter {
    Today,
    #[serde(rename = "past_7_days")]
    Past7Days,
    ThisMonth,
    ThisYear,
}

impl LastUpdateFilter {
    pub fn from_param(value: &str) -> Option<Self> {
        match value {
            "today" => Some(Self::Today),
            "past_7_days" => Some(Self::Past7Days),
            "this_month" => Some(Self::ThisMonth),
            "this_year" => Some(Self::ThisYear),
            _ => None,
        }
    }

    /// Inclusive lower bound of the window containing `now`
    pub fn since(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        let midnight = |y: i32, m: u32, d: u32| {
            Utc.with_ymd_and_hms(y, m, d, 0, 0, 0)
                .single()
                .unwrap_or(now)
        };
        match self {
            LastUpdateFilter::Today => midnight(now.year(), now.month(), now.day()),
            LastUpdateFilter::Past7Days => {
                midnight(now.year(), now.month(), now.day()) - Duration::days(7)
            }
            LastUpdateFilter::ThisMonth => midnight(now.year(), now.month(), 1),
            LastUpdateFilter::ThisYear => midnight(now.year(), 1, 1),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CollectionChangeListParams {
    pub search_terms: Vec<String>,
    pub ordering: SortOrder<CollectionSort>,
    pub limit: i64,
    pub offset: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollectionRow {
    pub id: i64,
    pub title: String,
    pub products_count: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductChangeListParams {
    pub search_terms: Vec<String>,
    pub collection_id: Option<i64>,
    /// Formatted timestamp; rows updated at or after it are kept
    pub last_update_since: Option<String>,
    pub low_inventory: bool,
    pub ordering: SortOrder<ProductSort>,
    pub limit: i64,
    pub offset: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductRow {
    pub id: i64,
    pub title: String,
    pub unit_price: Money,
    pub inventory: i64,
    pub collection_id: i64,
    pub collection_title: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CustomerChangeListParams {
    pub search_terms: Vec<String>,
    pub ordering: SortOrder<CustomerSort>,
    pub limit: i64,
    pub offset: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerRow {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub membership: Membership,
    pub order_count: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderChangeListParams {
    pub customer_id: Option<i64>,
    pub ordering: SortOrder<OrderSort>,
    pub limit: i64,
    pub offset: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderRow {
    pub id: i64,
    pub placed_at: String,
    pub payment_status: PaymentStatus,
    pub customer_id: i64,
    pub customer_first_name: String,
    pub customer_last_name: String,
}

/// Models offering an autocomplete lookup in admin forms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AutocompleteModel {
    Collection,
    Product,
    Customer,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AutocompleteResult {
    pub id: i64,
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_parse() {
        let default = SortOrder {
            field: ProductSort::Title,
            direction: SortDirection::Asc,
        };
        assert_eq!(SortOrder::parse(None, default), default);
        assert_eq!(
            SortOrder::parse(Some("-inventory_status"), default),
            SortOrder {
                field: ProductSort::Inventory,
                direction: SortDirection::Desc
            }
        );
        assert_eq!(SortOrder::parse(Some("password"), default), default);
    }

    #[test]
    fn test_last_update_windows() {
        let now = Utc.with_ymd_and_hms(2026, 3, 5, 15, 30, 0).unwrap();
        assert_eq!(
            LastUpdateFilter::Today.since(now),
            Utc.with_ymd_and_hms(2026, 3, 5, 0, 0, 0).unwrap()
        );
        assert_eq!(
            LastUpdateFilter::Past7Days.since(now),
            Utc.with_ymd_and_hms(2026, 2, 26, 0, 0, 0).unwrap()
        );
        assert_eq!(
            LastUpdateFilter::ThisMonth.since(now),
            Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap()
        );
        assert_eq!(
            LastUpdateFilter::ThisYear.since(now),
            Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap()
        );
        assert_eq!(LastUpdateFilter::from_param("past_7_days"), Some(LastUpdateFilter::Past7Days));
        assert_eq!(LastUpdateFilter::from_param("decade"), None);
    }
}
