pub mod admin;
pub mod carts;
pub mod collections;
pub mod customers;
pub mod orders;
pub mod products;
pub mod promotions;
pub mod tagged_items;
pub mod tags;

use crate::domain::entities::PaginationMetadata;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct PaginatedResponse<T> {
    pub items: Vec<T>,
    pub pagination: PaginationMetadata,
}

#[derive(Debug, Deserialize)]
pub struct PaginationQuery {
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_per_page")]
    pub per_page: i64,
}

fn default_page() -> i64 {
    1
}

fn default_per_page() -> i64 {
    20
}

impl PaginationQuery {
    /// `(limit, offset)` with both values clamped to sane bounds
    pub fn window(&self) -> (i64, i64) {
        let per_page = self.per_page.clamp(1, 100);
        let page = self.page.max(1);
        (per_page, (page - 1).saturating_mul(per_page))
    }

    pub fn page(&self) -> i64 {
        self.page.max(1)
    }

    pub fn respond<T>(&self, items: Vec<T>, total_count: i64) -> PaginatedResponse<T> {
        let (per_page, _) = self.window();
        PaginatedResponse {
            items,
            pagination: PaginationMetadata::new(self.page(), per_page, total_count),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_clamps_inputs() {
        let query = PaginationQuery {
            page: 0,
            per_page: 1000,
        };
        assert_eq!(query.window(), (100, 0));

        let query = PaginationQuery {
            page: 3,
            per_page: 20,
        };
        assert_eq!(query.window(), (20, 40));

        let query = PaginationQuery {
            page: i64::MAX,
            per_page: 20,
        };
        assert_eq!(query.window(), (20, i64::MAX));
    }
}
