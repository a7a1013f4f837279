use crate::domain::entities::{
    AutocompleteModel, AutocompleteResult, CollectionChangeListParams, CollectionRow,
    CollectionSort, CustomerChangeListParams, CustomerRow, CustomerSort, Money,
    OrderChangeListParams, OrderRow, OrderSort, ProductChangeListParams, ProductRow, ProductSort,
    SortDirection, LOW_INVENTORY_THRESHOLD,
};
use crate::domain::ports::changelist_repository::ChangeListRepository;
use crate::infrastructure::http::middleware::error::ApiResult;
use crate::infrastructure::persistence::{like_pattern, Database};
use sqlx::{Any, QueryBuilder, Row};

/// Append `AND (col1 LIKE ? OR col2 LIKE ?)` once per search term.
///
/// Every term has to match at least one of `columns`.
fn push_search_terms(
    builder: &mut QueryBuilder<'_, Any>,
    terms: &[String],
    columns: &[&str],
    prefix_only: bool,
) {
    for term in terms {
        let pattern = like_pattern(term, prefix_only);
        builder.push(" AND (");
        for (i, column) in columns.iter().enumerate() {
            if i > 0 {
                builder.push(" OR ");
            }
            builder
                .push(format!("LOWER({}) LIKE ", column))
                .push_bind(pattern.clone())
                .push(" ESCAPE '\\'");
        }
        builder.push(")");
    }
}

fn push_page(builder: &mut QueryBuilder<'_, Any>, limit: i64, offset: i64) {
    builder
        .push(" LIMIT ")
        .push_bind(limit)
        .push(" OFFSET ")
        .push_bind(offset);
}

fn push_product_filters(builder: &mut QueryBuilder<'_, Any>, params: &ProductChangeListParams) {
    push_search_terms(builder, &params.search_terms, &["p.title"], false);
    if let Some(collection_id) = params.collection_id {
        builder.push(" AND p.collection_id = ").push_bind(collection_id);
    }
    if let Some(ref since) = params.last_update_since {
        builder.push(" AND p.last_update >= ").push_bind(since.clone());
    }
    if params.low_inventory {
        builder
            .push(" AND p.inventory < ")
            .push_bind(LOW_INVENTORY_THRESHOLD);
    }
}

fn order_clause(columns: &[&str], direction: SortDirection, tiebreak: &str) -> String {
    let mut parts: Vec<String> = columns
        .iter()
        .map(|c| format!("{} {}", c, direction.sql()))
        .collect();
    parts.push(format!("{} {}", tiebreak, direction.sql()));
    format!(" ORDER BY {}", parts.join(", "))
}

#[async_trait::async_trait]
impl ChangeListRepository for Database {
    async fn collection_changelist(
        &self,
        params: &CollectionChangeListParams,
    ) -> ApiResult<(Vec<CollectionRow>, i64)> {
        let mut count_query = QueryBuilder::<Any>::new(
            "SELECT COUNT(*) as count FROM collections c WHERE 1 = 1",
        );
        push_search_terms(&mut count_query, &params.search_terms, &["c.title"], false);
        let count_row = count_query.build().fetch_one(&self.pool).await?;
        let total_count: i64 = count_row.try_get("count")?;

        let mut query = QueryBuilder::<Any>::new(
            "SELECT c.id, c.title, COUNT(p.id) as products_count
             FROM collections c
             LEFT JOIN products p ON p.collection_id = c.id
             WHERE 1 = 1",
        );
        push_search_terms(&mut query, &params.search_terms, &["c.title"], false);
        query.push(" GROUP BY c.id, c.title");
        let sort_column = match params.ordering.field {
            CollectionSort::Id => "c.id",
            CollectionSort::Title => "c.title",
            CollectionSort::ProductsCount => "products_count",
        };
        query.push(order_clause(&[sort_column], params.ordering.direction, "c.id"));
        push_page(&mut query, params.limit, params.offset);

        let rows = query.build().fetch_all(&self.pool).await?;
        let mut collections = Vec::with_capacity(rows.len());
        for row in rows {
            collections.push(CollectionRow {
                id: row.try_get("id")?,
                title: row.try_get("title")?,
                products_count: row.try_get("products_count")?,
            });
        }

        Ok((collections, total_count))
    }

    async fn product_changelist(
        &self,
        params: &ProductChangeListParams,
    ) -> ApiResult<(Vec<ProductRow>, i64)> {
        let mut count_query =
            QueryBuilder::<Any>::new("SELECT COUNT(*) as count FROM products p WHERE 1 = 1");
        push_product_filters(&mut count_query, params);
        let count_row = count_query.build().fetch_one(&self.pool).await?;
        let total_count: i64 = count_row.try_get("count")?;

        // collection_title comes from the join so a page costs one query
        let mut query = QueryBuilder::<Any>::new(
            "SELECT p.id, p.title, p.unit_price_cents, p.inventory, p.collection_id,
                    c.title as collection_title
             FROM products p
             INNER JOIN collections c ON c.id = p.collection_id
             WHERE 1 = 1",
        );
        push_product_filters(&mut query, params);
        let sort_column = match params.ordering.field {
            ProductSort::Id => "p.id",
            ProductSort::Title => "p.title",
            ProductSort::UnitPrice => "p.unit_price_cents",
            ProductSort::Inventory => "p.inventory",
            ProductSort::CollectionTitle => "c.title",
            ProductSort::LastUpdate => "p.last_update",
        };
        query.push(order_clause(&[sort_column], params.ordering.direction, "p.id"));
        push_page(&mut query, params.limit, params.offset);

        let rows = query.build().fetch_all(&self.pool).await?;
        let mut products = Vec::with_capacity(rows.len());
        for row in rows {
            products.push(ProductRow {
                id: row.try_get("id")?,
                title: row.try_get("title")?,
                unit_price: Money::from_cents(row.try_get("unit_price_cents")?),
                inventory: row.try_get("inventory")?,
                collection_id: row.try_get("collection_id")?,
                collection_title: row.try_get("collection_title")?,
            });
        }

        Ok((products, total_count))
    }

    async fn customer_changelist(
        &self,
        params: &CustomerChangeListParams,
    ) -> ApiResult<(Vec<CustomerRow>, i64)> {
        let name_columns = ["cu.first_name", "cu.last_name"];

        let mut count_query =
            QueryBuilder::<Any>::new("SELECT COUNT(*) as count FROM customers cu WHERE 1 = 1");
        push_search_terms(&mut count_query, &params.search_terms, &name_columns, true);
        let count_row = count_query.build().fetch_one(&self.pool).await?;
        let total_count: i64 = count_row.try_get("count")?;

        let mut query = QueryBuilder::<Any>::new(
            "SELECT cu.id, cu.first_name, cu.last_name, cu.membership,
                    COUNT(o.id) as order_count
             FROM customers cu
             LEFT JOIN orders o ON o.customer_id = cu.id
             WHERE 1 = 1",
        );
        push_search_terms(&mut query, &params.search_terms, &name_columns, true);
        query.push(" GROUP BY cu.id, cu.first_name, cu.last_name, cu.membership");
        let sort_columns: &[&str] = match params.ordering.field {
            CustomerSort::Id => &["cu.id"],
            CustomerSort::FirstName => &["cu.first_name", "cu.last_name"],
            CustomerSort::LastName => &["cu.last_name", "cu.first_name"],
            CustomerSort::Membership => &["cu.membership"],
            CustomerSort::OrderCount => &["order_count"],
        };
        query.push(order_clause(sort_columns, params.ordering.direction, "cu.id"));
        push_page(&mut query, params.limit, params.offset);

        let rows = query.build().fetch_all(&self.pool).await?;
        let mut customers = Vec::with_capacity(rows.len());
        for row in rows {
            let membership: String = row.try_get("membership")?;
            customers.push(CustomerRow {
                id: row.try_get("id")?,
                first_name: row.try_get("first_name")?,
                last_name: row.try_get("last_name")?,
                membership: membership.parse()?,
                order_count: row.try_get("order_count")?,
            });
        }

        Ok((customers, total_count))
    }

    async fn order_changelist(
        &self,
        params: &OrderChangeListParams,
    ) -> ApiResult<(Vec<OrderRow>, i64)> {
        let mut count_query =
            QueryBuilder::<Any>::new("SELECT COUNT(*) as count FROM orders o WHERE 1 = 1");
        if let Some(customer_id) = params.customer_id {
            count_query.push(" AND o.customer_id = ").push_bind(customer_id);
        }
        let count_row = count_query.build().fetch_one(&self.pool).await?;
        let total_count: i64 = count_row.try_get("count")?;

        let mut query = QueryBuilder::<Any>::new(
            "SELECT o.id, o.placed_at, o.payment_status, o.customer_id,
                    cu.first_name as customer_first_name, cu.last_name as customer_last_name
             FROM orders o
             INNER JOIN customers cu ON cu.id = o.customer_id
             WHERE 1 = 1",
        );
        if let Some(customer_id) = params.customer_id {
            query.push(" AND o.customer_id = ").push_bind(customer_id);
        }
        let sort_columns: &[&str] = match params.ordering.field {
            OrderSort::Id => &["o.id"],
            OrderSort::PlacedAt => &["o.placed_at"],
            OrderSort::PaymentStatus => &["o.payment_status"],
            OrderSort::CustomerName => &["cu.first_name", "cu.last_name"],
        };
        query.push(order_clause(sort_columns, params.ordering.direction, "o.id"));
        push_page(&mut query, params.limit, params.offset);

        let rows = query.build().fetch_all(&self.pool).await?;
        let mut orders = Vec::with_capacity(rows.len());
        for row in rows {
            let status: String = row.try_get("payment_status")?;
            orders.push(OrderRow {
                id: row.try_get("id")?,
                placed_at: row.try_get("placed_at")?,
                payment_status: status.parse()?,
                customer_id: row.try_get("customer_id")?,
                customer_first_name: row.try_get("customer_first_name")?,
                customer_last_name: row.try_get("customer_last_name")?,
            });
        }

        Ok((orders, total_count))
    }

    async fn autocomplete(
        &self,
        model: AutocompleteModel,
        term: &str,
        limit: i64,
    ) -> ApiResult<Vec<AutocompleteResult>> {
        let terms: Vec<String> = term.split_whitespace().map(str::to_string).collect();

        let mut query = match model {
            AutocompleteModel::Collection => {
                let mut q = QueryBuilder::<Any>::new(
                    "SELECT id, title as text FROM collections WHERE 1 = 1",
                );
                push_search_terms(&mut q, &terms, &["title"], false);
                q.push(" ORDER BY title, id");
                q
            }
            AutocompleteModel::Product => {
                let mut q =
                    QueryBuilder::<Any>::new("SELECT id, title as text FROM products WHERE 1 = 1");
                push_search_terms(&mut q, &terms, &["title"], false);
                q.push(" ORDER BY title, id");
                q
            }
            AutocompleteModel::Customer => {
                let mut q = QueryBuilder::<Any>::new(
                    "SELECT id, first_name || ' ' || last_name as text FROM customers WHERE 1 = 1",
                );
                push_search_terms(&mut q, &terms, &["first_name", "last_name"], true);
                q.push(" ORDER BY first_name, last_name, id");
                q
            }
        };
        query.push(" LIMIT ").push_bind(limit);

        let rows = query.build().fetch_all(&self.pool).await?;
        let mut results = Vec::with_capacity(rows.len());
        for row in rows {
            results.push(AutocompleteResult {
                id: row.try_get("id")?,
                text: row.try_get("text")?,
            });
        }
        Ok(results)
    }
}
