//! Order repository.
//!
//! Item lines are stored as a JSONB array on the order row. They are encoded
//! straight from the request and never joined against `grocery.item`.

use chrono::{DateTime, Utc};
use serde_json::Value as JsonValue;
use sqlx::PgPool;

use grocery_core::{ItemFields, NewOrder, Order, OrderId};

use super::RepositoryError;

/// Row shape of `grocery.order`.
#[derive(Debug, sqlx::FromRow)]
struct OrderRow {
    id: OrderId,
    user_id: String,
    items: JsonValue,
    created_at: DateTime<Utc>,
}

impl TryFrom<OrderRow> for Order {
    type Error = RepositoryError;

    fn try_from(row: OrderRow) -> Result<Self, Self::Error> {
        let items: Vec<ItemFields> = serde_json::from_value(row.items)?;
        Ok(Self {
            id: row.id,
            user_id: row.user_id,
            items,
            created_at: row.created_at,
        })
    }
}

/// Repository for order database operations.
pub struct OrderRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert an order with its item lines embedded.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Serialization` if the lines cannot be encoded.
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, order: &NewOrder) -> Result<Order, RepositoryError> {
        let items = serde_json::to_value(&order.items)?;

        let row = sqlx::query_as::<_, OrderRow>(
            r#"
            INSERT INTO grocery."order" (user_id, items)
            VALUES ($1, $2)
            RETURNING id, user_id, items, created_at
            "#,
        )
        .bind(&order.user_id)
        .bind(items)
        .fetch_one(self.pool)
        .await?;

        row.try_into()
    }
}
