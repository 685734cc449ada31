//! Catalog item repository.
//!
//! Queries are built with `sqlx::query_as` and checked at runtime so the
//! crate builds without a live database.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use grocery_core::{GroceryItem, ItemFields, ItemId};

use super::RepositoryError;

/// Row shape of `grocery.item`.
#[derive(Debug, sqlx::FromRow)]
struct ItemRow {
    id: ItemId,
    name: String,
    price: f64,
    quantity: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ItemRow> for GroceryItem {
    fn from(row: ItemRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            price: row.price,
            quantity: row.quantity,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Repository for catalog item database operations.
pub struct ItemRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ItemRepository<'a> {
    /// Create a new item repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new catalog item.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, fields: &ItemFields) -> Result<GroceryItem, RepositoryError> {
        let row = sqlx::query_as::<_, ItemRow>(
            r"
            INSERT INTO grocery.item (name, price, quantity)
            VALUES ($1, $2, $3)
            RETURNING id, name, price, quantity, created_at, updated_at
            ",
        )
        .bind(&fields.name)
        .bind(fields.price)
        .bind(fields.quantity)
        .fetch_one(self.pool)
        .await?;

        Ok(row.into())
    }

    /// List every catalog item, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<GroceryItem>, RepositoryError> {
        let rows = sqlx::query_as::<_, ItemRow>(
            r"
            SELECT id, name, price, quantity, created_at, updated_at
            FROM grocery.item
            ORDER BY id
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(GroceryItem::from).collect())
    }

    /// Replace all fields of an item.
    ///
    /// Returns `true` if a row was updated.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the update fails.
    pub async fn update(&self, id: ItemId, fields: &ItemFields) -> Result<bool, RepositoryError> {
        let result = sqlx::query(
            r"
            UPDATE grocery.item
            SET name = $2, price = $3, quantity = $4, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(id)
        .bind(&fields.name)
        .bind(fields.price)
        .bind(fields.quantity)
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete an item.
    ///
    /// Returns `true` if a row was deleted.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the delete fails.
    pub async fn delete(&self, id: ItemId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM grocery.item WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
