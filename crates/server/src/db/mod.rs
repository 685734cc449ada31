//! Store client for the grocery catalog and orders.
//!
//! # Database: `grocery_booking`
//!
//! ## Tables (schema `grocery`)
//!
//! - `item` - Catalog entries (name, price, quantity)
//! - `order` - Placed orders, each with its item lines embedded as a JSONB document
//!
//! # Migrations
//!
//! Migrations are stored in `crates/server/migrations/` and run via:
//! ```bash
//! cargo run -p grocery-cli -- migrate
//! ```
//!
//! Handlers never touch the pool directly. They go through [`GroceryStore`],
//! which is constructed once at startup and injected via `AppState`.

pub mod items;
pub mod memory;
pub mod orders;

use std::time::Duration;

use async_trait::async_trait;
use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

use grocery_core::{GroceryItem, ItemFields, ItemId, NewOrder, Order};

pub use items::ItemRepository;
pub use memory::MemoryStore;
pub use orders::OrderRepository;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Embedded document could not be encoded or decoded.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Persistence operations backing the HTTP API.
///
/// Every method is a single store round-trip. Update and delete report
/// whether a row matched; callers decide what a miss means.
#[async_trait]
pub trait GroceryStore: Send + Sync {
    /// Insert a catalog item and return it with its assigned identity.
    async fn create_item(&self, fields: &ItemFields) -> Result<GroceryItem, RepositoryError>;

    /// Return every catalog item in identity order.
    async fn list_items(&self) -> Result<Vec<GroceryItem>, RepositoryError>;

    /// Replace name, price, and quantity of an item.
    ///
    /// Returns `false` if no item has the given identity.
    async fn update_item(&self, id: ItemId, fields: &ItemFields) -> Result<bool, RepositoryError>;

    /// Remove an item from the catalog.
    ///
    /// Returns `false` if no item has the given identity.
    async fn delete_item(&self, id: ItemId) -> Result<bool, RepositoryError>;

    /// Persist an order with its item lines copied verbatim.
    async fn create_order(&self, order: &NewOrder) -> Result<Order, RepositoryError>;

    /// Check that the store is reachable.
    async fn ping(&self) -> Result<(), RepositoryError>;

    /// Release store resources. Called once on shutdown.
    async fn close(&self);
}

/// `PostgreSQL`-backed store.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Wrap an existing connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect to the database and build a store.
    ///
    /// # Errors
    ///
    /// Returns `sqlx::Error` if the connection cannot be established.
    pub async fn connect(database_url: &secrecy::SecretString) -> Result<Self, sqlx::Error> {
        Ok(Self::new(create_pool(database_url).await?))
    }
}

#[async_trait]
impl GroceryStore for PgStore {
    async fn create_item(&self, fields: &ItemFields) -> Result<GroceryItem, RepositoryError> {
        ItemRepository::new(&self.pool).create(fields).await
    }

    async fn list_items(&self) -> Result<Vec<GroceryItem>, RepositoryError> {
        ItemRepository::new(&self.pool).list().await
    }

    async fn update_item(&self, id: ItemId, fields: &ItemFields) -> Result<bool, RepositoryError> {
        ItemRepository::new(&self.pool).update(id, fields).await
    }

    async fn delete_item(&self, id: ItemId) -> Result<bool, RepositoryError> {
        ItemRepository::new(&self.pool).delete(id).await
    }

    async fn create_order(&self, order: &NewOrder) -> Result<Order, RepositoryError> {
        OrderRepository::new(&self.pool).create(order).await
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Arguments
///
/// * `database_url` - `PostgreSQL` connection string (wrapped in `SecretString`)
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
