//! Database migration command.
//!
//! # Usage
//!
//! ```bash
//! grocery-cli migrate
//! ```
//!
//! # Environment Variables
//!
//! - `GROCERY_DATABASE_URL` - `PostgreSQL` connection string (falls back to `DATABASE_URL`)
//!
//! # Migration Files
//!
//! Migrations live in `crates/server/migrations/` and are embedded at
//! compile time.

use tracing::info;

use grocery_server::config::GroceryConfig;
use grocery_server::db;

use super::CommandError;

/// Apply all pending migrations.
///
/// # Errors
///
/// Returns an error if configuration is missing, the database is
/// unreachable, or a migration fails.
pub async fn run() -> Result<(), CommandError> {
    let config = GroceryConfig::from_env()?;

    info!("Connecting to database...");
    let pool = db::create_pool(&config.database_url).await?;

    info!("Running migrations...");
    sqlx::migrate!("../server/migrations").run(&pool).await?;

    pool.close().await;
    info!("Migrations complete!");
    Ok(())
}
