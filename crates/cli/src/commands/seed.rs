//! Seed the catalog from a YAML file.
//!
//! The file is a list of items:
//!
//! ```yaml
//! - name: Milk
//!   price: 3.5
//!   quantity: 10
//! ```
//!
//! Orders are never touched.

use std::path::Path;

use tracing::info;

use grocery_core::ItemFields;
use grocery_server::config::GroceryConfig;
use grocery_server::db::{GroceryStore, PgStore};

use super::CommandError;

/// Outcome of a seeding run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SeedSummary {
    /// Items removed before seeding.
    pub removed: usize,
    /// Items added from the file.
    pub added: usize,
}

/// Seed the catalog from `file_path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, configuration is
/// missing, or a store operation fails.
pub async fn run(file_path: &Path, clear_existing: bool) -> Result<(), CommandError> {
    // Read and validate the file before connecting to the database
    let content = tokio::fs::read_to_string(file_path)
        .await
        .map_err(|source| CommandError::Io {
            path: file_path.display().to_string(),
            source,
        })?;
    let items = parse_catalog(&content)?;
    info!(path = %file_path.display(), items = items.len(), "Parsed catalog file");

    let config = GroceryConfig::from_env()?;
    let store = PgStore::connect(&config.database_url).await?;
    info!("Connected to database");

    let summary = seed_catalog(&store, &items, clear_existing).await?;
    store.close().await;

    info!("Seeding complete!");
    info!("  Items removed: {}", summary.removed);
    info!("  Items added: {}", summary.added);
    Ok(())
}

/// Parse a YAML catalog file.
///
/// # Errors
///
/// Returns `CommandError::Yaml` if the content is not a list of items.
pub fn parse_catalog(content: &str) -> Result<Vec<ItemFields>, CommandError> {
    Ok(serde_yaml::from_str(content)?)
}

/// Add `items` to the catalog, optionally clearing it first.
///
/// # Errors
///
/// Returns `CommandError::Store` on the first failed store operation.
pub async fn seed_catalog(
    store: &dyn GroceryStore,
    items: &[ItemFields],
    clear_existing: bool,
) -> Result<SeedSummary, CommandError> {
    let mut summary = SeedSummary::default();

    if clear_existing {
        for item in store.list_items().await? {
            if store.delete_item(item.id).await? {
                summary.removed += 1;
            }
        }
    }

    for fields in items {
        let item = store.create_item(fields).await?;
        tracing::debug!(item_id = %item.id, name = %item.name, "Seeded item");
        summary.added += 1;
    }

    Ok(summary)
}
