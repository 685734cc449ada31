//! Catalog listing shared by the admin and user surfaces.

use axum::{Json, extract::State};

use grocery_core::GroceryItem;

use crate::error::{Operation, Result, ResultExt};
use crate::state::AppState;

/// List every catalog item.
///
/// Served unchanged on both `/admin/items` and `/user/items`.
///
/// # Errors
///
/// Returns "Could not fetch items" if the store query fails.
pub async fn list_items(State(state): State<AppState>) -> Result<Json<Vec<GroceryItem>>> {
    let items = state
        .store()
        .list_items()
        .await
        .during(Operation::FetchItems)?;

    tracing::debug!(count = items.len(), "Fetched catalog");
    Ok(Json(items))
}
