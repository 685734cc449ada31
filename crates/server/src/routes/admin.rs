//! Catalog management handlers.
//!
//! Update and delete do not check that the item exists: a miss is logged and
//! still answered with the success message.

use axum::{
    Json, Router,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    routing::{get, put},
};

use grocery_core::{GroceryItem, ItemFields, ItemId};

use super::{MessageResponse, catalog};
use crate::error::{Operation, Result, ResultExt};
use crate::state::AppState;

/// Build the admin catalog router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/admin/items", get(catalog::list_items).post(add_item))
        .route("/admin/items/{id}", put(update_item).delete(delete_item))
}

/// Add an item to the catalog.
///
/// # Errors
///
/// Returns "Could not add item" if the body is malformed or the insert fails.
pub async fn add_item(
    State(state): State<AppState>,
    body: std::result::Result<Json<ItemFields>, JsonRejection>,
) -> Result<(StatusCode, Json<GroceryItem>)> {
    let Json(fields) = body.during(Operation::AddItem)?;

    let item = state
        .store()
        .create_item(&fields)
        .await
        .during(Operation::AddItem)?;

    tracing::info!(item_id = %item.id, name = %item.name, "Item added");
    Ok((StatusCode::CREATED, Json(item)))
}

/// Replace an item's name, price, and quantity.
///
/// # Errors
///
/// Returns "Could not update item" if the id or body is malformed or the
/// update fails.
pub async fn update_item(
    State(state): State<AppState>,
    id: std::result::Result<Path<ItemId>, PathRejection>,
    body: std::result::Result<Json<ItemFields>, JsonRejection>,
) -> Result<Json<MessageResponse>> {
    let Path(id) = id.during(Operation::UpdateItem)?;
    let Json(fields) = body.during(Operation::UpdateItem)?;

    let matched = state
        .store()
        .update_item(id, &fields)
        .await
        .during(Operation::UpdateItem)?;

    if matched {
        tracing::info!(item_id = %id, "Item updated");
    } else {
        tracing::debug!(item_id = %id, "Update matched no item");
    }

    Ok(Json(MessageResponse {
        message: "Item updated successfully",
    }))
}

/// Delete an item from the catalog.
///
/// # Errors
///
/// Returns "Could not delete item" if the id is malformed or the delete fails.
pub async fn delete_item(
    State(state): State<AppState>,
    id: std::result::Result<Path<ItemId>, PathRejection>,
) -> Result<Json<MessageResponse>> {
    let Path(id) = id.during(Operation::DeleteItem)?;

    let matched = state
        .store()
        .delete_item(id)
        .await
        .during(Operation::DeleteItem)?;

    if matched {
        tracing::info!(item_id = %id, "Item deleted");
    } else {
        tracing::debug!(item_id = %id, "Delete matched no item");
    }

    Ok(Json(MessageResponse {
        message: "Item deleted successfully",
    }))
}
