//! Browsing and ordering handlers.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    routing::{get, post},
};

use grocery_core::{NewOrder, Order};

use super::catalog;
use crate::error::{Operation, Result, ResultExt};
use crate::state::AppState;

/// Build the user-facing router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/user/items", get(catalog::list_items))
        .route("/user/orders", post(create_order))
}

/// Place an order.
///
/// Item lines are stored exactly as submitted; prices and quantities are not
/// checked against the catalog.
///
/// # Errors
///
/// Returns "Could not create order" if the body is malformed or the insert
/// fails.
pub async fn create_order(
    State(state): State<AppState>,
    body: std::result::Result<Json<NewOrder>, JsonRejection>,
) -> Result<(StatusCode, Json<Order>)> {
    let Json(order) = body.during(Operation::CreateOrder)?;

    let order = state
        .store()
        .create_order(&order)
        .await
        .during(Operation::CreateOrder)?;

    tracing::info!(
        order_id = %order.id,
        user_id = %order.user_id,
        lines = order.items.len(),
        "Order created"
    );
    Ok((StatusCode::CREATED, Json(order)))
}
