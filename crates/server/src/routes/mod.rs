//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health               - Liveness check
//! GET    /health/ready         - Readiness check (store reachable)
//!
//! # Admin (catalog management)
//! POST   /admin/items          - Add item
//! GET    /admin/items          - List items
//! PUT    /admin/items/{id}     - Replace item fields
//! DELETE /admin/items/{id}     - Delete item
//!
//! # User (browsing and ordering)
//! GET    /user/items           - List items
//! POST   /user/orders          - Place order
//! ```
//!
//! Every failure of an API route answers `500` with a static
//! `{"error": "..."}` body. See [`crate::error`].

pub mod admin;
pub mod catalog;
pub mod health;
pub mod user;

use axum::{Router, routing::get};
use serde::Serialize;

use crate::state::AppState;

/// Build the complete application router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::readiness))
        .merge(admin::router())
        .merge(user::router())
}

/// Confirmation body for writes that return no record.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
