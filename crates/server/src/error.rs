//! Unified error handling with Sentry integration.
//!
//! Handlers work with the typed [`AppError`] internally and attach the
//! [`Operation`] that failed before returning. At the HTTP boundary every
//! [`OperationError`] is flattened to `500` with that operation's static
//! message; the detail only goes to logs and Sentry.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::db::RepositoryError;

/// Application-level error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Store operation failed.
    #[error("Database error: {0}")]
    Database(#[from] RepositoryError),

    /// Request could not be decoded (malformed body or identity).
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl AppError {
    /// Attach the operation this error aborted.
    #[must_use]
    pub fn during(self, operation: Operation) -> OperationError {
        OperationError {
            operation,
            source: self,
        }
    }
}

/// API operations, each with its own client-facing failure message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    AddItem,
    FetchItems,
    UpdateItem,
    DeleteItem,
    CreateOrder,
}

impl Operation {
    /// Static message returned to the client when the operation fails.
    #[must_use]
    pub const fn failure_message(self) -> &'static str {
        match self {
            Self::AddItem => "Could not add item",
            Self::FetchItems => "Could not fetch items",
            Self::UpdateItem => "Could not update item",
            Self::DeleteItem => "Could not delete item",
            Self::CreateOrder => "Could not create order",
        }
    }

    const fn as_str(self) -> &'static str {
        match self {
            Self::AddItem => "add_item",
            Self::FetchItems => "fetch_items",
            Self::UpdateItem => "update_item",
            Self::DeleteItem => "delete_item",
            Self::CreateOrder => "create_order",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An [`AppError`] tagged with the operation it aborted.
#[derive(Debug, Error)]
#[error("{operation} failed: {source}")]
pub struct OperationError {
    pub operation: Operation,
    #[source]
    pub source: AppError,
}

impl IntoResponse for OperationError {
    fn into_response(self) -> Response {
        match &self.source {
            AppError::Database(_) => {
                let event_id = sentry::capture_error(&self);
                tracing::error!(
                    operation = %self.operation,
                    error = %self.source,
                    sentry_event_id = %event_id,
                    "Request error"
                );
            }
            AppError::BadRequest(_) => {
                tracing::warn!(
                    operation = %self.operation,
                    error = %self.source,
                    "Rejected request"
                );
            }
        }

        // Don't expose error details to clients
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": self.operation.failure_message() })),
        )
            .into_response()
    }
}

/// Tag any error convertible into [`AppError`] with an [`Operation`].
pub trait ResultExt<T> {
    /// Map the error side into an [`OperationError`].
    ///
    /// # Errors
    ///
    /// Returns the converted error if `self` is `Err`.
    fn during(self, operation: Operation) -> std::result::Result<T, OperationError>;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<AppError>,
{
    fn during(self, operation: Operation) -> std::result::Result<T, OperationError> {
        self.map_err(|e| Into::<AppError>::into(e).during(operation))
    }
}

/// Result type alias for handler results.
pub type Result<T> = std::result::Result<T, OperationError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::BadRequest("invalid input".to_string());
        assert_eq!(err.to_string(), "Bad request: invalid input");

        let err = AppError::BadRequest("missing field".to_string()).during(Operation::AddItem);
        assert_eq!(err.to_string(), "add_item failed: Bad request: missing field");
    }

    #[test]
    fn test_failure_messages() {
        assert_eq!(Operation::AddItem.failure_message(), "Could not add item");
        assert_eq!(
            Operation::FetchItems.failure_message(),
            "Could not fetch items"
        );
        assert_eq!(
            Operation::UpdateItem.failure_message(),
            "Could not update item"
        );
        assert_eq!(
            Operation::DeleteItem.failure_message(),
            "Could not delete item"
        );
        assert_eq!(
            Operation::CreateOrder.failure_message(),
            "Could not create order"
        );
    }

    #[tokio::test]
    async fn test_every_kind_flattens_to_500() {
        let errors = [
            AppError::BadRequest("bad id".to_string()).during(Operation::UpdateItem),
            AppError::Database(RepositoryError::Database(sqlx::Error::PoolTimedOut))
                .during(Operation::UpdateItem),
        ];

        for err in errors {
            let response = err.into_response();
            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(
                body_json(response).await,
                json!({ "error": "Could not update item" })
            );
        }
    }

    #[tokio::test]
    async fn test_response_hides_detail() {
        let response = AppError::BadRequest("secret detail".to_string())
            .during(Operation::CreateOrder)
            .into_response();

        let body = body_json(response).await;
        assert!(!body.to_string().contains("secret detail"));
    }

    #[test]
    fn test_result_ext_tags_operation() {
        let result: std::result::Result<(), RepositoryError> =
            Err(RepositoryError::Database(sqlx::Error::PoolClosed));

        let err = result.during(Operation::DeleteItem).unwrap_err();
        assert_eq!(err.operation, Operation::DeleteItem);
        assert!(matches!(err.source, AppError::Database(_)));
    }
}
