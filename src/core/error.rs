//! Core error handling

use std::time::Duration;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

/// Failure raised by a product store operation.
#[derive(Debug, Error)]
pub enum StoreError {
    #[cfg(feature = "database")]
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The submitted price could not be coerced to a number.
    #[error("invalid price {0:?}")]
    InvalidPrice(String),

    #[error("store operation timed out after {0:?}")]
    Timeout(Duration),
}

/// Errors surfaced at the handler boundary. Every variant becomes a
/// plain-text response; nothing propagates past the HTTP layer.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid product ID")]
    InvalidProductId,

    #[error("Method not supported")]
    MethodNotAllowed,

    /// The edit form was asked for an id with no row behind it.
    #[error("no product with ID {0}")]
    ProductMissing(i32),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Render(#[from] minijinja::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::InvalidProductId => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::MethodNotAllowed => (StatusCode::METHOD_NOT_ALLOWED, self.to_string()),
            AppError::ProductMissing(id) => {
                error!("Error fetching product details: no product with ID {}", id);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Error fetching product details".to_string(),
                )
            }
            AppError::Store(StoreError::Timeout(limit)) => {
                error!("Database operation timed out after {:?}", limit);
                (
                    StatusCode::GATEWAY_TIMEOUT,
                    "Timed out waiting for the database".to_string(),
                )
            }
            AppError::Store(e) => {
                error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Error accessing the database".to_string(),
                )
            }
            AppError::Render(e) => {
                error!("Template error: {:#}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Error rendering page".to_string(),
                )
            }
        };

        (status, message).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_follow_error_kind() {
        let cases = [
            (AppError::InvalidProductId, StatusCode::BAD_REQUEST),
            (AppError::MethodNotAllowed, StatusCode::METHOD_NOT_ALLOWED),
            (AppError::ProductMissing(3), StatusCode::INTERNAL_SERVER_ERROR),
            (
                AppError::Store(StoreError::InvalidPrice("abc".into())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                AppError::Store(StoreError::Timeout(Duration::from_secs(1))),
                StatusCode::GATEWAY_TIMEOUT,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }

    #[test]
    fn validation_messages_are_plain_text() {
        assert_eq!(AppError::InvalidProductId.to_string(), "Invalid product ID");
        assert_eq!(AppError::MethodNotAllowed.to_string(), "Method not supported");
    }
}
