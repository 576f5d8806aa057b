//! API error type and HTTP response mapping

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::error;

use catalog_core::error::DomainError;

/// JSON error body. The `detail` field carries the fixed per-entity
/// not-found messages that clients match on.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    detail: String,
}

impl ApiError {
    pub fn not_found(detail: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            detail: detail.into(),
        }
    }

    pub fn conflict(detail: impl Into<String>) -> Self {
        Self {
            status: StatusCode::CONFLICT,
            detail: detail.into(),
        }
    }

    pub fn internal() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            detail: "internal server error".to_string(),
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::MenuNotFound | DomainError::SubmenuNotFound | DomainError::DishNotFound => {
                Self::not_found(err.to_string())
            }
            DomainError::MenuTitleAlreadyExists(_)
            | DomainError::SubmenuTitleAlreadyExists(_)
            | DomainError::DishTitleAlreadyExists(_) => Self::conflict(err.to_string()),
            other => {
                // Database and internal failures are logged, never echoed.
                error!("Unhandled domain error: {}", other);
                Self::internal()
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorBody {
                detail: self.detail,
            }),
        )
            .into_response()
    }
}
