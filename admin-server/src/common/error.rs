//! Unified Error Handling
//!
//! Every handler returns [`AppResult`]. The variant decides the status code:
//!
//! | Variant | Status |
//! |---------|--------|
//! | `Validation` | 400 |
//! | `InvalidCredentials` | 401 |
//! | `NotFound` | 404 |
//! | `Database` | 500, driver message passed through in `error` |
//! | `TokenSigning` | 500 |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::{error, warn};

use crate::db::StoreError;

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Application-level error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Rejected before any store access
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    /// A by-key lookup matched no rows
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("{context}: {source}")]
    Database {
        context: &'static str,
        #[source]
        source: StoreError,
    },

    #[error("Token signing failed: {0}")]
    TokenSigning(String),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Wrap a store failure with what the handler was doing.
    ///
    /// ```ignore
    /// state.store.list_sites().await.map_err(AppError::database("Error fetching sites"))?;
    /// ```
    pub fn database(context: &'static str) -> impl FnOnce(StoreError) -> Self {
        move |source| Self::Database { context, source }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Database { .. } | Self::TokenSigning(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for AppError {
    fn from(source: StoreError) -> Self {
        Self::Database {
            context: "Database error",
            source,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            AppError::Validation(message) => {
                warn!(%message, "Request rejected");
                ErrorBody {
                    success: false,
                    message,
                    error: None,
                }
            }
            AppError::InvalidCredentials => {
                warn!(target: "security", "Login failed: invalid credentials");
                ErrorBody {
                    success: false,
                    message: "Invalid credentials".to_string(),
                    error: None,
                }
            }
            AppError::NotFound(message) => {
                warn!(%message, "Resource not found");
                ErrorBody {
                    success: false,
                    message,
                    error: None,
                }
            }
            AppError::Database { context, source } => {
                error!(target: "database", error = %source, "{context}");
                ErrorBody {
                    success: false,
                    message: context.to_string(),
                    error: Some(source.to_string()),
                }
            }
            AppError::TokenSigning(detail) => {
                error!(target: "security", error = %detail, "Token signing failed");
                ErrorBody {
                    success: false,
                    message: "Error during login".to_string(),
                    error: Some(detail),
                }
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for handlers
pub type AppResult<T> = Result<T, AppError>;

/// `{"message": ...}` success body
pub fn message(text: &str) -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": text }))
}
