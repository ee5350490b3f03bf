//! Unified error handling with one JSON error envelope for every endpoint.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Error detail carried inside the envelope.
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

/// JSON envelope for failed responses: `{"error": {"code", "message"}}`.
///
/// Successful responses are bare JSON values (the dashboard client consumes
/// the arrays directly); only failures are wrapped.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: ApiError,
}

/// Application error type mapping to HTTP status codes.
///
/// The reporting surface has essentially one failure mode: a data-access
/// error. The underlying message is embedded in the response body; this is
/// an internal dashboard, not a hardened boundary.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Database(e) => {
                tracing::error!(error = %e, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DATABASE_ERROR",
                    e.to_string(),
                )
            }
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    msg.clone(),
                )
            }
        };

        let body = ErrorBody {
            error: ApiError {
                code: code.to_string(),
                message,
            },
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_body_shape() {
        let body = ErrorBody {
            error: ApiError {
                code: "DATABASE_ERROR".to_string(),
                message: "connection refused".to_string(),
            },
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["error"]["code"], "DATABASE_ERROR");
        assert_eq!(json["error"]["message"], "connection refused");
    }

    #[test]
    fn app_error_display() {
        let err = AppError::Internal("pool exhausted".to_string());
        assert_eq!(err.to_string(), "Internal error: pool exhausted");
    }

    #[test]
    fn app_error_from_sqlx() {
        let sqlx_err = sqlx::Error::RowNotFound;
        let err: AppError = sqlx_err.into();
        assert!(matches!(err, AppError::Database(_)));
    }
}
