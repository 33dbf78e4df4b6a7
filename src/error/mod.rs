//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type; every handler returns `Result<_, AppError>` and
//! the status-code taxonomy lives in exactly one place, the `IntoResponse`
//! implementation below.

pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{dto::api::ErrorDto, error::config::ConfigError};

/// Top-level application error type.
///
/// Aggregates all failures a request can produce and provides automatic
/// conversion to HTTP responses. The taxonomy is deliberately small:
/// absent targets are `NotFound`, malformed input is `Validation`,
/// credential failures are `Unauthorized`, store faults are `Store`, and
/// everything else is `Internal`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Only produced before the server starts accepting requests.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Document store operation error from the MongoDB driver.
    ///
    /// Results in 503 Service Unavailable. Driver details are logged
    /// server-side and a generic message is returned to the client.
    #[error(transparent)]
    StoreErr(#[from] mongodb::error::Error),

    /// Requested document does not exist.
    ///
    /// Results in 404 Not Found with the provided message.
    #[error("{0}")]
    NotFound(String),

    /// Request input failed validation before reaching the store.
    ///
    /// Results in 400 Bad Request with the provided message.
    #[error("{0}")]
    Validation(String),

    /// Credential failure during sign-up or login.
    ///
    /// Results in 401 Unauthorized with the provided message. Reserved for
    /// credential failures only; absent documents are `NotFound`.
    #[error("{0}")]
    Unauthorized(String),

    /// Internal server error with custom message.
    ///
    /// Results in 500 Internal Server Error. The provided message is logged
    /// but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

/// Converts application errors into HTTP responses.
///
/// Maps each error variant to its status code and a JSON body with a
/// `message` field. Store and internal errors are logged with full details
/// but return generic messages to avoid information leakage.
///
/// # Returns
/// - 400 Bad Request - For `Validation` variant
/// - 401 Unauthorized - For `Unauthorized` variant
/// - 404 Not Found - For `NotFound` variant
/// - 503 Service Unavailable - For `StoreErr` variant
/// - 500 Internal Server Error - For everything else
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { message: msg })).into_response()
            }
            Self::Validation(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { message: msg })).into_response()
            }
            Self::Unauthorized(msg) => {
                (StatusCode::UNAUTHORIZED, Json(ErrorDto { message: msg })).into_response()
            }
            Self::StoreErr(err) => {
                tracing::error!("Document store error: {}", err);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    Json(ErrorDto {
                        message: "Document store unavailable".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        message: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
            err => {
                tracing::error!("{}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        message: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
