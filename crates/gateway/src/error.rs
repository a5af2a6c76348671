//! Gateway error types.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Request-level failures.
///
/// These reject a whole request before any action runs. Failures of
/// individual actions are never represented here; they are reported in
/// that action's outcome.
#[derive(Debug, Error)]
pub enum Error {
    /// The request body is not a valid batch.
    #[error("invalid request body: {0}")]
    InvalidBody(#[from] serde_json::Error),

    /// The task running a batch panicked.
    #[error("batch dispatch failed: {0}")]
    Dispatch(#[from] tokio::task::JoinError),

    /// The listener failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match &self {
            Error::InvalidBody(_) => StatusCode::BAD_REQUEST,
            Error::Dispatch(_) | Error::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

pub type Result<T> = std::result::Result<T, Error>;
