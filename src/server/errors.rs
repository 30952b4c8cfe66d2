//! JSON error envelope shared by every endpoint.
//!
//! Failures are reported as `{"success": false, "error": <status>, "message": <text>}`
//! with the HTTP status mirrored in `error`. The underlying cause is logged,
//! never sent to the client.

use std::fmt::Display;

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("bad request")]
    BadRequest,
    #[error("not found")]
    NotFound,
    #[error("unprocessable")]
    Unprocessable,
    #[error("internal server error")]
    Internal,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Unprocessable => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    error: u16,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            success: false,
            error: status.as_u16(),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(error: sqlx::Error) -> Self {
        tracing::error!(%error, "database error");
        ApiError::Internal
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(%rejection, "rejected request body");
        ApiError::BadRequest
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!(%rejection, "rejected path parameters");
        ApiError::BadRequest
    }
}

pub trait OrApiError<T> {
    /// Replaces any error with `kind`, logging the original cause.
    fn or_api_error(self, kind: ApiError) -> Result<T, ApiError>;
}

impl<T, E: Display> OrApiError<T> for Result<T, E> {
    fn or_api_error(self, kind: ApiError) -> Result<T, ApiError> {
        self.map_err(|error| {
            tracing::warn!(%error, status = kind.status_code().as_u16(), "request failed");
            kind
        })
    }
}
