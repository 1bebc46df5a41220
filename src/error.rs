//! Typed errors and HTTP mapping.

use crate::response::plain;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

pub const USER_NOT_FOUND: &str = "User not found";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },
}

/// Faults raised by a [`crate::store::UserStore`].
#[derive(Error, Debug)]
pub enum StoreError {
    /// The record targeted by an update or delete does not exist.
    #[error("user {0} not found")]
    NotFound(i32),
    #[error("database: {0}")]
    Database(#[from] sqlx::Error),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("not found: {0}")]
    NotFound(String),
    /// Not found, answered with an empty JSON object.
    #[error("not found")]
    Missing,
    /// Failure answered with a plain-text sentence instead of JSON.
    #[error("{1}")]
    Plain(StatusCode, String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Serialize, ToSchema)]
pub struct ErrorBody {
    /// Human readable reason.
    #[schema(example = "User not found")]
    pub error: String,
}

impl ErrorBody {
    fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, Json(ErrorBody::new(message))).into_response()
            }
            AppError::NotFound(message) => {
                (StatusCode::NOT_FOUND, Json(ErrorBody::new(message))).into_response()
            }
            AppError::Missing => {
                (StatusCode::NOT_FOUND, Json(serde_json::json!({}))).into_response()
            }
            AppError::Plain(status, message) => plain(status, message),
            AppError::Store(StoreError::NotFound(_)) => {
                (StatusCode::NOT_FOUND, Json(ErrorBody::new(USER_NOT_FOUND))).into_response()
            }
            AppError::Store(StoreError::Database(e)) => {
                tracing::error!(error = %e, "store fault");
                internal_error()
            }
            AppError::Config(e) => {
                tracing::error!(error = %e, "configuration fault");
                internal_error()
            }
        }
    }
}

fn internal_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody::new("internal server error")),
    )
        .into_response()
}
