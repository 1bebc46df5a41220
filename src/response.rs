//! Response helpers shared by handlers and the error mapper.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

/// Plain-text response with the given status.
pub fn plain(status: StatusCode, message: String) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        message,
    )
        .into_response()
}
