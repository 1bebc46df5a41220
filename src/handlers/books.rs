//! Fixed books listing.

use crate::model::{books, Book};
use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct BookList {
    pub data: Vec<Book>,
}

/// GET /api/books
#[utoipa::path(
    get,
    path = "/api/books",
    tag = "books",
    responses((status = 200, description = "The fixed books listing", body = BookList))
)]
pub async fn list_books() -> Json<BookList> {
    Json(BookList { data: books() })
}
