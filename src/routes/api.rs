//! Route tables. Keep in sync with the paths listed in [`crate::doc::ApiDoc`].

use crate::handlers::{
    create_user, delete_user, get_user, list_books, list_users, live, ready, replace_user,
    update_user, version,
};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn user_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/users", get(list_users).post(create_user))
        .route(
            "/api/users/:id",
            get(get_user)
                .patch(update_user)
                .put(replace_user)
                .delete(delete_user),
        )
        .with_state(state)
}

pub fn book_routes() -> Router {
    Router::new().route("/api/books", get(list_books))
}

/// GET /health, /ready, /version and /info.
pub fn probe_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(live))
        .route("/ready", get(ready))
        .route("/version", get(version))
        .route("/info", get(version))
        .with_state(state)
}
