//! Router assembly: API routes, docs, probes, static demo and header policies.

mod api;
mod security;

pub use api::{book_routes, probe_routes, user_routes};
pub use security::{cors_layer, csp_layer};

use crate::doc::docs_routes;
use crate::error::ConfigError;
use crate::state::AppState;
use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// The complete application router.
pub fn app(state: AppState) -> Result<Router, ConfigError> {
    let settings = state.settings.clone();

    let mut router = Router::new()
        .merge(probe_routes(state.clone()))
        .merge(book_routes())
        .merge(user_routes(state))
        .merge(docs_routes());

    if let Some(dir) = &settings.static_dir {
        tracing::info!(dir = %dir.display(), "serving static files");
        router = router.fallback_service(ServeDir::new(dir));
    }
    if let Some(csp) = csp_layer(&settings)? {
        router = router.layer(csp);
    }
    if let Some(cors) = cors_layer(&settings)? {
        router = router.layer(cors);
    }
    Ok(router.layer(TraceLayer::new_for_http()))
}
