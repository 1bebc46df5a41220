//! Liveness, readiness and build metadata.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Health {
    Ok,
    Degraded,
    Unavailable,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct Liveness {
    pub status: Health,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct Readiness {
    pub status: Health,
    /// Outcome of a round trip to the user store.
    pub database: Health,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ServiceInfo {
    #[schema(example = "user-api")]
    pub name: String,
    #[schema(example = "0.1.0")]
    pub version: String,
}

/// GET /health
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "Process is up", body = Liveness))
)]
pub async fn live() -> Json<Liveness> {
    Json(Liveness { status: Health::Ok })
}

/// GET /ready
///
/// 503 while the store does not answer.
#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    responses(
        (status = 200, description = "Store reachable", body = Readiness),
        (status = 503, description = "Store unreachable", body = Readiness)
    )
)]
pub async fn ready(State(state): State<AppState>) -> (StatusCode, Json<Readiness>) {
    match state.store.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(Readiness {
                status: Health::Ok,
                database: Health::Ok,
            }),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "readiness check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(Readiness {
                    status: Health::Degraded,
                    database: Health::Unavailable,
                }),
            )
        }
    }
}

/// GET /version (also served at /info)
#[utoipa::path(
    get,
    path = "/version",
    tag = "health",
    responses((status = 200, description = "Crate name and version", body = ServiceInfo))
)]
pub async fn version() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        name: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
