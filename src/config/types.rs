//! Settings types. Divergences between deployments are expressed here as flags.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Which persistence gateway backs the API.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StoreKind {
    #[default]
    Postgres,
    /// In-process store; data is lost on shutdown.
    Memory,
}

/// Shape of DELETE /api/users/:id responses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DeleteResponse {
    /// Deleted record as JSON; `{"error": ...}` on failure.
    #[default]
    Record,
    /// Plain-text sentence for both success and failure.
    Message,
}

/// Settings consumed by the router and handlers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApiSettings {
    pub delete_response: DeleteResponse,
    /// Origins allowed by CORS. Empty disables the CORS layer.
    pub cors_origins: Vec<String>,
    /// Value of the `Content-Security-Policy` header, when set.
    pub content_security_policy: Option<String>,
    /// Directory served as router fallback (demo page).
    pub static_dir: Option<PathBuf>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub max_connections: u32,
    pub store: StoreKind,
    pub api: ApiSettings,
}
