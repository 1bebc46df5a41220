//! Load settings from environment variables (and `.env`, when present).

use crate::config::types::{ApiSettings, DeleteResponse, Settings, StoreKind};
use crate::error::ConfigError;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost/user_api";
pub const DEFAULT_BIND: &str = "0.0.0.0:3000";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

impl Settings {
    /// Read settings from the process environment after loading `.env`.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let database_url = get("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into());

        let bind = get("USER_API_BIND").unwrap_or_else(|| DEFAULT_BIND.into());
        let bind_addr: SocketAddr = bind.parse().map_err(|_| ConfigError::InvalidValue {
            key: "USER_API_BIND",
            value: bind.clone(),
        })?;

        let max_connections = match get("USER_API_MAX_CONNECTIONS") {
            Some(v) => v
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or(ConfigError::InvalidValue {
                    key: "USER_API_MAX_CONNECTIONS",
                    value: v,
                })?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let store = match get("USER_API_STORE") {
            Some(v) => match v.to_lowercase().as_str() {
                "postgres" => StoreKind::Postgres,
                "memory" => StoreKind::Memory,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: "USER_API_STORE",
                        value: v,
                    })
                }
            },
            None => StoreKind::default(),
        };

        let delete_response = match get("USER_API_DELETE_RESPONSE") {
            Some(v) => match v.to_lowercase().as_str() {
                "record" => DeleteResponse::Record,
                "message" => DeleteResponse::Message,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: "USER_API_DELETE_RESPONSE",
                        value: v,
                    })
                }
            },
            None => DeleteResponse::default(),
        };

        let cors_origins = get("USER_API_CORS_ORIGINS")
            .map(|v| {
                v.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Settings {
            database_url,
            bind_addr,
            max_connections,
            store,
            api: ApiSettings {
                delete_response,
                cors_origins,
                content_security_policy: get("USER_API_CONTENT_SECURITY_POLICY"),
                static_dir: get("USER_API_STATIC_DIR").map(PathBuf::from),
            },
        })
    }
}
