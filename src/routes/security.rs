//! Optional header policies: CORS allow-list and Content-Security-Policy.

use crate::config::ApiSettings;
use crate::error::ConfigError;
use axum::http::{header, HeaderValue, Method};
use tower_http::cors::CorsLayer;
use tower_http::set_header::SetResponseHeaderLayer;

/// CORS layer for the configured origins; `None` when no origin is allowed.
pub fn cors_layer(settings: &ApiSettings) -> Result<Option<CorsLayer>, ConfigError> {
    if settings.cors_origins.is_empty() {
        return Ok(None);
    }
    let origins = settings
        .cors_origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|_| ConfigError::InvalidValue {
                key: "USER_API_CORS_ORIGINS",
                value: origin.clone(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Some(
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PATCH,
                Method::PUT,
                Method::DELETE,
            ])
            .allow_headers([header::CONTENT_TYPE]),
    ))
}

/// Sets `Content-Security-Policy` on every response, when configured.
pub fn csp_layer(
    settings: &ApiSettings,
) -> Result<Option<SetResponseHeaderLayer<HeaderValue>>, ConfigError> {
    let Some(policy) = settings.content_security_policy.as_deref() else {
        return Ok(None);
    };
    let value = HeaderValue::from_str(policy).map_err(|_| ConfigError::InvalidValue {
        key: "USER_API_CONTENT_SECURITY_POLICY",
        value: policy.to_string(),
    })?;
    Ok(Some(SetResponseHeaderLayer::overriding(
        header::CONTENT_SECURITY_POLICY,
        value,
    )))
}
