//! Lenient JSON body: anything that is not a JSON object reads as `{}`.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde_json::{Map, Value};

/// JSON object from the request body, regardless of `Content-Type`.
///
/// Empty, malformed or non-object bodies yield an empty object, so field
/// validation reports them as missing fields rather than as a decode failure.
#[derive(Clone, Debug)]
pub struct JsonBody(pub Value);

#[async_trait]
impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;
        Ok(JsonBody(parse_object(&bytes)))
    }
}

fn parse_object(bytes: &[u8]) -> Value {
    if bytes.is_empty() {
        return Value::Object(Map::new());
    }
    match serde_json::from_slice::<Value>(bytes) {
        Ok(value @ Value::Object(_)) => value,
        Ok(_) => {
            tracing::warn!("request body is not a JSON object");
            Value::Object(Map::new())
        }
        Err(e) => {
            tracing::warn!(error = %e, "request body is not valid JSON");
            Value::Object(Map::new())
        }
    }
}
