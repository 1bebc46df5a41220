//! Helpers for driving the full router in-process.

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;
use user_api::{app, ApiSettings, AppState, MemoryUserStore};

pub struct TestResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub headers: axum::http::HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("json body")
    }

    pub fn text(&self) -> String {
        String::from_utf8(self.body.clone()).expect("utf-8 body")
    }
}

pub fn router(settings: ApiSettings) -> Router {
    app(AppState::new(MemoryUserStore::new(), settings)).expect("router")
}

pub fn default_router() -> Router {
    router(ApiSettings::default())
}

pub async fn send(router: &Router, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
    send_with_headers(router, method, uri, &[], body).await
}

pub async fn send_with_headers(
    router: &Router,
    method: Method,
    uri: &str,
    headers: &[(&str, &str)],
    body: Option<Value>,
) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    let body = match body {
        Some(value) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };
    let response = router
        .clone()
        .oneshot(builder.body(body).expect("request"))
        .await
        .expect("infallible");
    let status = response.status();
    let headers = response.headers().clone();
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    let body = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    TestResponse {
        status,
        content_type,
        headers,
        body: body.to_vec(),
    }
}

pub async fn create(router: &Router, name: &str, email: &str) -> Value {
    let response = send(
        router,
        Method::POST,
        "/api/users",
        Some(serde_json::json!({ "name": name, "email": email })),
    )
    .await;
    assert_eq!(response.status, StatusCode::OK);
    response.json()
}
