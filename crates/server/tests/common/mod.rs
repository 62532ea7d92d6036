#![allow(dead_code)]

use axum::{
    body::Body,
    http::{HeaderMap, Method, Request, StatusCode},
    Router,
};
use configs::AppConfig;
use serde_json::Value;
use tower::ServiceExt;

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("json body")
    }

    pub fn location(&self) -> Option<&str> {
        self.headers.get("location").and_then(|v| v.to_str().ok())
    }
}

/// Config for in-process tests; `environment` decides whether docs are mounted.
pub fn config(environment: &str, database: &str) -> AppConfig {
    let mut cfg = AppConfig::default();
    cfg.server.environment = environment.to_string();
    cfg.database.default_connection = database.to_string();
    cfg
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> anyhow::Result<TestResponse> {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(v) => {
            builder = builder.header("content-type", "application/json");
            Body::from(serde_json::to_vec(&v)?)
        }
        None => Body::empty(),
    };
    let resp = app.clone().oneshot(builder.body(body)?).await?;
    let status = resp.status();
    let headers = resp.headers().clone();
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX).await?.to_vec();
    Ok(TestResponse { status, headers, body })
}
