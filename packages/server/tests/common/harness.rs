//! Test harness driving the real router against mock dependencies.
//!
//! Requests go through `tower::ServiceExt::oneshot`, so every layer
//! (CORS, tracing, method routing) is exercised without binding a socket.

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use showcase_core::kernel::{MockAI, MockContentStore, TestDependencies};
use showcase_core::server::build_app;
use std::sync::Arc;
use tower::ServiceExt;

/// Parsed response: status, headers and JSON body (Null when empty).
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: axum::http::HeaderMap,
    pub body: Value,
}

impl TestResponse {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

pub struct TestHarness {
    pub ai: Arc<MockAI>,
    pub store: Arc<MockContentStore>,
    app: Router,
}

impl TestHarness {
    pub fn new(ai: MockAI, store: MockContentStore) -> Self {
        // Run tests with: RUST_LOG=debug cargo test -- --nocapture
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let deps = TestDependencies::new(ai, store);
        let app = build_app(deps.server_deps());

        Self {
            ai: deps.ai,
            store: deps.content_store,
            app,
        }
    }

    /// Harness whose store serves the showcase fixture page.
    pub fn with_ai(ai: MockAI) -> Self {
        Self::new(
            ai,
            MockContentStore::new().with_document(super::SHOWCASE_PAGE, "sha-initial"),
        )
    }

    pub async fn request(&self, method: Method, body: Body) -> TestResponse {
        let request = Request::builder()
            .method(method)
            .uri("/")
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::ORIGIN, "https://showcase.example")
            .body(body)
            .unwrap();

        self.send(request).await
    }

    pub async fn post_json(&self, json: &Value) -> TestResponse {
        self.request(Method::POST, Body::from(json.to_string())).await
    }

    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.app.clone().oneshot(request).await.unwrap();

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        TestResponse {
            status,
            headers,
            body,
        }
    }
}
