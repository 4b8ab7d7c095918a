//! Shared helpers for integration tests
//!
//! `FakeTransport` mirrors the one in `src/test_support.rs`; keep their APIs
//! in step.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::http::{header, StatusCode};
use axum::Router;
use parking_lot::Mutex;
use reqwest::Url;
use tokio::net::TcpListener;
use tokio::sync::Semaphore;

use ministories::api::{HttpResponse, ReqwestTransport, Transport};
use ministories::{Config, InitOptions, MemoryDocument, MiniStories, SdkError};

/// Holds back responses of a gated route until opened.
#[derive(Clone)]
pub struct Gate(Arc<Semaphore>);

impl Gate {
    /// Let one pending (or future) request through.
    pub fn open(&self) {
        self.0.add_permits(1);
    }
}

/// Scriptable in-memory transport keyed by `path[?query]`.
///
/// Unscripted GETs answer 404, unscripted event posts succeed.
#[derive(Default)]
pub struct FakeTransport {
    routes: Mutex<HashMap<String, Result<HttpResponse, SdkError>>>,
    gates: Mutex<HashMap<String, Gate>>,
    requests: Mutex<Vec<String>>,
    posts: Mutex<Vec<serde_json::Value>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, route: &str, status: u16, body: impl Into<String>) {
        self.routes
            .lock()
            .insert(route.to_string(), Ok(HttpResponse::new(status, body)));
    }

    /// Fail requests to `route` with a network error.
    pub fn fail(&self, route: &str, message: &str) {
        self.routes
            .lock()
            .insert(route.to_string(), Err(SdkError::Network(message.to_string())));
    }

    /// Hold back responses for `route` until the returned gate opens.
    pub fn gate(&self, route: &str) -> Gate {
        let gate = Gate(Arc::new(Semaphore::new(0)));
        self.gates.lock().insert(route.to_string(), gate.clone());
        gate
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().clone()
    }

    pub fn posts(&self) -> Vec<serde_json::Value> {
        self.posts.lock().clone()
    }

    /// Wait until `route` was requested at least once.
    pub async fn wait_for_request(&self, route: &str) {
        for _ in 0..500 {
            if self.requests.lock().iter().any(|r| r == route) {
                return;
            }
            tokio::time::sleep(Duration::from_millis(1)).await;
        }
        panic!("{} was never requested", route);
    }

    /// Wait until `count` events were posted, then return all posts.
    pub async fn wait_for_posts(&self, count: usize) -> Vec<serde_json::Value> {
        for _ in 0..500 {
            if self.posts.lock().len() >= count {
                break;
            }
            tokio::time::sleep(Duration::from_millis(1)).await;
        }
        self.posts()
    }

    fn route(url: &Url) -> String {
        match url.query() {
            Some(query) => format!("{}?{}", url.path(), query),
            None => url.path().to_string(),
        }
    }

    fn lookup(&self, route: &str) -> Option<Result<HttpResponse, SdkError>> {
        self.routes.lock().get(route).cloned()
    }

    async fn pass_gate(&self, route: &str) {
        let gate = self.gates.lock().get(route).cloned();
        if let Some(Gate(semaphore)) = gate {
            if let Ok(permit) = semaphore.acquire().await {
                permit.forget();
            }
        }
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn get(&self, url: Url) -> Result<HttpResponse, SdkError> {
        let route = Self::route(&url);
        self.requests.lock().push(route.clone());
        self.pass_gate(&route).await;
        self.lookup(&route)
            .unwrap_or_else(|| Ok(HttpResponse::new(404, "")))
    }

    async fn post_json(&self, url: Url, body: serde_json::Value) -> Result<HttpResponse, SdkError> {
        let route = Self::route(&url);
        self.requests.lock().push(route.clone());
        self.posts.lock().push(body);
        self.pass_gate(&route).await;
        self.lookup(&route)
            .unwrap_or_else(|| Ok(HttpResponse::new(200, r#"{"ok":true}"#)))
    }
}

/// An initialized SDK over a fake transport.
pub fn sdk(config: &Config) -> (MiniStories, Arc<MemoryDocument>, Arc<FakeTransport>) {
    let document = Arc::new(MemoryDocument::new());
    let transport = Arc::new(FakeTransport::new());
    let sdk = MiniStories::with_transport(document.clone(), transport.clone(), config);
    sdk.initialize(InitOptions::new("http://api.local"));
    (sdk, document, transport)
}

/// Transport talking real HTTP, ignoring proxy settings of the environment.
pub fn direct_transport() -> Arc<ReqwestTransport> {
    let client = reqwest::Client::builder()
        .no_proxy()
        .timeout(Duration::from_secs(5))
        .build()
        .expect("Failed to build HTTP client");
    Arc::new(ReqwestTransport::with_client(client))
}

/// Serve every request with the same canned JSON response.
///
/// Returns the base URL of the server.
pub async fn serve(status: u16, body: &str) -> String {
    let status = StatusCode::from_u16(status).expect("Invalid status code");
    let body = body.to_string();
    let app = Router::new().fallback(move || {
        let body = body.clone();
        async move { (status, [(header::CONTENT_TYPE, "application/json")], body) }
    });

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test server");
    let addr = listener.local_addr().expect("No local address");
    tokio::spawn(async move {
        axum::serve(listener, app)
            .await
            .expect("Test server failed");
    });

    format!("http://{}", addr)
}

/// JSON array of summaries with the given ids, in order.
pub fn summaries_json(ids: &[i64]) -> String {
    let items: Vec<_> = ids
        .iter()
        .map(|id| {
            serde_json::json!({
                "id": id,
                "title": format!("Story {}", id),
                "category": "highlights",
                "cover_url": format!("https://img.example/{}.jpg", id),
            })
        })
        .collect();
    serde_json::Value::Array(items).to_string()
}

/// JSON story detail with `pages` image pages.
pub fn detail_json(id: i64, pages: usize) -> String {
    let pages: Vec<_> = (0..pages)
        .map(|i| {
            serde_json::json!({
                "type": "image",
                "mediaUrl": format!("https://img.example/{}/{}.jpg", id, i),
                "caption": format!("Page {}", i + 1),
            })
        })
        .collect();
    serde_json::json!({
        "id": id,
        "title": format!("Story {}", id),
        "category": "highlights",
        "cover_url": format!("https://img.example/{}.jpg", id),
        "pages": pages,
    })
    .to_string()
}
