//! In-process fake of the warehouse REST API for client and page tests.

use std::{collections::HashMap, sync::Arc};

use axum::{
    body::Bytes,
    extract::State,
    http::{header::CONTENT_TYPE, HeaderMap, Method, StatusCode, Uri},
    Router,
};
use tokio::{net::TcpListener, sync::Mutex};
use url::Url;

use crate::WarehouseClient;

#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub content_type: Option<String>,
    pub body: Bytes,
}

impl Recorded {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("recorded body is json")
    }
}

#[derive(Clone, Default)]
pub struct FakeBackend {
    responses: Arc<Mutex<HashMap<(Method, String), (StatusCode, String)>>>,
    hits: Arc<Mutex<Vec<Recorded>>>,
}

impl FakeBackend {
    pub async fn respond(&self, method: Method, path: &str, status: StatusCode, body: &str) {
        self.responses
            .lock()
            .await
            .insert((method, path.to_string()), (status, body.to_string()));
    }

    pub async fn hits(&self) -> Vec<Recorded> {
        self.hits.lock().await.clone()
    }

    pub async fn hits_for(&self, method: Method, path: &str) -> Vec<Recorded> {
        self.hits()
            .await
            .into_iter()
            .filter(|hit| hit.method == method && hit.path == path)
            .collect()
    }

    /// Serves this backend on an ephemeral port and returns a client pointed at `/api`.
    pub async fn spawn(&self) -> anyhow::Result<WarehouseClient> {
        std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let app = Router::new().fallback(handle).with_state(self.clone());
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });
        Ok(WarehouseClient::new(Url::parse(&format!("http://{addr}/api"))?))
    }
}

async fn handle(
    State(backend): State<FakeBackend>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, [(axum::http::HeaderName, &'static str); 1], String) {
    let path = uri.path().to_string();
    backend.hits.lock().await.push(Recorded {
        method: method.clone(),
        path: path.clone(),
        query: uri.query().map(str::to_string),
        content_type: headers
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body,
    });
    let (status, body) = backend
        .responses
        .lock()
        .await
        .get(&(method, path))
        .cloned()
        .unwrap_or((StatusCode::NOT_FOUND, String::new()));
    (status, [(CONTENT_TYPE, "application/json")], body)
}

/// A client whose port has nothing listening on it.
pub async fn unreachable_client() -> anyhow::Result<WarehouseClient> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);
    Ok(WarehouseClient::new(Url::parse(&format!("http://{addr}/api"))?))
}
