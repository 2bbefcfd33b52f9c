//! Remix proxy
//!
//! Same-origin HTTP front for the orchestrator. The API credential lives
//! here; browsers and other callers only see `/api/remix` and `/api/health`.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use remix_core::{Remix, RemixError, Style};
use serde_json::{json, Value};
use std::io::ErrorKind;
use std::sync::Arc;
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info, warn};

#[derive(Error, Debug)]
pub enum ProxyError {
    #[error("Could not find an available port in {first}..={last}")]
    PortsExhausted { first: u16, last: u16 },

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Proxy listener configuration
#[derive(Clone, Debug)]
pub struct ProxyConfig {
    pub host: String,
    pub port: u16,
    /// Extra ports tried (port+1, port+2, ...) when the first is taken.
    pub port_retries: u16,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3001,
            port_retries: 3,
        }
    }
}

impl ProxyConfig {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            host: std::env::var("HOST")
                .ok()
                .filter(|s| !s.is_empty())
                .unwrap_or(default.host),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(default.port),
            port_retries: std::env::var("PORT_RETRIES")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(default.port_retries),
        }
    }
}

#[derive(Clone)]
struct ProxyState {
    remix: Arc<dyn Remix>,
}

/// Build the proxy router around any [`Remix`] implementation
pub fn router(remix: Arc<dyn Remix>) -> Router {
    Router::new()
        .route("/api/remix", post(remix_handler))
        .route("/api/health", get(health_handler))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(ProxyState { remix })
}

async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

// A body that is absent, not JSON, or without a string `text` is treated
// as missing text.
async fn remix_handler(
    State(state): State<ProxyState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Response {
    let Ok(Json(body)) = body else {
        return text_required();
    };
    let text = match body.get("text").and_then(Value::as_str) {
        Some(t) if !t.trim().is_empty() => t,
        _ => return text_required(),
    };
    let style = body
        .get("style")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .unwrap_or(Style::default().as_str());

    match state.remix.transform(text, style).await {
        Ok(result) => Json(json!({ "remixedText": result })).into_response(),
        Err(RemixError::EmptyInput) => text_required(),
        Err(e) => {
            error!(target = "proxy", style = %style, error = %e, "Error in /api/remix");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "Failed to remix text",
                    "details": e.to_string(),
                })),
            )
                .into_response()
        }
    }
}

fn text_required() -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "error": "Text is required" })),
    )
        .into_response()
}

/// Bind `host:port`, moving to the next port while the current one is in use.
///
/// At most `retries` extra ports are tried; other bind errors fail at once.
pub async fn bind_with_retry(host: &str, port: u16, retries: u16) -> Result<TcpListener, ProxyError> {
    let last = port.saturating_add(retries);
    for candidate in port..=last {
        let addr = format!("{host}:{candidate}");
        match TcpListener::bind(&addr).await {
            Ok(listener) => return Ok(listener),
            Err(e) if e.kind() == ErrorKind::AddrInUse => {
                if candidate < last {
                    warn!(target = "proxy", port = candidate, "Port is busy, trying alternative port");
                }
            }
            Err(source) => return Err(ProxyError::Bind { addr, source }),
        }
    }
    Err(ProxyError::PortsExhausted { first: port, last })
}

/// Bind according to `config` and serve until the server fails
pub async fn start_server(config: ProxyConfig, remix: Arc<dyn Remix>) -> Result<(), ProxyError> {
    let listener = bind_with_retry(&config.host, config.port, config.port_retries).await?;
    let addr = listener.local_addr()?;
    info!(
        target = "proxy",
        url = %format!("http://{}", addr),
        "Server running"
    );
    axum::serve(listener, router(remix)).await?;
    Ok(())
}
