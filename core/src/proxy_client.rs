// Client for the same-origin proxy (`POST /api/remix`)
//
// Lets callers use the proxied deployment through the same `Remix` seam as
// the direct orchestrator. The credential stays on the proxy.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use crate::orchestrator::Remix;
use crate::parser::TransformResult;
use crate::{RemixError, Result};

#[derive(Debug, Serialize)]
struct RemixBody<'a> {
    text: &'a str,
    style: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RemixReply {
    remixed_text: TransformResult,
}

#[derive(Debug, Deserialize)]
struct ErrorReply {
    error: String,
    #[serde(default)]
    details: Option<String>,
}

/// Remote orchestrator reached through the proxy
#[derive(Clone)]
pub struct ProxyClient {
    http: Client,
    remix_url: String,
}

impl ProxyClient {
    /// `base_url` is the proxy origin, e.g. `http://localhost:3001`.
    pub fn new(base_url: &str, request_timeout_ms: Option<u64>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(ms) = request_timeout_ms {
            builder = builder.timeout(Duration::from_millis(ms));
        }
        let http = builder
            .build()
            .map_err(|e| RemixError::Config(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self {
            http,
            remix_url: format!("{}/api/remix", base_url.trim_end_matches('/')),
        })
    }
}

#[async_trait]
impl Remix for ProxyClient {
    async fn transform(&self, content: &str, style: &str) -> Result<TransformResult> {
        if content.trim().is_empty() {
            return Err(RemixError::EmptyInput);
        }

        debug!(target = "proxy_client", style, "POST {}", self.remix_url);
        let resp = self
            .http
            .post(&self.remix_url)
            .json(&RemixBody {
                text: content,
                style,
            })
            .send()
            .await
            .map_err(|e| RemixError::transport(format!("Proxy HTTP error: {e}")))?;

        let status = resp.status();
        if status.is_success() {
            let reply: RemixReply = resp
                .json()
                .await
                .map_err(|e| RemixError::transport(format!("Failed to parse proxy reply: {e}")))?;
            return Ok(reply.remixed_text);
        }

        if status == StatusCode::BAD_REQUEST {
            return Err(RemixError::EmptyInput);
        }

        let body = resp.text().await.unwrap_or_default();
        let message = match serde_json::from_str::<ErrorReply>(&body) {
            Ok(ErrorReply {
                details: Some(details),
                ..
            }) => details,
            Ok(ErrorReply { error, .. }) => error,
            Err(_) => body,
        };
        Err(RemixError::Transport {
            status: Some(status.as_u16()),
            message,
        })
    }
}
