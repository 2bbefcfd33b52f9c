use crate::{RemixError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error};

use super::config::CompletionConfig;
use super::wire::{ApiErrorBody, MessagesRequest, MessagesResponse};

/// One round trip to the completion service.
///
/// Implementations must not retry; failures are reported as
/// [`RemixError::Transport`].
#[async_trait]
pub trait CompletionTransport: Send + Sync {
    async fn send(&self, api_key: &str, request: &MessagesRequest) -> Result<MessagesResponse>;
}

/// HTTP transport for the Anthropic Messages API
#[derive(Clone)]
pub struct HttpTransport {
    http: Client,
    messages_url: String,
    api_version: String,
}

impl HttpTransport {
    pub fn new(cfg: &CompletionConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(ms) = cfg.request_timeout_ms {
            builder = builder.timeout(Duration::from_millis(ms));
        }
        let http = builder
            .build()
            .map_err(|e| RemixError::Config(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self {
            http,
            messages_url: format!("{}/messages", cfg.base_url.trim_end_matches('/')),
            api_version: cfg.api_version.clone(),
        })
    }
}

#[async_trait]
impl CompletionTransport for HttpTransport {
    async fn send(&self, api_key: &str, request: &MessagesRequest) -> Result<MessagesResponse> {
        debug!(
            target = "llm_client",
            model = %request.model,
            max_tokens = request.max_tokens,
            "POST {}", self.messages_url
        );

        let resp = self
            .http
            .post(&self.messages_url)
            .header("content-type", "application/json")
            .header("x-api-key", api_key)
            .header("anthropic-version", &self.api_version)
            .json(request)
            .send()
            .await
            .map_err(|e| RemixError::transport(format!("Messages HTTP error: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            error!(target = "llm_client", %status, body = %body, "Messages API error");
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(RemixError::Transport {
                status: Some(status.as_u16()),
                message,
            });
        }

        resp.json::<MessagesResponse>()
            .await
            .map_err(|e| RemixError::transport(format!("Failed to parse Messages JSON: {e}")))
    }
}
