use crate::prompt::OutputMode;
use crate::style::temperature_for;
use crate::{RemixError, Result};
use std::sync::Arc;
use tracing::{debug, warn};

use super::config::CompletionConfig;
use super::transport::{CompletionTransport, HttpTransport};
use super::wire::{Message, MessagesRequest};

/// Per-call sampling parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompletionParams {
    pub max_tokens: u32,
    pub temperature: f32,
}

impl CompletionParams {
    /// Token ceiling from the mode, temperature from the style name.
    pub fn for_call(style: &str, mode: OutputMode) -> Self {
        Self {
            max_tokens: mode.max_tokens(),
            temperature: temperature_for(style),
        }
    }
}

/// Issues exactly one Messages request per prompt and returns the raw text
#[derive(Clone)]
pub struct CompletionClient {
    transport: Arc<dyn CompletionTransport>,
    cfg: CompletionConfig,
}

impl CompletionClient {
    pub fn new(cfg: CompletionConfig) -> Result<Self> {
        let transport = HttpTransport::new(&cfg)?;
        Ok(Self::with_transport(cfg, Arc::new(transport)))
    }

    pub fn from_env() -> Result<Self> {
        Self::new(CompletionConfig::default())
    }

    pub fn with_transport(cfg: CompletionConfig, transport: Arc<dyn CompletionTransport>) -> Self {
        Self { transport, cfg }
    }

    pub fn config(&self) -> &CompletionConfig {
        &self.cfg
    }

    /// Complete `prompt` and return the untrimmed text of the first text block.
    /// Contract:
    /// - Error: `MissingCredential` before any I/O when no key is configured
    /// - Error: `Transport` on network or non-2xx; never retried
    /// - Error: `EmptyCompletion` when no text block carries text
    pub async fn complete(&self, prompt: &str, params: CompletionParams) -> Result<String> {
        let api_key = self.cfg.credential().ok_or(RemixError::MissingCredential)?;

        let request = MessagesRequest {
            model: self.cfg.model.clone(),
            max_tokens: params.max_tokens,
            messages: vec![Message::user(prompt)],
            temperature: params.temperature,
        };

        let response = self.transport.send(api_key, &request).await?;
        debug!(
            target = "llm_client",
            stop_reason = ?response.stop_reason,
            blocks = response.content.len(),
            "Messages response received"
        );

        match response.first_text() {
            Some(text) if !text.is_empty() => Ok(text.to_string()),
            _ => {
                warn!(target = "llm_client", "Completion carried no text block");
                Err(RemixError::EmptyCompletion)
            }
        }
    }
}
