//! Shared stand-ins for the completion transport

#![allow(dead_code)]

use async_trait::async_trait;
use remix_core::llm::{MessagesRequest, MessagesResponse};
use remix_core::{CompletionClient, CompletionConfig, CompletionTransport, RemixError};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Replies with a fixed text and records every request it sees
pub struct RecordingTransport {
    reply: Result<MessagesResponse, RemixError>,
    calls: AtomicUsize,
    seen: Mutex<Vec<(String, MessagesRequest)>>,
}

impl RecordingTransport {
    pub fn replying(text: &str) -> Arc<Self> {
        Self::with_reply(Ok(MessagesResponse::with_text(text)))
    }

    pub fn failing(err: RemixError) -> Arc<Self> {
        Self::with_reply(Err(err))
    }

    pub fn with_reply(reply: Result<MessagesResponse, RemixError>) -> Arc<Self> {
        Arc::new(Self {
            reply,
            calls: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<(String, MessagesRequest)> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionTransport for RecordingTransport {
    async fn send(
        &self,
        api_key: &str,
        request: &MessagesRequest,
    ) -> remix_core::Result<MessagesResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen
            .lock()
            .unwrap()
            .push((api_key.to_string(), request.clone()));
        // Yield so concurrent callers interleave
        tokio::task::yield_now().await;
        self.reply.clone()
    }
}

pub fn test_config(api_key: Option<&str>) -> CompletionConfig {
    CompletionConfig {
        base_url: "http://127.0.0.1:9/v1".to_string(),
        model: "test-model".to_string(),
        api_key: api_key.map(str::to_string),
        api_version: "2023-06-01".to_string(),
        request_timeout_ms: None,
    }
}

pub fn client_over(transport: Arc<RecordingTransport>) -> CompletionClient {
    CompletionClient::with_transport(test_config(Some("test-key")), transport)
}
