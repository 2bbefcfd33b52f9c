//! LLM module: completion client, transport seam, and wire types
//!
//! This module provides:
//! - `CompletionConfig` resolved from the environment
//! - `CompletionClient` which issues one Messages call per prompt
//! - `CompletionTransport`, the seam between the client and the network, with
//!   `HttpTransport` as the production implementation
//! - `MessagesRequest` / `MessagesResponse` wire types

mod client;
mod config;
mod transport;
mod wire;

pub use client::{CompletionClient, CompletionParams};
pub use config::{CompletionConfig, DEFAULT_API_VERSION, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use transport::{CompletionTransport, HttpTransport};
pub use wire::{ApiErrorBody, ApiErrorDetail, ContentBlock, Message, MessagesRequest, MessagesResponse, Usage};
