// Remix Core Library
// Style-conditioned text transformation over a hosted completion API

pub mod llm;
pub mod orchestrator;
pub mod parser;
pub mod prompt;
pub mod proxy_client;
pub mod style;
pub mod telemetry;

// Export core types
pub use llm::{CompletionClient, CompletionConfig, CompletionParams, CompletionTransport};
pub use orchestrator::{transform_all, transform_each, Remix, Remixer};
pub use parser::{parse, TransformResult};
pub use prompt::{build_prompt, OutputMode, SEGMENT_COUNT, SEGMENT_DELIMITER};
pub use proxy_client::ProxyClient;
pub use style::Style;

// Error types
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RemixError {
    #[error("API key not configured")]
    MissingCredential,

    #[error("Content is empty")]
    EmptyInput,

    #[error("Transport error{}: {message}", status_suffix(.status))]
    Transport {
        status: Option<u16>,
        message: String,
    },

    #[error("Completion contained no usable text")]
    EmptyCompletion,

    #[error("Expected {expected} segments, got {found}")]
    InsufficientOutput { expected: usize, found: usize },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl RemixError {
    pub(crate) fn transport(message: impl Into<String>) -> Self {
        RemixError::Transport {
            status: None,
            message: message.into(),
        }
    }
}

fn status_suffix(status: &Option<u16>) -> String {
    status.map(|s| format!(" (status {s})")).unwrap_or_default()
}

pub type Result<T> = std::result::Result<T, RemixError>;
