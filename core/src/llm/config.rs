pub const DEFAULT_BASE_URL: &str = "https://api.anthropic.com/v1";
pub const DEFAULT_MODEL: &str = "claude-3-sonnet-20240229";
pub const DEFAULT_API_VERSION: &str = "2023-06-01";

/// Configuration for CompletionClient loaded from environment variables
#[derive(Clone)]
pub struct CompletionConfig {
    pub base_url: String,
    pub model: String,
    pub api_key: Option<String>,
    pub api_version: String,
    /// No deadline unless the caller sets one.
    pub request_timeout_ms: Option<u64>,
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.trim().is_empty())
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            base_url: non_empty_var("ANTHROPIC_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model: non_empty_var("ANTHROPIC_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            api_key: non_empty_var("ANTHROPIC_API_KEY")
                .or_else(|| non_empty_var("VITE_ANTHROPIC_API_KEY")),
            api_version: non_empty_var("ANTHROPIC_VERSION")
                .unwrap_or_else(|| DEFAULT_API_VERSION.to_string()),
            request_timeout_ms: non_empty_var("REMIX_TIMEOUT_MS").and_then(|v| v.parse().ok()),
        }
    }
}

impl CompletionConfig {
    /// The credential, if one is set and not blank.
    pub fn credential(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }
}

// Keep the key out of logs and panic messages.
impl std::fmt::Debug for CompletionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompletionConfig")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("api_version", &self.api_version)
            .field("request_timeout_ms", &self.request_timeout_ms)
            .finish()
    }
}
