use std::fs;
use std::path::Path;

use remix_core::{CompletionConfig, OutputMode};

/// High-level configuration for the remix CLI
#[derive(Clone, Debug)]
pub struct RemixCliConfig {
    /// Style of the first output
    pub style: String,
    /// Styles rendered alongside the selected one
    pub companion_styles: Vec<String>,
    pub mode: OutputMode,
    /// When set, requests go through the proxy instead of the API
    pub proxy_url: Option<String>,
    pub completion: CompletionConfig,
}

impl Default for RemixCliConfig {
    fn default() -> Self {
        Self {
            style: "casual".to_string(),
            companion_styles: vec!["cybernetic".to_string(), "very-cybernetic".to_string()],
            mode: mode_from_env(),
            proxy_url: std::env::var("REMIX_PROXY_URL").ok().filter(|s| !s.is_empty()),
            completion: CompletionConfig::default(),
        }
    }
}

/// `REMIX_OUTPUT_MODE`, falling back to single with a warning when the value is invalid.
fn mode_from_env() -> OutputMode {
    OutputMode::from_env().unwrap_or_else(|e| {
        tracing::warn!(target = "remix_cli", error = %e, "Invalid REMIX_OUTPUT_MODE; using single");
        OutputMode::default()
    })
}

impl RemixCliConfig {
    /// The requested mode when it cannot take effect: through the proxy the
    /// output mode is fixed by the server.
    pub fn ignored_mode(&self, requested: Option<OutputMode>) -> Option<OutputMode> {
        match (&self.proxy_url, requested) {
            (Some(_), Some(mode)) => Some(mode),
            _ => None,
        }
    }

    /// Load configuration from a TOML file (path via REMIX_CONFIG or ./remix.toml),
    /// overlaying values onto env-driven defaults.
    pub fn load(path: Option<&Path>) -> Self {
        let default = Self::default();
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => std::env::var("REMIX_CONFIG")
                .unwrap_or_else(|_| "remix.toml".into())
                .into(),
        };
        if !path.exists() {
            tracing::debug!(target = "remix_cli", path = %path.display(), "No TOML config found; using defaults/env");
            return default;
        }
        match fs::read_to_string(&path) {
            Ok(s) => match toml::from_str::<RemixToml>(&s) {
                Ok(t) => t.overlay(default),
                Err(e) => {
                    tracing::warn!(target = "remix_cli", error = %e, "Failed to parse TOML; using defaults");
                    default
                }
            },
            Err(e) => {
                tracing::warn!(target = "remix_cli", error = %e, "Failed to read TOML; using defaults");
                default
            }
        }
    }

    /// Selected style first, then the companions, without duplicates
    pub fn styles(&self) -> Vec<String> {
        let mut styles = vec![self.style.clone()];
        for s in &self.companion_styles {
            if !styles.contains(s) {
                styles.push(s.clone());
            }
        }
        styles
    }
}

// =========================
// TOML overlay definitions
// =========================

#[derive(Debug, Clone, Default, serde::Deserialize)]
struct RemixToml {
    pub style: Option<String>,
    pub companion_styles: Option<Vec<String>>,
    pub mode: Option<OutputMode>,
    pub proxy_url: Option<String>,
    pub llm: Option<LlmToml>,
}

impl RemixToml {
    fn overlay(self, mut base: RemixCliConfig) -> RemixCliConfig {
        if let Some(s) = self.style {
            base.style = s;
        }
        if let Some(c) = self.companion_styles {
            base.companion_styles = c.into_iter().filter(|s| !s.is_empty()).collect();
        }
        if let Some(m) = self.mode {
            base.mode = m;
        }
        if let Some(p) = self.proxy_url.filter(|p| !p.is_empty()) {
            base.proxy_url = Some(p);
        }
        if let Some(l) = self.llm {
            l.apply(&mut base.completion);
        }
        base
    }
}

#[derive(Debug, Clone, Default, serde::Deserialize)]
struct LlmToml {
    pub base_url: Option<String>,
    pub model: Option<String>,
    pub api_key: Option<String>,
    pub api_version: Option<String>,
    pub request_timeout_ms: Option<u64>,
}

impl LlmToml {
    fn apply(self, c: &mut CompletionConfig) {
        if let Some(x) = self.base_url {
            c.base_url = x;
        }
        if let Some(x) = self.model {
            c.model = x;
        }
        if let Some(x) = self.api_key {
            c.api_key = Some(x);
        }
        if let Some(x) = self.api_version {
            c.api_version = x;
        }
        if let Some(x) = self.request_timeout_ms {
            c.request_timeout_ms = Some(x);
        }
    }
}
