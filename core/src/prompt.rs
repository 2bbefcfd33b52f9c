// Prompt builder
//
// Maps (content, style, mode) to the single user message sent to the model.

use crate::style::Style;
use crate::RemixError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Literal token the model is asked to place between segments in multi mode.
pub const SEGMENT_DELIMITER: &str = "[TWEET]";

/// Number of segments a multi-mode completion must yield.
pub const SEGMENT_COUNT: usize = 3;

/// Character ceiling the model is asked to respect per segment.
pub const SEGMENT_MAX_CHARS: usize = 280;

const SINGLE_DIRECTIVE: &str =
    "IMPORTANT: Respond with exactly 2-3 sentences, no more. Be impactful but brief.";

/// Whether a call produces one rewrite or a fixed set of short segments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    #[default]
    Single,
    Multi,
}

impl OutputMode {
    /// `REMIX_OUTPUT_MODE`, defaulting to single when unset or blank.
    pub fn from_env() -> crate::Result<Self> {
        match std::env::var("REMIX_OUTPUT_MODE") {
            Ok(v) if !v.trim().is_empty() => v.parse(),
            _ => Ok(OutputMode::Single),
        }
    }

    /// Output token ceiling sent with the request.
    pub fn max_tokens(&self) -> u32 {
        match self {
            OutputMode::Single => 200,
            OutputMode::Multi => 300,
        }
    }

    /// Trailing format constraint appended to every template.
    pub fn directive(&self) -> String {
        match self {
            OutputMode::Single => SINGLE_DIRECTIVE.to_string(),
            OutputMode::Multi => format!(
                "IMPORTANT: Produce exactly {SEGMENT_COUNT} segments, each under {SEGMENT_MAX_CHARS} characters, \
                 separated by the literal delimiter {SEGMENT_DELIMITER}. Do not number the segments."
            ),
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputMode::Single => f.write_str("single"),
            OutputMode::Multi => f.write_str("multi"),
        }
    }
}

impl FromStr for OutputMode {
    type Err = RemixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" => Ok(OutputMode::Single),
            "multi" => Ok(OutputMode::Multi),
            other => Err(RemixError::Config(format!("unknown output mode '{other}'"))),
        }
    }
}

fn template(style: &str) -> &'static str {
    match Style::from_name(style) {
        Some(Style::Casual) => {
            "Transform this content into a casual, everyday style. Keep it brief (2-3 sentences max) while maintaining the core meaning:"
        }
        Some(Style::Cybernetic) => {
            "Rewrite this content in 2-3 sentences using cyberpunk terminology and tech metaphors. Make it feel like it's from a high-tech future while keeping it concise:"
        }
        Some(Style::VeryCybernetic) => {
            "Transform this into a brief cyberpunk version (2-3 sentences) with heavy tech jargon and neural interface references. Include digital consciousness themes but keep it short:"
        }
        Some(Style::ExtremeCybernetic) => {
            "Provide a 2-3 sentence cyberpunk reimagining with advanced technological concepts and quantum terminology. Make it feel like a transmission from a post-human AI while being concise:"
        }
        None => {
            "Transform this content into 2-3 concise sentences while maintaining its core meaning:"
        }
    }
}

/// Build the model instruction for `content` in `style`.
///
/// Unknown styles use the generic template. The content is embedded verbatim
/// right after the template text and is followed by the mode directive.
pub fn build_prompt(content: &str, style: &str, mode: OutputMode) -> String {
    format!("{} {}\n\n{}", template(style), content, mode.directive())
}
