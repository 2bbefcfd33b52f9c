// Response parser
//
// Turns the raw completion text into the result shape of the output mode.

use crate::prompt::{OutputMode, SEGMENT_COUNT, SEGMENT_DELIMITER};
use crate::{RemixError, Result};
use serde::{Deserialize, Serialize};

/// Output of one transform call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TransformResult {
    Single(String),
    Multi([String; SEGMENT_COUNT]),
}

impl TransformResult {
    /// All produced texts in emission order.
    pub fn texts(&self) -> Vec<&str> {
        match self {
            TransformResult::Single(s) => vec![s.as_str()],
            TransformResult::Multi(segments) => segments.iter().map(String::as_str).collect(),
        }
    }

    pub fn mode(&self) -> OutputMode {
        match self {
            TransformResult::Single(_) => OutputMode::Single,
            TransformResult::Multi(_) => OutputMode::Multi,
        }
    }
}

/// Parse `raw` according to `mode`.
///
/// Trimming is the only normalization. Multi mode keeps the first
/// [`SEGMENT_COUNT`] non-empty segments and drops the rest.
pub fn parse(raw: &str, mode: OutputMode) -> Result<TransformResult> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(RemixError::EmptyCompletion);
    }

    match mode {
        OutputMode::Single => Ok(TransformResult::Single(trimmed.to_string())),
        OutputMode::Multi => {
            let segments: Vec<String> = trimmed
                .split(SEGMENT_DELIMITER)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect();
            let found = segments.len();
            let first: [String; SEGMENT_COUNT] = segments
                .into_iter()
                .take(SEGMENT_COUNT)
                .collect::<Vec<_>>()
                .try_into()
                .map_err(|_| RemixError::InsufficientOutput {
                    expected: SEGMENT_COUNT,
                    found,
                })?;
            Ok(TransformResult::Multi(first))
        }
    }
}
