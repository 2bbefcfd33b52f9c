//! Orchestrator: prompt → completion → parse
//!
//! [`Remixer`] is the direct-call entry point. [`Remix`] is the seam the
//! callers fan out over, so the same fan-out helpers work against the local
//! orchestrator or a remote proxy.

use async_trait::async_trait;
use futures::future::{join_all, try_join_all};
use tracing::{debug, info, warn};

use crate::llm::{CompletionClient, CompletionParams};
use crate::parser::{parse, TransformResult};
use crate::prompt::{build_prompt, OutputMode};
use crate::{RemixError, Result};

/// Anything that can turn content plus a style name into a result.
#[async_trait]
pub trait Remix: Send + Sync {
    async fn transform(&self, content: &str, style: &str) -> Result<TransformResult>;
}

/// Direct-call orchestrator
///
/// Holds no per-call state; one instance serves any number of concurrent
/// transforms.
#[derive(Clone)]
pub struct Remixer {
    client: CompletionClient,
    mode: OutputMode,
}

impl Remixer {
    pub fn new(client: CompletionClient, mode: OutputMode) -> Self {
        Self { client, mode }
    }

    pub fn from_env(mode: OutputMode) -> Result<Self> {
        Ok(Self::new(CompletionClient::from_env()?, mode))
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }
}

#[async_trait]
impl Remix for Remixer {
    async fn transform(&self, content: &str, style: &str) -> Result<TransformResult> {
        if content.trim().is_empty() {
            return Err(RemixError::EmptyInput);
        }

        let prompt = build_prompt(content, style, self.mode);
        let params = CompletionParams::for_call(style, self.mode);
        debug!(
            target = "remixer",
            style,
            mode = %self.mode,
            temperature = params.temperature,
            "Dispatching completion"
        );

        let raw = self.client.complete(&prompt, params).await?;
        let result = parse(&raw, self.mode)?;
        info!(target = "remixer", style, mode = %self.mode, "Transform complete");
        Ok(result)
    }
}

/// Run one transform per style concurrently and report each outcome.
///
/// Output order matches `styles`; a failure in one style does not affect
/// the others.
pub async fn transform_each<R, S>(
    remix: &R,
    content: &str,
    styles: &[S],
) -> Vec<(String, Result<TransformResult>)>
where
    R: Remix + ?Sized,
    S: AsRef<str>,
{
    let calls = styles.iter().map(|style| async move {
        let style = style.as_ref();
        let outcome = remix.transform(content, style).await;
        if let Err(e) = &outcome {
            warn!(target = "remixer", style, error = %e, "Transform failed");
        }
        (style.to_string(), outcome)
    });
    join_all(calls).await
}

/// Run one transform per style concurrently; the first failure fails the group.
pub async fn transform_all<R, S>(
    remix: &R,
    content: &str,
    styles: &[S],
) -> Result<Vec<TransformResult>>
where
    R: Remix + ?Sized,
    S: AsRef<str>,
{
    try_join_all(
        styles
            .iter()
            .map(|style| remix.transform(content, style.as_ref())),
    )
    .await
}
