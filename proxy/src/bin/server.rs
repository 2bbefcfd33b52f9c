use std::sync::Arc;

use remix_core::telemetry::init_tracing;
use remix_core::{CompletionClient, CompletionConfig, OutputMode, Remixer};
use remix_proxy::{start_server, ProxyConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // .env is optional
    let _ = dotenvy::dotenv();
    init_tracing("info,remix_core=info,remix_proxy=info");

    let completion = CompletionConfig::default();
    if completion.credential().is_none() {
        error!(
            target = "proxy",
            "ANTHROPIC_API_KEY is not set in environment variables"
        );
        return Err("missing API credential".into());
    }

    let mode = OutputMode::from_env()?;
    let remixer = Remixer::new(CompletionClient::new(completion)?, mode);
    let config = ProxyConfig::from_env();
    info!(target = "proxy", mode = %mode, port = config.port, "Starting remix proxy");

    start_server(config, Arc::new(remixer)).await?;
    Ok(())
}
