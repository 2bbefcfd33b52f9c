mod config;

use std::io::Read;
use std::path::PathBuf;

use clap::Parser;
use config::RemixCliConfig;
use remix_core::style::label_for;
use remix_core::telemetry::init_tracing;
use remix_core::{
    transform_all, transform_each, CompletionClient, OutputMode, ProxyClient, Remix, Remixer,
    TransformResult,
};
use tracing::{info, warn};

/// Remix text into several styles at once
#[derive(Parser, Debug)]
#[command(name = "remix", version, about)]
struct Cli {
    /// Content to remix; read from stdin when omitted
    text: Vec<String>,

    /// Style of the first output (casual, cybernetic, very-cybernetic, extreme-cybernetic)
    #[arg(short, long)]
    style: Option<String>,

    /// single (2-3 sentences) or multi (three short segments); direct calls only,
    /// a proxy uses its own configured mode
    #[arg(short, long)]
    mode: Option<OutputMode>,

    /// Send requests through a running proxy, e.g. http://localhost:3001
    #[arg(long)]
    proxy: Option<String>,

    /// Report each style separately instead of failing the whole batch
    #[arg(long)]
    each: bool,

    /// TOML config path (defaults to $REMIX_CONFIG or ./remix.toml)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let _ = dotenvy::dotenv();
    init_tracing("warn,remix_core=warn,remix=info");

    let mut cfg = RemixCliConfig::load(cli.config.as_deref());
    if let Some(s) = cli.style {
        cfg.style = s;
    }
    if let Some(p) = cli.proxy {
        cfg.proxy_url = Some(p);
    }
    if let Some(m) = cfg.ignored_mode(cli.mode) {
        warn!(
            target = "remix_cli",
            mode = %m,
            "--mode has no effect through the proxy; the server decides the output mode"
        );
    }
    if let Some(m) = cli.mode {
        cfg.mode = m;
    }

    let content = if cli.text.is_empty() {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        cli.text.join(" ")
    };

    let remix: Box<dyn Remix> = match &cfg.proxy_url {
        Some(url) => {
            info!(target = "remix_cli", proxy = %url, "Using proxy");
            Box::new(ProxyClient::new(url, cfg.completion.request_timeout_ms)?)
        }
        None => Box::new(Remixer::new(
            CompletionClient::new(cfg.completion.clone())?,
            cfg.mode,
        )),
    };

    let styles = cfg.styles();
    if cli.each {
        let results = transform_each(remix.as_ref(), &content, &styles).await;
        for (index, (style, outcome)) in results.iter().enumerate() {
            match outcome {
                Ok(result) => print_pattern(index, style, result),
                Err(e) => println!("Neural Pattern {} [{}]\n  error: {e}\n", index + 1, label_for(style)),
            }
        }
    } else {
        let results = transform_all(remix.as_ref(), &content, &styles).await?;
        for (index, (style, result)) in styles.iter().zip(&results).enumerate() {
            print_pattern(index, style, result);
        }
    }
    Ok(())
}

fn print_pattern(index: usize, style: &str, result: &TransformResult) {
    println!("Neural Pattern {} [{}]", index + 1, label_for(style));
    match result {
        TransformResult::Single(text) => println!("  {text}"),
        TransformResult::Multi(segments) => {
            for (i, segment) in segments.iter().enumerate() {
                println!("  {}. {segment}", i + 1);
            }
        }
    }
    println!();
}
