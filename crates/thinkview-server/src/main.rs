//! Thinkview server - classifies streaming thinking traces for chat front ends.

use anyhow::Result;
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use thinkview_server::{build_router, config::Config, logging, state::AppState};

use logging::{LogConfig, LogFormat, LogPreset};

/// Thinkview server - condensed views of model thinking traces.
#[derive(Parser, Debug)]
#[command(name = "thinkview-server")]
#[command(about = "HTTP/WebSocket service classifying streaming thinking content")]
#[command(version)]
struct Cli {
    /// Path to config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Override port from config
    #[arg(short, long)]
    port: Option<u16>,

    /// Show full thinking traces by default instead of the condensed indicator
    #[arg(long)]
    show_thinking: bool,

    /// Logging preset
    #[arg(long = "log-preset", value_enum, default_value_t = LogPreset::Normal)]
    log_preset: LogPreset,

    /// Set the level of one target (startup, api, ws, classifier, http), e.g. "ws=debug".
    /// Can be repeated.
    #[arg(long = "log", value_name = "TARGET=LEVEL")]
    log_overrides: Vec<String>,

    /// Log output format
    #[arg(long = "log-format", value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_config = LogConfig::new(cli.log_preset, &cli.log_overrides, cli.log_format)?;
    logging::init(&log_config);

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    if let Some(port) = cli.port {
        config.port = port;
    }
    if cli.show_thinking {
        config.show_thinking = true;
    }

    tracing::info!(
        target: "thinkview::startup",
        "Loaded configuration (port: {}, show_thinking: {})",
        config.port,
        config.show_thinking
    );

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    let state = Arc::new(AppState::new(config)?);
    if !state.config.keywords.is_empty() {
        tracing::info!(target: "thinkview::startup", "Applied keyword extensions from config");
    }

    let app = build_router(state);

    tracing::info!(target: "thinkview::startup", "Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
