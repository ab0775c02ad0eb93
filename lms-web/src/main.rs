//! LMS Web Server
//!
//! Server-rendered learning-management front end with a cookie-held session.

use anyhow::Context;
use clap::Parser;
use lms_core::LmsConfig;
use lms_web::init_logging;
use lms_web::server::LmsServerBuilder;
use std::path::PathBuf;
use tracing::{info, warn};

/// LMS Web Server - sign-in, learner pages and the admin console
#[derive(Parser, Debug)]
#[command(name = "lms-web")]
#[command(about = "Server-rendered LMS front end")]
#[command(version)]
struct Args {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Server host to bind to
    #[arg(long)]
    host: Option<String>,

    /// Server port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// Development mode: pretty debug logs with source locations
    #[arg(long)]
    dev: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long)]
    log_level: Option<String>,

    /// Simulated sign-in latency in milliseconds
    #[arg(long)]
    sign_in_delay_ms: Option<u64>,

    /// Simulated sign-up latency in milliseconds
    #[arg(long)]
    sign_up_delay_ms: Option<u64>,
}

impl Args {
    /// Command line flags win over file and environment settings
    fn apply(&self, config: &mut LmsConfig) {
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if self.dev {
            config.server.dev_mode = true;
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
        if let Some(ms) = self.sign_in_delay_ms {
            config.auth.sign_in_delay_ms = ms;
        }
        if let Some(ms) = self.sign_up_delay_ms {
            config.auth.sign_up_delay_ms = ms;
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Load environment variables
    let dotenv_loaded = dotenvy::dotenv().is_ok();

    let mut config =
        LmsConfig::load(args.config.as_deref()).context("Failed to load configuration")?;
    args.apply(&mut config);
    config.apply_dev_mode();

    init_logging(&config.logging).context("Failed to initialize logging")?;

    if !dotenv_loaded {
        warn!("No .env file found, using process environment only");
    }
    info!(
        host = %config.server.host,
        port = config.server.port,
        dev_mode = config.server.dev_mode,
        "Configuration loaded"
    );

    let server = LmsServerBuilder::from_config(config)
        .build()
        .context("Failed to build server")?;

    server.start().await.context("Server stopped with an error")?;
    Ok(())
}
