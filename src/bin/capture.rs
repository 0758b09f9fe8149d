//! CLI binary for the screenshot-capture stage.
//!
//! A thin shim over the library crate that maps CLI flags to
//! `CaptureConfig` and runs authentication plus the capture loop.

use anyhow::{Context, Result};
use clap::Parser;
use guidegen::{pipeline, CaptureConfig};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const AFTER_HELP: &str = r#"EXAMPLES:
  # Capture using the descriptors in the current directory
  guide-capture

  # Descriptors somewhere else, longer render wait
  guide-capture --login conf/login.yml --shots conf/shots.yml --wait 5000

DESCRIPTOR FORMAT:
  login.yml — list of records; only the first is used:
    - url: https://app.example.com/login

  shots.yml — one record per screenshot:
    - url: https://app.example.com/dashboard
      output: screenshots/dashboard.png

The capture tool (shot-scraper) must be installed and on PATH:
  pip install shot-scraper && shot-scraper install
"#;

/// Capture authenticated screenshots of a web application.
#[derive(Parser, Debug)]
#[command(
    name = "guide-capture",
    version,
    about = "Capture authenticated screenshots of a web application",
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Login descriptor file.
    #[arg(long, default_value = "login.yml")]
    login: PathBuf,

    /// Shot descriptor file.
    #[arg(long, default_value = "shots.yml")]
    shots: PathBuf,

    /// Session credential file produced by authentication.
    #[arg(long, default_value = "auth.json")]
    auth: PathBuf,

    /// Directory wiped and repopulated with screenshots.
    #[arg(long, env = "GUIDEGEN_SCREENSHOT_DIR", default_value = "screenshots")]
    screenshot_dir: PathBuf,

    /// Milliseconds to wait for page rendering before each capture.
    #[arg(long, env = "GUIDEGEN_WAIT_MS", default_value_t = 3000)]
    wait: u64,

    /// Capture tool executable.
    #[arg(long, env = "GUIDEGEN_SHOT_SCRAPER", default_value = "shot-scraper")]
    tool: String,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long)]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    let config = CaptureConfig {
        login_file: cli.login,
        shots_file: cli.shots,
        auth_file: cli.auth,
        screenshot_dir: cli.screenshot_dir,
        wait_ms: cli.wait,
        tool: cli.tool,
    };

    let produced = pipeline::capture::run(&config)
        .await
        .context("Screenshot capture failed")?;

    if !cli.quiet {
        eprintln!(
            "Captured {produced} screenshots into {}",
            config.screenshot_dir.display()
        );
    }
    Ok(())
}
