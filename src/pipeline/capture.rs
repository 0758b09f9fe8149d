//! Screenshot capture: delegate authentication and page capture to the
//! external browser-automation tool.
//!
//! The tool owns everything browser-shaped — session cookies, rendering,
//! image encoding. This module only sequences the invocations:
//! authenticate once against the first login URL, wipe the screenshot
//! directory, then one capture call per declared shot, strictly in order.
//!
//! A capture call that exits non-zero leaves its output file absent; the run
//! proceeds to the next shot with a warning rather than aborting, so one
//! unreachable page does not sink the whole guide.

use crate::config::CaptureConfig;
use crate::descriptors::{self, ShotEntry};
use crate::error::GuideError;
use crate::pipeline::chapters::ensure_clean_dir;
use std::process::Stdio;
use tokio::process::Command;
use tracing::{info, warn};

/// Authenticate against the first login URL, producing the session
/// credential file consumed by every subsequent capture call.
pub async fn authenticate(config: &CaptureConfig) -> Result<(), GuideError> {
    let login = descriptors::load_login(&config.login_file)?;
    let url = &login[0].url;
    info!("Logging in to {}", url);

    let status = Command::new(&config.tool)
        .arg("auth")
        .arg(url)
        .arg(&config.auth_file)
        .stdin(Stdio::inherit())
        .status()
        .await
        .map_err(|e| GuideError::ToolSpawn {
            tool: config.tool.clone(),
            source: e,
        })?;

    if !status.success() {
        warn!("Authentication command exited with {}", status);
    }
    Ok(())
}

/// Capture every declared shot into the screenshot directory.
///
/// The directory is wiped first. Returns the number of output files that
/// exist afterwards — shots whose capture failed are simply absent.
pub async fn capture_shots(config: &CaptureConfig) -> Result<usize, GuideError> {
    let shots = descriptors::load_shots(&config.shots_file)?;

    ensure_clean_dir(&config.screenshot_dir)?;

    info!("Capturing screenshots for {} pages", shots.len());
    for shot in &shots {
        capture_one(config, shot).await?;
    }

    let produced = shots
        .iter()
        .filter(|s| std::path::Path::new(&s.output).exists())
        .count();
    if produced < shots.len() {
        warn!(
            "{} of {} captures produced no output file",
            shots.len() - produced,
            shots.len()
        );
    }
    Ok(produced)
}

/// Run one capture-tool invocation for a single shot.
///
/// Only a spawn failure (tool not installed) is fatal; a non-zero exit is
/// logged and swallowed.
async fn capture_one(config: &CaptureConfig, shot: &ShotEntry) -> Result<(), GuideError> {
    info!("Capturing {} -> {}", shot.url, shot.output);

    let status = Command::new(&config.tool)
        .arg(&shot.url)
        .arg("--auth")
        .arg(&config.auth_file)
        .arg("--wait")
        .arg(config.wait_ms.to_string())
        .arg("--output")
        .arg(&shot.output)
        .status()
        .await
        .map_err(|e| GuideError::ToolSpawn {
            tool: config.tool.clone(),
            source: e,
        })?;

    if !status.success() {
        warn!("Capture of {} exited with {}", shot.url, status);
    }
    Ok(())
}

/// Full capture stage: authenticate, then capture all shots.
pub async fn run(config: &CaptureConfig) -> Result<usize, GuideError> {
    authenticate(config).await?;
    capture_shots(config).await
}
