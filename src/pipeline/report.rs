//! PDF report orchestration: drive the rendering stage as a subprocess.
//!
//! The rendering stage is a separate binary with its own CLI contract, and
//! this module invokes it exactly the way a user would:
//! `md2html --single --pdf <chapters_dir> user_guide.html`. The renderer is
//! resolved next to the current executable first (the usual cargo install
//! layout), falling back to `PATH`.

use crate::error::GuideError;
use std::path::{Path, PathBuf};
use tokio::process::Command;
use tracing::{error, info};

/// HTML file the renderer is asked to produce.
const REPORT_HTML: &str = "user_guide.html";

/// PDF the renderer derives from [`REPORT_HTML`].
const REPORT_PDF: &str = "user_guide.pdf";

/// Locate the rendering binary.
///
/// Prefers a sibling of the current executable so `guide-describe` finds the
/// `md2html` it was installed with; falls back to whatever `PATH` resolves.
pub fn resolve_renderer() -> PathBuf {
    let name = if cfg!(windows) { "md2html.exe" } else { "md2html" };
    if let Ok(exe) = std::env::current_exe() {
        if let Some(dir) = exe.parent() {
            let sibling = dir.join(name);
            if sibling.exists() {
                return sibling;
            }
        }
    }
    PathBuf::from(name)
}

/// Render the chapter directory into a combined HTML + PDF report.
///
/// Failures are returned for the caller to log; per the pipeline contract
/// they must not abort the run, so `guide-describe` logs and carries on.
pub async fn create_pdf_report(
    chapters_dir: &Path,
    output_file: &Path,
) -> Result<(), GuideError> {
    info!("Creating PDF report in {}", output_file.display());

    let renderer = resolve_renderer();
    let output = Command::new(&renderer)
        .arg("--single")
        .arg("--pdf")
        .arg(chapters_dir)
        .arg(REPORT_HTML)
        .output()
        .await
        .map_err(|e| GuideError::ToolSpawn {
            tool: renderer.display().to_string(),
            source: e,
        })?;

    if !output.status.success() {
        error!(
            "Renderer exited with {}\nstdout: {}\nstderr: {}",
            output.status,
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr),
        );
        return Err(GuideError::Internal(format!(
            "renderer exited with {}",
            output.status
        )));
    }

    if !Path::new(REPORT_PDF).exists() {
        return Err(GuideError::Internal(
            "PDF generation failed - no output file created".into(),
        ));
    }

    if output_file != Path::new(REPORT_PDF) {
        std::fs::rename(REPORT_PDF, output_file).map_err(|e| GuideError::OutputWrite {
            path: output_file.to_path_buf(),
            source: e,
        })?;
    }

    info!("PDF report generated: {}", output_file.display());
    Ok(())
}
