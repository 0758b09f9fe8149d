//! PDF export: drive an external HTML-to-PDF engine.
//!
//! The engine (weasyprint by default) is optional tooling: when it is not
//! installed the HTML deliverable is still produced, the PDF step reports a
//! typed error, and the caller logs it without propagating. The HTML file's
//! directory is passed as the base URL so relative image references resolve
//! the same way they do in a browser.

use crate::error::GuideError;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, info};

/// Default HTML-to-PDF engine executable.
pub const DEFAULT_ENGINE: &str = "weasyprint";

/// Probe whether the engine is runnable.
pub async fn engine_available(engine: &str) -> bool {
    Command::new(engine)
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await
        .map(|s| s.success())
        .unwrap_or(false)
}

/// Convert an HTML file to PDF.
///
/// Returns [`GuideError::PdfEngineUnavailable`] without touching the
/// filesystem when the engine is missing, and
/// [`GuideError::PdfConversionFailed`] when it runs but exits non-zero.
/// Callers log either outcome and keep going; the HTML output stands on its
/// own.
pub async fn html_to_pdf(
    engine: &str,
    html_file: &Path,
    pdf_file: &Path,
) -> Result<(), GuideError> {
    if !engine_available(engine).await {
        return Err(GuideError::PdfEngineUnavailable {
            engine: engine.to_string(),
        });
    }

    let html_dir = html_file
        .canonicalize()
        .ok()
        .and_then(|p| p.parent().map(|d| d.to_path_buf()))
        .unwrap_or_else(|| Path::new(".").to_path_buf());
    let base_url = format!("file://{}/", html_dir.display());
    debug!("PDF base url: {}", base_url);

    let output = Command::new(engine)
        .arg("--base-url")
        .arg(&base_url)
        .arg(html_file)
        .arg(pdf_file)
        .output()
        .await
        .map_err(|e| GuideError::PdfConversionFailed {
            engine: engine.to_string(),
            detail: e.to_string(),
        })?;

    if !output.status.success() {
        return Err(GuideError::PdfConversionFailed {
            engine: engine.to_string(),
            detail: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    info!(
        "Successfully converted {} to {}",
        html_file.display(),
        pdf_file.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn nonexistent_engine_is_unavailable() {
        assert!(!engine_available("guidegen-test-no-such-engine").await);
    }

    #[tokio::test]
    async fn unavailable_engine_yields_typed_error_and_no_pdf() {
        let dir = tempfile::tempdir().expect("tempdir");
        let html = dir.path().join("doc.html");
        std::fs::write(&html, "<html><body>hi</body></html>").unwrap();
        let pdf = dir.path().join("doc.pdf");

        let err = html_to_pdf("guidegen-test-no-such-engine", &html, &pdf)
            .await
            .unwrap_err();
        assert!(matches!(err, GuideError::PdfEngineUnavailable { .. }));
        assert!(!pdf.exists(), "no PDF must be created");
    }
}
