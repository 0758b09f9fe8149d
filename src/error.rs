//! Error types for the guidegen library.
//!
//! Two distinct failure modes exist in this pipeline:
//!
//! * [`GuideError`] — **Fatal**: the stage cannot proceed at all (missing or
//!   malformed descriptor file, no API key, capture tool not installed).
//!   Returned as `Err(GuideError)` from the stage entry points.
//!
//! * Per-item degradation — **Non-fatal** and deliberately *untyped*: a
//!   failed vision-model call becomes a literal `"Error analyzing …"`
//!   description string, a failed chapter conversion is logged and skipped,
//!   and a failed PDF export is logged by the caller without propagating.
//!   One bad screenshot never blocks the rest of the guide.

use std::path::PathBuf;
use thiserror::Error;

/// All fatal errors returned by the guidegen library.
///
/// Per-item failures (one screenshot, one chapter) degrade in place rather
/// than surfacing here — see the module docs.
#[derive(Debug, Error)]
pub enum GuideError {
    // ── Descriptor errors ─────────────────────────────────────────────────
    /// Descriptor file could not be read from disk.
    #[error("Failed to read descriptor '{path}': {source}")]
    DescriptorRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Descriptor file is not valid YAML or has the wrong shape.
    #[error("Failed to parse descriptor '{path}': {source}")]
    DescriptorParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// Descriptor parsed fine but contains no entries to act on.
    #[error("Descriptor '{path}' is empty — nothing to capture")]
    EmptyDescriptor { path: PathBuf },

    // ── Capture errors ────────────────────────────────────────────────────
    /// The external capture tool could not be started at all.
    #[error("Failed to run '{tool}': {source}\nIs it installed and on PATH? Try: pip install shot-scraper")]
    ToolSpawn {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    // ── VLM errors ────────────────────────────────────────────────────────
    /// No API key was configured for the vision model.
    #[error("No API key configured for the vision model.\nSet OPENAI_API_KEY or pass one via DescribeConfig::builder().api_key(…).")]
    MissingApiKey,

    // ── I/O errors ────────────────────────────────────────────────────────
    /// A pipeline directory could not be created.
    #[error("Failed to create directory '{path}': {source}")]
    DirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Clearing a pipeline output directory failed.
    #[error("Failed to clear directory '{path}': {source}")]
    DirWipe {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Could not write an output file (chapter, HTML, renamed PDF).
    #[error("Failed to write output file '{path}': {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Could not read a source file during rendering.
    #[error("Failed to read '{path}': {source}")]
    SourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── PDF engine errors ─────────────────────────────────────────────────
    /// The HTML-to-PDF engine is not installed.
    ///
    /// Callers log this and keep the HTML output; it is never propagated out
    /// of a stage.
    #[error("PDF engine '{engine}' is not available.\nInstall it with: pip install weasyprint")]
    PdfEngineUnavailable { engine: String },

    /// The HTML-to-PDF engine ran but failed.
    #[error("PDF engine '{engine}' failed: {detail}")]
    PdfConversionFailed { engine: String, detail: String },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ── Catch-all ─────────────────────────────────────────────────────────
    /// Unexpected internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_parse_display_names_the_file() {
        let bad: Result<Vec<String>, _> = serde_yaml::from_str("{not: [valid");
        let e = GuideError::DescriptorParse {
            path: PathBuf::from("login.yml"),
            source: bad.unwrap_err(),
        };
        assert!(e.to_string().contains("login.yml"), "got: {e}");
    }

    #[test]
    fn missing_api_key_mentions_env_var() {
        assert!(GuideError::MissingApiKey.to_string().contains("OPENAI_API_KEY"));
    }

    #[test]
    fn pdf_engine_unavailable_display() {
        let e = GuideError::PdfEngineUnavailable {
            engine: "weasyprint".into(),
        };
        let msg = e.to_string();
        assert!(msg.contains("weasyprint"));
        assert!(msg.contains("pip install"));
    }

    #[test]
    fn tool_spawn_display() {
        let e = GuideError::ToolSpawn {
            tool: "shot-scraper".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(e.to_string().contains("shot-scraper"));
    }
}
