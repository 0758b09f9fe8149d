//! Image encoding: screenshot file → base64 data URL.
//!
//! VLM APIs accept images as base64 data-URIs embedded in the JSON request
//! body. The screenshots arrive from the capture tool already encoded as
//! PNG or JPEG, so no pixel work happens here — the bytes are read as-is
//! and the MIME type is derived from the file extension alone.

use crate::error::GuideError;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::path::Path;
use tracing::debug;

/// MIME type for a screenshot filename, derived from its extension.
///
/// Unrecognized extensions fall back to `image/jpeg`; by the time this is
/// called the directory scan has already filtered to recognized image files,
/// so the fallback only covers odd casings the scan let through.
pub fn mime_for_extension(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        _ => "image/jpeg",
    }
}

/// Read an image file and wrap it as a `data:` URL for the request body.
pub fn encode_image(path: &Path) -> Result<String, GuideError> {
    let bytes = std::fs::read(path).map_err(|e| GuideError::SourceRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let b64 = STANDARD.encode(&bytes);
    debug!("Encoded {} → {} bytes base64", path.display(), b64.len());

    Ok(format!("data:{};base64,{b64}", mime_for_extension(path)))
}
