//! Description generation: scan the screenshot directory and describe each
//! image via the vision model.
//!
//! ## Failure contract
//!
//! This stage defines the pipeline's (limited) failure tolerance and must
//! keep it exactly:
//!
//! * Missing screenshot directory → logged error, empty map returned. The
//!   caller skips PDF generation entirely.
//! * Empty directory → logged warning, empty map.
//! * A failed model call (or unreadable image) → the description for that
//!   file becomes the literal string `"Error analyzing {path}: {error}"` and
//!   the run continues — one bad image never blocks the rest.
//!
//! Calls are issued strictly one at a time; total latency scales linearly
//! with the number of screenshots.

use crate::config::DescribeConfig;
use crate::error::GuideError;
use crate::pipeline::{encode, llm};
use crate::prompts;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{error, info, warn};

/// Recognized screenshot extensions.
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// Whether a filename has a recognized image extension.
pub fn is_image_file(filename: &str) -> bool {
    Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| e.eq_ignore_ascii_case(known))
        })
        .unwrap_or(false)
}

/// Describe every recognized image in the screenshot directory.
///
/// Returns a map from screenshot filename to description text, in sorted
/// filename order. The map is the run's only in-memory state; nothing
/// persists across runs.
pub async fn collect_descriptions(
    config: &DescribeConfig,
) -> Result<BTreeMap<String, String>, GuideError> {
    let folder = &config.screenshot_dir;
    info!("Getting screenshot descriptions from {}", folder.display());

    let mut descriptions = BTreeMap::new();

    if !folder.exists() {
        error!(
            "Screenshots folder '{}' does not exist!",
            folder.display()
        );
        return Ok(descriptions);
    }

    let mut filenames: Vec<String> = std::fs::read_dir(folder)
        .map_err(|e| GuideError::SourceRead {
            path: folder.clone(),
            source: e,
        })?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().map(|t| t.is_file()).unwrap_or(false))
        .filter_map(|entry| entry.file_name().into_string().ok())
        .collect();
    filenames.sort();

    if filenames.is_empty() {
        warn!("Screenshots folder '{}' is empty!", folder.display());
        return Ok(descriptions);
    }

    let images: Vec<&String> = filenames.iter().filter(|f| is_image_file(f)).collect();
    if let Some(ref cb) = config.progress_callback {
        cb.on_scan_complete(images.len());
    }

    let client = reqwest::Client::new();
    let mut failed = 0usize;
    let mut index = 0usize;

    for filename in &filenames {
        if !is_image_file(filename) {
            info!("Skipping {} (not an image file)", filename);
            continue;
        }

        index += 1;
        let image_path = folder.join(filename);
        let path_str = image_path.display().to_string();
        info!("Analyzing {}", path_str);
        if let Some(ref cb) = config.progress_callback {
            cb.on_image_start(filename, index, images.len());
        }

        let description = match analyze_screenshot(&client, config, &image_path).await {
            Ok(text) => {
                if let Some(ref cb) = config.progress_callback {
                    cb.on_image_described(filename, text.len());
                }
                text
            }
            Err(e) => {
                failed += 1;
                warn!("Failed to analyze {}: {}", path_str, e);
                if let Some(ref cb) = config.progress_callback {
                    cb.on_image_failed(filename, &e.to_string());
                }
                format!("Error analyzing {path_str}: {e}")
            }
        };

        descriptions.insert(filename.clone(), description);
        info!("Analyzed {}", filename);
    }

    if descriptions.is_empty() {
        info!("No image files found in the screenshots folder!");
    }
    if let Some(ref cb) = config.progress_callback {
        cb.on_describe_complete(descriptions.len(), failed);
    }

    Ok(descriptions)
}

/// Encode one screenshot and run the vision-model call for it.
async fn analyze_screenshot(
    client: &reqwest::Client,
    config: &DescribeConfig,
    image_path: &Path,
) -> Result<String, GuideError> {
    let data_url = encode::encode_image(image_path)?;
    let prompt = prompts::description_prompt(
        config.prompt.as_deref(),
        &image_path.display().to_string(),
    );
    llm::describe_image(client, config, prompt, &data_url).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_image_extensions() {
        assert!(is_image_file("home.png"));
        assert!(is_image_file("home.jpg"));
        assert!(is_image_file("home.jpeg"));
        assert!(is_image_file("HOME.PNG"));
    }

    #[test]
    fn rejects_other_extensions() {
        assert!(!is_image_file("notes.txt"));
        assert!(!is_image_file("archive.png.zip"));
        assert!(!is_image_file("video.gif"));
        assert!(!is_image_file("no_extension"));
        assert!(!is_image_file(".png"));
    }
}
