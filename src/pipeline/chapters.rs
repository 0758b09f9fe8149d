//! Chapter generation: one Markdown file per described screenshot.
//!
//! Chapter files are named after the title-cased screenshot base name and
//! live in a flat directory that is wiped before every write — chapters are
//! fully disposable, rebuilt from scratch each run, and never versioned.

use crate::error::GuideError;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::info;

/// Title-case a base name the way chapter files are named.
///
/// A letter is uppercased when the preceding character is not alphabetic and
/// lowercased otherwise, so separators and digits both reset the word
/// boundary: `home_page` → `Home_Page`, `login-form` → `Login-Form`,
/// `abc2def` → `Abc2Def`.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for ch in s.chars() {
        if ch.is_alphabetic() {
            if prev_alpha {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(ch);
            prev_alpha = false;
        }
    }
    out
}

/// Chapter filename for a screenshot filename: title-cased base name + `.md`.
pub fn chapter_filename(screenshot: &str) -> String {
    let base = Path::new(screenshot)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(screenshot);
    format!("{}.md", title_case(base))
}

/// Create `dir` if missing, then delete every regular file inside it.
///
/// This is the delete-then-repopulate policy both output directories share:
/// the wipe happens unconditionally, before any failure in the subsequent
/// population step could be detected.
pub fn ensure_clean_dir(dir: &Path) -> Result<(), GuideError> {
    if !dir.exists() {
        std::fs::create_dir_all(dir).map_err(|e| GuideError::DirCreate {
            path: dir.to_path_buf(),
            source: e,
        })?;
        info!("Created directory: {}", dir.display());
    }

    let entries = std::fs::read_dir(dir).map_err(|e| GuideError::DirWipe {
        path: dir.to_path_buf(),
        source: e,
    })?;
    for entry in entries.filter_map(|e| e.ok()) {
        if entry.file_type().map(|t| t.is_file()).unwrap_or(false) {
            std::fs::remove_file(entry.path()).map_err(|e| GuideError::DirWipe {
                path: entry.path(),
                source: e,
            })?;
        }
    }
    Ok(())
}

/// Write one chapter file per description into `output_dir`.
///
/// The directory is wiped first, so an empty description map still clears
/// prior chapters and writes nothing new. Returns the number of chapters
/// written.
pub fn write_chapters(
    descriptions: &BTreeMap<String, String>,
    output_dir: &Path,
) -> Result<usize, GuideError> {
    info!("Creating markdown report in {}", output_dir.display());
    ensure_clean_dir(output_dir)?;

    for (filename, description) in descriptions {
        let chapter_path = output_dir.join(chapter_filename(filename));
        let body = format!(
            "![Screenshot of {filename}](screenshots/{filename})\n\n## Description\n\n{description}\n\n"
        );
        std::fs::write(&chapter_path, body).map_err(|e| GuideError::OutputWrite {
            path: chapter_path.clone(),
            source: e,
        })?;
        info!("Created chapter: {}", chapter_path.display());
    }

    info!(
        "Generated {} chapter files in {}/",
        descriptions.len(),
        output_dir.display()
    );
    Ok(descriptions.len())
}
