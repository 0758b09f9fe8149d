//! Declarative capture descriptors: `login.yml` and `shots.yml`.
//!
//! Both files are externally authored YAML sequences. The shapes are kept
//! minimal on purpose — unknown fields are ignored so descriptor authors can
//! annotate entries freely (titles, notes, viewport hints for the capture
//! tool) without breaking this pipeline.
//!
//! A malformed descriptor is a *fatal* error: there is no sensible way to
//! guess what the author meant, so the run terminates with a
//! [`GuideError::DescriptorParse`] naming the offending file.

use crate::error::GuideError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One login record from `login.yml`.
///
/// Only the first record of the file is used to establish the authenticated
/// session; the rest are tolerated but ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginEntry {
    /// Login page URL handed to the capture tool's `auth` subcommand.
    pub url: String,
}

/// One shot record from `shots.yml`: a page to screenshot and where the
/// image lands.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShotEntry {
    /// Page URL to capture.
    pub url: String,
    /// Output image path, as declared by the descriptor author.
    pub output: String,
}

/// Load and parse `login.yml`.
///
/// Returns [`GuideError::EmptyDescriptor`] when the file parses to an empty
/// sequence — an empty login list means authentication cannot happen.
pub fn load_login(path: impl AsRef<Path>) -> Result<Vec<LoginEntry>, GuideError> {
    let entries: Vec<LoginEntry> = load_yaml(path.as_ref())?;
    if entries.is_empty() {
        return Err(GuideError::EmptyDescriptor {
            path: path.as_ref().to_path_buf(),
        });
    }
    Ok(entries)
}

/// Load and parse `shots.yml`.
///
/// An empty shot list is allowed — the capture stage then just wipes the
/// screenshot directory and produces nothing, which downstream stages handle.
pub fn load_shots(path: impl AsRef<Path>) -> Result<Vec<ShotEntry>, GuideError> {
    load_yaml(path.as_ref())
}

fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, GuideError> {
    let raw = std::fs::read_to_string(path).map_err(|e| GuideError::DescriptorRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    serde_yaml::from_str(&raw).map_err(|e| GuideError::DescriptorParse {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(content: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().expect("temp file");
        f.write_all(content.as_bytes()).expect("write");
        f
    }

    #[test]
    fn parses_login_with_extra_fields() {
        let f = write_temp("- url: https://app.example.com/login\n  note: admin account\n");
        let entries = load_login(f.path()).expect("should parse");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].url, "https://app.example.com/login");
    }

    #[test]
    fn empty_login_is_an_error() {
        let f = write_temp("[]\n");
        let err = load_login(f.path()).unwrap_err();
        assert!(matches!(err, GuideError::EmptyDescriptor { .. }));
    }

    #[test]
    fn parses_shot_list_in_order() {
        let f = write_temp(
            "- url: https://app.example.com/home\n  output: screenshots/home.png\n\
             - url: https://app.example.com/settings\n  output: screenshots/settings.png\n",
        );
        let shots = load_shots(f.path()).expect("should parse");
        assert_eq!(shots.len(), 2);
        assert_eq!(shots[0].output, "screenshots/home.png");
        assert_eq!(shots[1].url, "https://app.example.com/settings");
    }

    #[test]
    fn malformed_yaml_is_a_parse_error() {
        let f = write_temp("- url: [unterminated\n");
        let err = load_shots(f.path()).unwrap_err();
        assert!(matches!(err, GuideError::DescriptorParse { .. }));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = load_shots("/definitely/not/here/shots.yml").unwrap_err();
        assert!(matches!(err, GuideError::DescriptorRead { .. }));
    }

    #[test]
    fn missing_output_field_is_a_parse_error() {
        let f = write_temp("- url: https://app.example.com/home\n");
        let err = load_shots(f.path()).unwrap_err();
        assert!(matches!(err, GuideError::DescriptorParse { .. }));
    }
}
