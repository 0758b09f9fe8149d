//! Blob-URL rewriting: GitHub web-UI links → raw content links.
//!
//! Chapter Markdown may embed images through GitHub "blob" links, which
//! serve an HTML page rather than the file itself. Rewriting them to the
//! raw-content form lets the images resolve in rendered HTML and PDF
//! output. The rewrite is a pure regex substitution applied to the raw
//! Markdown text before conversion.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static RE_BLOB_URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"https://github\.com/([^/\s]+/[^/\s]+)/blob/([^/\s]+)/([^\s)]+)").unwrap());

/// Rewrite every GitHub blob URL in `text` to its raw-content equivalent.
///
/// `https://github.com/o/r/blob/main/a/b.png` becomes
/// `https://github.com/o/r/raw/refs/heads/main/a/b.png`; anything that does
/// not match the blob pattern is left untouched.
pub fn rewrite_blob_urls(text: &str) -> String {
    RE_BLOB_URL
        .replace_all(text, |caps: &Captures| {
            format!(
                "https://github.com/{}/raw/refs/heads/{}/{}",
                &caps[1], &caps[2], &caps[3]
            )
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rewrites_blob_to_raw() {
        let input = "![img](https://github.com/o/r/blob/main/a/b.png)";
        let out = rewrite_blob_urls(input);
        assert_eq!(
            out,
            "![img](https://github.com/o/r/raw/refs/heads/main/a/b.png)"
        );
    }

    #[test]
    fn rewrites_nested_paths_and_branches() {
        let input = "see https://github.com/acme/app/blob/release-2.1/docs/img/shot.jpeg here";
        let out = rewrite_blob_urls(input);
        assert!(out.contains(
            "https://github.com/acme/app/raw/refs/heads/release-2.1/docs/img/shot.jpeg"
        ));
        assert!(out.starts_with("see "));
        assert!(out.ends_with(" here"));
    }

    #[test]
    fn leaves_non_matching_urls_unchanged() {
        let cases = [
            "https://github.com/o/r/raw/refs/heads/main/a.png",
            "https://gitlab.com/o/r/blob/main/a.png",
            "https://github.com/o/r/tree/main/a",
            "plain text without links",
        ];
        for c in cases {
            assert_eq!(rewrite_blob_urls(c), c, "should be unchanged: {c}");
        }
    }

    #[test]
    fn rewrites_multiple_occurrences() {
        let input = "\
![a](https://github.com/o/r/blob/main/a.png)
![b](https://github.com/o/r/blob/main/b.png)";
        let out = rewrite_blob_urls(input);
        assert_eq!(out.matches("/raw/refs/heads/main/").count(), 2);
        assert!(!out.contains("/blob/"));
    }
}
