//! End-to-end integration tests for guidegen.
//!
//! The vision endpoint is mocked with [`httpmock`] so the full
//! describe → chapters → render path runs hermetically: no API key, no
//! network, no capture tool. PDF tests use a deliberately nonexistent
//! engine name to exercise the degrade path.

use guidegen::pipeline::{chapters, describe};
use guidegen::{render, DescribeConfig};
use httpmock::prelude::*;
use serde_json::json;
use std::path::Path;

// ── Test helpers ─────────────────────────────────────────────────────────────

/// A screenshot directory populated with the given filenames (content is a
/// tiny PNG-ish byte string; the pipeline never decodes pixels).
fn screenshot_dir(files: &[&str]) -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    for name in files {
        std::fs::write(dir.path().join(name), b"\x89PNG-not-really").expect("write");
    }
    dir
}

fn config_for(server: &MockServer, shots: &Path, chapters: &Path) -> DescribeConfig {
    DescribeConfig::builder()
        .api_key("sk-test")
        .api_base(server.base_url())
        .screenshot_dir(shots)
        .chapters_dir(chapters)
        .build()
        .expect("config should build")
}

fn ok_body(text: &str) -> serde_json::Value {
    json!({
        "choices": [{"message": {"role": "assistant", "content": text}}]
    })
}

// ── Describe stage ───────────────────────────────────────────────────────────

#[tokio::test]
async fn describes_every_image_and_writes_one_chapter_each() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/chat/completions");
            then.status(200).json_body(ok_body("A tidy dashboard."));
        })
        .await;

    let shots = screenshot_dir(&["home_page.png", "settings.jpg", "admin.jpeg"]);
    let out = tempfile::tempdir().expect("tempdir");
    let config = config_for(&server, shots.path(), out.path());

    let descriptions = describe::collect_descriptions(&config)
        .await
        .expect("describe should succeed");
    assert_eq!(descriptions.len(), 3);
    assert_eq!(descriptions["home_page.png"], "A tidy dashboard.");
    mock.assert_hits_async(3).await;

    let written = chapters::write_chapters(&descriptions, out.path()).expect("write");
    assert_eq!(written, 3);
    assert!(out.path().join("Home_Page.md").exists());
    assert!(out.path().join("Settings.md").exists());
    assert!(out.path().join("Admin.md").exists());
}

#[tokio::test]
async fn request_carries_model_token_cap_and_data_url() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/chat/completions")
                .body_contains("\"model\":\"gpt-4o\"")
                .body_contains("\"max_tokens\":500")
                .body_contains("data:image/png;base64,")
                .body_contains("Screenshot: ");
            then.status(200).json_body(ok_body("ok"));
        })
        .await;

    let shots = screenshot_dir(&["login.png"]);
    let out = tempfile::tempdir().expect("tempdir");
    let config = config_for(&server, shots.path(), out.path());

    let descriptions = describe::collect_descriptions(&config).await.unwrap();
    assert_eq!(descriptions.len(), 1);
    mock.assert_async().await;
}

#[tokio::test]
async fn failed_call_degrades_to_error_text_without_blocking_others() {
    let server = MockServer::start_async().await;
    let _bad = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/chat/completions")
                .body_contains("broken.png");
            then.status(500).body("upstream exploded");
        })
        .await;
    let _good = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/chat/completions")
                .body_contains("home.png");
            then.status(200).json_body(ok_body("The landing page."));
        })
        .await;

    let shots = screenshot_dir(&["broken.png", "home.png"]);
    let out = tempfile::tempdir().expect("tempdir");
    let config = config_for(&server, shots.path(), out.path());

    let descriptions = describe::collect_descriptions(&config).await.unwrap();
    assert_eq!(descriptions.len(), 2);
    assert_eq!(descriptions["home.png"], "The landing page.");
    let degraded = &descriptions["broken.png"];
    assert!(degraded.contains("Error analyzing"), "got: {degraded}");
    assert!(degraded.contains("broken.png"), "got: {degraded}");

    // Both entries still become chapters — degraded text included.
    chapters::write_chapters(&descriptions, out.path()).expect("write");
    let body = std::fs::read_to_string(out.path().join("Broken.md")).unwrap();
    assert!(body.contains("Error analyzing"));
}

#[tokio::test]
async fn non_image_files_are_skipped() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/chat/completions");
            then.status(200).json_body(ok_body("desc"));
        })
        .await;

    let shots = screenshot_dir(&["page.png", "notes.txt", "README.md"]);
    let out = tempfile::tempdir().expect("tempdir");
    let config = config_for(&server, shots.path(), out.path());

    let descriptions = describe::collect_descriptions(&config).await.unwrap();
    assert_eq!(descriptions.len(), 1);
    assert!(descriptions.contains_key("page.png"));
    mock.assert_hits_async(1).await;

    chapters::write_chapters(&descriptions, out.path()).expect("write");
    let files: Vec<String> = std::fs::read_dir(out.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().into_string().unwrap())
        .collect();
    assert_eq!(files, vec!["Page.md"]);
}

#[tokio::test]
async fn missing_screenshot_dir_yields_empty_map() {
    let server = MockServer::start_async().await;
    let out = tempfile::tempdir().expect("tempdir");
    let config = config_for(
        &server,
        Path::new("/no/such/screenshot/dir"),
        out.path(),
    );

    let descriptions = describe::collect_descriptions(&config).await.unwrap();
    assert!(descriptions.is_empty());
}

#[tokio::test]
async fn rerun_with_identical_inputs_does_not_accumulate_chapters() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/chat/completions");
            then.status(200).json_body(ok_body("stable"));
        })
        .await;

    let shots = screenshot_dir(&["a.png", "b.png"]);
    let out = tempfile::tempdir().expect("tempdir");
    let config = config_for(&server, shots.path(), out.path());

    for _ in 0..2 {
        let descriptions = describe::collect_descriptions(&config).await.unwrap();
        chapters::write_chapters(&descriptions, out.path()).expect("write");
    }

    assert_eq!(std::fs::read_dir(out.path()).unwrap().count(), 2);
}

// ── Render stage ─────────────────────────────────────────────────────────────

fn chapter_dir(chapters: &[(&str, &str)]) -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    for (name, body) in chapters {
        std::fs::write(dir.path().join(name), body).expect("write");
    }
    dir
}

#[tokio::test]
async fn combined_document_orders_toc_by_filename() {
    let src = chapter_dir(&[
        ("Zebra.md", "# Zebra page"),
        ("Alpha.md", "# Alpha page"),
        ("Mid.md", "# Mid page"),
    ]);
    let out = tempfile::tempdir().expect("tempdir");
    let output = out.path().join("combined.html");

    let n = render::convert_to_single_html(src.path(), &output, false, "weasyprint")
        .await
        .expect("combined conversion");
    assert_eq!(n, 3);

    let doc = std::fs::read_to_string(&output).unwrap();
    assert_eq!(doc.matches("<li><a href=\"#section-").count(), 3);
    let alpha = doc.find(">Alpha</a>").unwrap();
    let mid = doc.find(">Mid</a>").unwrap();
    let zebra = doc.find(">Zebra</a>").unwrap();
    assert!(alpha < mid && mid < zebra, "TOC must follow lexical order");
}

#[tokio::test]
async fn per_file_mode_produces_one_html_per_chapter() {
    let src = chapter_dir(&[
        ("Home.md", "![s](https://github.com/o/r/blob/main/s.png)"),
        ("Settings.md", "content"),
    ]);
    let out = tempfile::tempdir().expect("tempdir");
    let out_dir = out.path().join("html");

    let n = render::convert_directory(src.path(), &out_dir, false, "weasyprint")
        .await
        .expect("per-file conversion");
    assert_eq!(n, 2);
    assert!(out_dir.join("Home.html").exists());
    assert!(out_dir.join("Settings.html").exists());

    let home = std::fs::read_to_string(out_dir.join("Home.html")).unwrap();
    assert!(home.contains("https://github.com/o/r/raw/refs/heads/main/s.png"));
}

#[tokio::test]
async fn empty_input_dir_converts_nothing() {
    let src = tempfile::tempdir().expect("tempdir");
    let out = tempfile::tempdir().expect("tempdir");
    let n = render::convert_directory(src.path(), &out.path().join("html"), false, "weasyprint")
        .await
        .expect("should not error");
    assert_eq!(n, 0);
}

#[tokio::test]
async fn missing_pdf_engine_keeps_html_and_creates_no_pdf() {
    let src = chapter_dir(&[("Only.md", "# Only chapter")]);
    let out = tempfile::tempdir().expect("tempdir");
    let output = out.path().join("guide.html");

    let n = render::convert_to_single_html(
        src.path(),
        &output,
        true,
        "guidegen-test-no-such-engine",
    )
    .await
    .expect("conversion itself must not fail");
    assert_eq!(n, 1);
    assert!(output.exists(), "HTML output must still be produced");
    assert!(
        !out.path().join("guide.pdf").exists(),
        "no PDF may be created without the engine"
    );

    // Print profile is selected whenever PDF output was requested.
    let doc = std::fs::read_to_string(&output).unwrap();
    assert!(doc.contains("page-break-before: always"));
}
