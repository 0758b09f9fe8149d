//! Document rendering: Markdown chapters → HTML, optionally PDF.
//!
//! Two output shapes share one conversion core:
//!
//! * **Per-file** — every `*.md` in the source directory becomes a
//!   standalone HTML page (and optionally a PDF next to it).
//! * **Combined** — all chapters concatenate into a single document with a
//!   generated table of contents; chapter order is the lexical sort of the
//!   source filenames, and the TOC is keyed by the same order.
//!
//! Before conversion each chapter passes through the blob-URL rewrite
//! ([`urls::rewrite_blob_urls`]) so images referenced through source-control
//! web links resolve in the output. Conversion itself enables tables,
//! footnotes, strikethrough, task lists, heading attributes, and definition
//! lists, and promotes soft line breaks to hard breaks so the model's
//! single-newline paragraphs keep their shape.

pub mod pdf;
pub mod styles;
pub mod urls;

use crate::error::GuideError;
use pulldown_cmark::{html, Event, Options, Parser};
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

/// Convert one chapter's Markdown text to an HTML fragment.
///
/// Applies the blob-URL rewrite first; the substitution operates on raw
/// Markdown text, not on the parsed tree.
pub fn markdown_to_fragment(markdown: &str) -> String {
    let text = urls::rewrite_blob_urls(markdown);

    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    options.insert(Options::ENABLE_HEADING_ATTRIBUTES);
    options.insert(Options::ENABLE_DEFINITION_LIST);

    // nl2br: a single newline inside a paragraph becomes a visible break.
    let parser = Parser::new_ext(&text, options).map(|event| match event {
        Event::SoftBreak => Event::HardBreak,
        other => other,
    });

    let mut out = String::with_capacity(text.len() * 2);
    html::push_html(&mut out, parser);
    out
}

/// Wrap an HTML fragment as a complete standalone page.
fn html_page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>{title}</title>
    <style>{css}</style>
</head>
<body>
{body}
</body>
</html>"#,
        title = title,
        css = styles::PAGE_CSS,
        body = body,
    )
}

/// All `*.md` files directly inside `dir`, lexically sorted by filename.
pub fn list_markdown_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = match std::fs::read_dir(dir) {
        Ok(entries) => entries
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| {
                p.is_file()
                    && p.extension()
                        .and_then(|e| e.to_str())
                        .map(|e| e.eq_ignore_ascii_case("md"))
                        .unwrap_or(false)
            })
            .collect(),
        Err(_) => Vec::new(),
    };
    files.sort_by_key(|p| p.file_name().map(|n| n.to_os_string()));
    files
}

/// Convert a single Markdown file to a standalone HTML page.
pub fn convert_markdown_file(input: &Path, output: &Path) -> Result<(), GuideError> {
    let markdown = std::fs::read_to_string(input).map_err(|e| GuideError::SourceRead {
        path: input.to_path_buf(),
        source: e,
    })?;

    let fragment = markdown_to_fragment(&markdown);
    let title = input
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("document");
    let doc = html_page(title, &fragment);

    std::fs::write(output, doc).map_err(|e| GuideError::OutputWrite {
        path: output.to_path_buf(),
        source: e,
    })?;
    info!(
        "Successfully converted {} to {}",
        input.display(),
        output.display()
    );
    Ok(())
}

/// Per-file mode: every chapter becomes `<output_dir>/<base>.html`, plus a
/// PDF next to it when `pdf_output` is set.
///
/// Per-file failures (unreadable chapter, missing PDF engine) are logged and
/// the loop continues. Returns the number of HTML pages written.
pub async fn convert_directory(
    input_dir: &Path,
    output_dir: &Path,
    pdf_output: bool,
    engine: &str,
) -> Result<usize, GuideError> {
    if !output_dir.exists() {
        std::fs::create_dir_all(output_dir).map_err(|e| GuideError::DirCreate {
            path: output_dir.to_path_buf(),
            source: e,
        })?;
        info!("Created output directory: {}", output_dir.display());
    }

    let md_files = list_markdown_files(input_dir);
    if md_files.is_empty() {
        warn!("No markdown files found in {}", input_dir.display());
        return Ok(0);
    }

    let mut converted = 0usize;
    for md_file in &md_files {
        let base = md_file
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("chapter");
        let html_file = output_dir.join(format!("{base}.html"));

        match convert_markdown_file(md_file, &html_file) {
            Ok(()) => converted += 1,
            Err(e) => {
                error!("Error converting {}: {}", md_file.display(), e);
                continue;
            }
        }

        if pdf_output {
            let pdf_file = output_dir.join(format!("{base}.pdf"));
            if let Err(e) = pdf::html_to_pdf(engine, &html_file, &pdf_file).await {
                error!("{e}");
            }
        }
    }
    Ok(converted)
}

/// Build the combined HTML document from `(base_name, markdown)` chapters.
///
/// Chapters must already be in their final order; each becomes a
/// `<section id="section-{i}">` and one TOC entry pointing at it. The print
/// styling profile is selected when the document is destined for PDF.
pub fn build_combined_html(chapters: &[(String, String)], print: bool) -> String {
    let mut toc_items = String::new();
    let mut content = String::new();

    for (i, (base_name, markdown)) in chapters.iter().enumerate() {
        let section_id = format!("section-{i}");
        toc_items.push_str(&format!(
            "<li><a href=\"#{section_id}\">{base_name}</a></li>\n"
        ));
        content.push_str(&format!(
            "<section id=\"{section_id}\">\n<h1>{base_name}</h1>\n<hr>\n{}\n</section>\n",
            markdown_to_fragment(markdown)
        ));
    }

    let css = if print {
        styles::PRINT_CSS
    } else {
        styles::SCREEN_CSS
    };

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>Combined Documentation</title>
    <style>{css}</style>
</head>
<body>
    <div class="toc">
        <h2>Table of Contents</h2>
        <ul>
{toc_items}        </ul>
    </div>
    <div class="content">
{content}    </div>
</body>
</html>"#,
    )
}

/// Combined mode: concatenate every chapter into one HTML document with a
/// table of contents, then optionally render it to PDF.
///
/// Returns the number of chapters included. Unreadable chapters are logged
/// and skipped; a missing or failing PDF engine is logged and leaves the
/// HTML output in place.
pub async fn convert_to_single_html(
    input_dir: &Path,
    output_file: &Path,
    pdf_output: bool,
    engine: &str,
) -> Result<usize, GuideError> {
    let md_files = list_markdown_files(input_dir);
    if md_files.is_empty() {
        warn!("No markdown files found in {}", input_dir.display());
        return Ok(0);
    }

    let mut chapters: Vec<(String, String)> = Vec::with_capacity(md_files.len());
    for md_file in &md_files {
        let base = md_file
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("chapter")
            .to_string();
        match std::fs::read_to_string(md_file) {
            Ok(markdown) => chapters.push((base, markdown)),
            Err(e) => {
                error!("Error processing {}: {}", md_file.display(), e);
                continue;
            }
        }
    }

    let doc = build_combined_html(&chapters, pdf_output);
    std::fs::write(output_file, doc).map_err(|e| GuideError::OutputWrite {
        path: output_file.to_path_buf(),
        source: e,
    })?;
    info!(
        "Successfully converted {} markdown files to {}",
        chapters.len(),
        output_file.display()
    );

    if pdf_output {
        let pdf_file = output_file.with_extension("pdf");
        if let Err(e) = pdf::html_to_pdf(engine, output_file, &pdf_file).await {
            error!("{e}");
        }
    }

    Ok(chapters.len())
}
