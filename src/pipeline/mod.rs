//! Pipeline stages for guide generation.
//!
//! Each submodule implements exactly one transformation step. The stages
//! share no runtime state — they compose through the filesystem, and every
//! external call runs strictly in sequence.
//!
//! ## Data Flow
//!
//! ```text
//! capture ──▶ encode ──▶ llm ──▶ describe ──▶ chapters ──▶ report
//! (shot-      (base64    (VLM    (filename →   (wipe +      (md2html
//!  scraper)    data URL)  call)   description)  write .md)   subprocess)
//! ```
//!
//! 1. [`capture`]  — authenticate once, then one capture-tool invocation per
//!    declared shot
//! 2. [`encode`]   — image file → base64 data URL, MIME from extension
//! 3. [`llm`]      — one vision-model call per image; the only stage with
//!    network I/O
//! 4. [`describe`] — directory scan with the degrade-on-error-per-item policy
//! 5. [`chapters`] — wipe the chapters directory, write one Markdown file per
//!    description
//! 6. [`report`]   — shell out to the rendering binary for the combined
//!    HTML + PDF deliverable

pub mod capture;
pub mod chapters;
pub mod describe;
pub mod encode;
pub mod llm;
pub mod report;
