//! # guidegen
//!
//! Generate illustrated user guides from web-app screenshots using Vision
//! Language Models (VLMs).
//!
//! ## Why this crate?
//!
//! Keeping user-guide screenshots and prose in sync by hand is the kind of
//! chore that silently rots. This crate automates the whole loop: capture
//! authenticated screenshots of a web application, let a VLM describe each
//! page as a human would, and assemble the results into a browsable HTML
//! guide or a printable PDF.
//!
//! ## Pipeline Overview
//!
//! ```text
//! shots.yml / login.yml
//!  │
//!  ├─ 1. Capture   authenticate once, one shot-scraper call per page
//!  ├─ 2. Describe  base64 each image → one vision-model call per image
//!  ├─ 3. Chapters  one Markdown file per screenshot (wipe-then-write)
//!  └─ 4. Render    chapters → per-page HTML, or one combined document
//!                  with a table of contents, optionally exported to PDF
//! ```
//!
//! The stages are independent binaries composing through the filesystem;
//! there is no shared runtime state and every external call runs strictly
//! in sequence.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use guidegen::{pipeline, DescribeConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // API key resolved from OPENAI_API_KEY
//!     let config = DescribeConfig::builder().build()?;
//!     let descriptions = pipeline::describe::collect_descriptions(&config).await?;
//!     pipeline::chapters::write_chapters(&descriptions, &config.chapters_dir)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `guide-capture`, `guide-describe`, and `md2html` binaries (clap + anyhow + tracing-subscriber + indicatif) |
//!
//! Disable `cli` when using only the library:
//! ```toml
//! guidegen = { version = "0.3", default-features = false }
//! ```

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod descriptors;
pub mod error;
pub mod pipeline;
pub mod progress;
pub mod prompts;
pub mod render;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{CaptureConfig, DescribeConfig, DescribeConfigBuilder};
pub use descriptors::{LoginEntry, ShotEntry};
pub use error::GuideError;
pub use progress::{DescribeProgress, DescribeProgressCallback, NoopDescribeProgress};
