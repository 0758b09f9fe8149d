//! CLI binary for the description-generation stage.
//!
//! Maps CLI flags to `DescribeConfig`, walks the screenshot directory,
//! writes the chapter Markdown files, and — when anything was described —
//! drives the rendering binary to produce the combined PDF report.

use anyhow::{Context, Result};
use clap::Parser;
use guidegen::{pipeline, DescribeConfig, DescribeProgressCallback};
use indicatif::{ProgressBar, ProgressStyle};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::error;
use tracing_subscriber::EnvFilter;

// ── ANSI colour helpers (no extra deps) ──────────────────────────────────────

fn green(s: &str) -> String {
    format!("\x1b[32m{s}\x1b[0m")
}
fn red(s: &str) -> String {
    format!("\x1b[31m{s}\x1b[0m")
}
fn dim(s: &str) -> String {
    format!("\x1b[2m{s}\x1b[0m")
}
fn bold(s: &str) -> String {
    format!("\x1b[1m{s}\x1b[0m")
}

// ── CLI progress callback using indicatif ────────────────────────────────────

/// Terminal progress callback: one bar across the screenshot set, one log
/// line per described image. Descriptions arrive strictly in order, so no
/// bookkeeping beyond the bar itself is needed.
struct CliDescribeProgress {
    bar: ProgressBar,
}

impl CliDescribeProgress {
    fn new() -> Arc<Self> {
        let bar = ProgressBar::new(0);
        bar.set_style(
            ProgressStyle::with_template(
                "{spinner:.cyan} {prefix:.bold}  [{bar:42.green/238}] {pos:>3}/{len} images  {msg}",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▉▊▋▌▍▎▏  "),
        );
        bar.set_prefix("Describing");
        Arc::new(Self { bar })
    }
}

impl DescribeProgressCallback for CliDescribeProgress {
    fn on_scan_complete(&self, total_images: usize) {
        self.bar.set_length(total_images as u64);
    }

    fn on_image_start(&self, filename: &str, _index: usize, _total: usize) {
        self.bar.set_message(filename.to_string());
    }

    fn on_image_described(&self, filename: &str, description_len: usize) {
        self.bar.println(format!(
            "  {} {}  {}",
            green("✓"),
            filename,
            dim(&format!("{description_len} chars"))
        ));
        self.bar.inc(1);
    }

    fn on_image_failed(&self, filename: &str, error: &str) {
        let msg = if error.len() > 80 {
            format!("{}\u{2026}", &error[..79])
        } else {
            error.to_string()
        };
        self.bar
            .println(format!("  {} {}  {}", red("✗"), filename, red(&msg)));
        self.bar.inc(1);
    }

    fn on_describe_complete(&self, total_images: usize, failed: usize) {
        self.bar.finish_and_clear();
        if failed == 0 {
            eprintln!(
                "{} {} images described",
                green("✔"),
                bold(&total_images.to_string())
            );
        } else {
            eprintln!(
                "{} {}/{} images described  ({} degraded to error text)",
                red("⚠"),
                bold(&(total_images - failed).to_string()),
                total_images,
                red(&failed.to_string()),
            );
        }
    }
}

const AFTER_HELP: &str = r#"EXAMPLES:
  # Describe screenshots/ and build chapters/ plus user_guide.pdf
  guide-describe

  # Different model and output name
  guide-describe --model gpt-4o-mini --output admin_guide.pdf

  # Chapters only, skip the PDF report
  guide-describe --skip-pdf

ENVIRONMENT VARIABLES:
  OPENAI_API_KEY           API key for the vision model (required)
  GUIDEGEN_API_BASE        OpenAI-compatible base URL
  GUIDEGEN_MODEL           Vision model ID
  GUIDEGEN_MAX_TOKENS      Response token cap per image
  GUIDEGEN_SCREENSHOT_DIR  Screenshot directory
  GUIDEGEN_CHAPTERS_DIR    Chapters directory

One vision-model call is made per screenshot, strictly in sequence. A failed
call degrades that image's description to an error note; the run continues.
"#;

/// Describe captured screenshots and assemble the user-guide chapters.
#[derive(Parser, Debug)]
#[command(
    name = "guide-describe",
    version,
    about = "Describe captured screenshots with a vision model and assemble guide chapters",
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Directory scanned for screenshots.
    #[arg(long, env = "GUIDEGEN_SCREENSHOT_DIR", default_value = "screenshots")]
    screenshot_dir: PathBuf,

    /// Directory wiped and repopulated with chapter Markdown files.
    #[arg(long, env = "GUIDEGEN_CHAPTERS_DIR", default_value = "chapters")]
    chapters_dir: PathBuf,

    /// Vision model ID.
    #[arg(long, env = "GUIDEGEN_MODEL", default_value = "gpt-4o")]
    model: String,

    /// OpenAI-compatible API base URL.
    #[arg(long, env = "GUIDEGEN_API_BASE", default_value = "https://api.openai.com/v1")]
    api_base: String,

    /// Response token cap per image.
    #[arg(long, env = "GUIDEGEN_MAX_TOKENS", default_value_t = 500)]
    max_tokens: u32,

    /// Path to a text file containing a custom description prompt.
    #[arg(long)]
    prompt: Option<PathBuf>,

    /// Final PDF report filename.
    #[arg(short, long, default_value = "user_guide.pdf")]
    output: PathBuf,

    /// Generate chapters only; do not invoke the rendering stage.
    #[arg(long)]
    skip_pdf: bool,

    /// Disable the progress bar.
    #[arg(long)]
    no_progress: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long)]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Suppress INFO-level library logs while the progress bar is active; the
    // bar provides all the feedback that matters.
    let show_progress = !cli.quiet && !cli.no_progress;
    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet || show_progress {
        "error"
    } else {
        "info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    let prompt = match cli.prompt {
        Some(ref path) => Some(
            tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read prompt from {:?}", path))?,
        ),
        None => None,
    };

    let mut builder = DescribeConfig::builder()
        .api_base(cli.api_base.clone())
        .model(cli.model.clone())
        .max_tokens(cli.max_tokens)
        .screenshot_dir(cli.screenshot_dir.clone())
        .chapters_dir(cli.chapters_dir.clone());
    if let Some(p) = prompt {
        builder = builder.prompt(p);
    }
    if show_progress {
        builder = builder.progress_callback(CliDescribeProgress::new());
    }
    let config = builder.build().context("Invalid configuration")?;

    // ── Describe + chapters ──────────────────────────────────────────────
    let descriptions = pipeline::describe::collect_descriptions(&config)
        .await
        .context("Description generation failed")?;
    pipeline::chapters::write_chapters(&descriptions, &config.chapters_dir)
        .context("Chapter generation failed")?;

    // ── PDF report ───────────────────────────────────────────────────────
    if descriptions.is_empty() {
        if !cli.quiet {
            eprintln!("No screenshots found, skipping PDF generation.");
        }
    } else if !cli.skip_pdf {
        if let Err(e) =
            pipeline::report::create_pdf_report(&config.chapters_dir, &cli.output).await
        {
            error!("Error creating PDF report: {e}");
        } else if !cli.quiet {
            eprintln!("{} {}", green("✔"), bold(&cli.output.display().to_string()));
        }
    }

    if !cli.quiet {
        eprintln!("Done.");
    }
    Ok(())
}
