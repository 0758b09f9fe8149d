//! CLI binary for the document-rendering stage.
//!
//! Converts a directory of Markdown chapters to HTML — one page per chapter
//! or a single combined document with a table of contents — with optional
//! PDF export through an external engine.

use anyhow::{Context, Result};
use clap::Parser;
use guidegen::render;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const AFTER_HELP: &str = r#"MODES:
  md2html [DIR] [OUT_DIR]            Convert each .md to a separate HTML file
  md2html --pdf [DIR] [OUT_DIR]      Separate HTML files + a PDF per chapter
  md2html --single [DIR] [OUT_FILE]  One combined HTML with a table of contents
  md2html --single --pdf [DIR] [OUT_FILE]
                                     Combined HTML + PDF

DEFAULTS:
  DIR       .
  OUT_DIR   html                      (per-file modes)
  OUT_FILE  combined_documentation.html  (single modes)

PDF generation requires weasyprint:  pip install weasyprint
When the engine is missing the HTML output is still produced and the PDF
step is skipped with a warning.
"#;

/// Convert Markdown chapter files to HTML and optionally PDF.
#[derive(Parser, Debug)]
#[command(
    name = "md2html",
    version,
    about = "Convert Markdown chapter files to HTML and optionally PDF",
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Input directory containing .md files.
    input: Option<PathBuf>,

    /// Output directory (per-file modes) or output file (--single).
    output: Option<PathBuf>,

    /// Combine all chapters into one HTML document with a table of contents.
    #[arg(long)]
    single: bool,

    /// Also export PDF through the HTML-to-PDF engine.
    #[arg(long)]
    pdf: bool,

    /// HTML-to-PDF engine executable.
    #[arg(long, env = "GUIDEGEN_PDF_ENGINE", default_value = render::pdf::DEFAULT_ENGINE)]
    engine: String,

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

    let filter = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    let input_dir = cli.input.unwrap_or_else(|| PathBuf::from("."));

    if cli.single {
        let output_file = cli
            .output
            .unwrap_or_else(|| PathBuf::from("combined_documentation.html"));
        let n = render::convert_to_single_html(&input_dir, &output_file, cli.pdf, &cli.engine)
            .await
            .context("Combined conversion failed")?;
        if !cli.quiet {
            eprintln!("Combined {n} chapters into {}", output_file.display());
        }
    } else {
        let output_dir = cli.output.unwrap_or_else(|| PathBuf::from("html"));
        let n = render::convert_directory(&input_dir, &output_dir, cli.pdf, &cli.engine)
            .await
            .context("Per-file conversion failed")?;
        if !cli.quiet {
            eprintln!("Converted {n} chapters into {}", output_dir.display());
        }
    }

    Ok(())
}
