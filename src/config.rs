//! Configuration types for the guide-generation stages.
//!
//! Each stage gets its own config struct because the stages share no runtime
//! state — they compose through the filesystem. [`CaptureConfig`] is a plain
//! struct of paths and defaults; [`DescribeConfig`] carries the vision-model
//! knobs and is built via [`DescribeConfigBuilder`] so callers set only what
//! they care about and rely on documented defaults for the rest.

use crate::error::GuideError;
use crate::progress::DescribeProgressCallback;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Default directory holding captured screenshots.
pub const DEFAULT_SCREENSHOT_DIR: &str = "screenshots";

/// Default directory receiving generated Markdown chapters.
pub const DEFAULT_CHAPTERS_DIR: &str = "chapters";

// ── Capture stage ────────────────────────────────────────────────────────

/// Configuration for the screenshot-capture stage.
///
/// The capture tool is delegated wholesale: authentication state lives in
/// `auth_file` (an opaque artifact owned by the tool) and every capture call
/// consumes it.
#[derive(Debug, Clone)]
pub struct CaptureConfig {
    /// Login descriptor file. Only the first entry's URL is used.
    pub login_file: PathBuf,
    /// Shot descriptor file: one entry per screenshot to take.
    pub shots_file: PathBuf,
    /// Session credential artifact produced by the tool's `auth` subcommand.
    pub auth_file: PathBuf,
    /// Directory wiped and repopulated with captured images.
    pub screenshot_dir: PathBuf,
    /// Milliseconds the tool waits for the page to render before capturing.
    ///
    /// 3000 ms covers typical SPA hydration; raise it for dashboards that
    /// stream data in after load.
    pub wait_ms: u64,
    /// Capture tool executable name or path.
    pub tool: String,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            login_file: PathBuf::from("login.yml"),
            shots_file: PathBuf::from("shots.yml"),
            auth_file: PathBuf::from("auth.json"),
            screenshot_dir: PathBuf::from(DEFAULT_SCREENSHOT_DIR),
            wait_ms: 3000,
            tool: "shot-scraper".to_string(),
        }
    }
}

// ── Describe stage ───────────────────────────────────────────────────────

/// Configuration for the description-generation stage.
///
/// Built via [`DescribeConfig::builder()`].
///
/// # Example
/// ```rust
/// use guidegen::DescribeConfig;
///
/// let config = DescribeConfig::builder()
///     .api_key("sk-test")
///     .model("gpt-4o")
///     .max_tokens(500)
///     .build()
///     .unwrap();
/// ```
#[derive(Clone)]
pub struct DescribeConfig {
    /// Base URL of the OpenAI-compatible API. Default:
    /// `https://api.openai.com/v1`. The chat-completions path is appended.
    pub api_base: String,

    /// API key. Resolved from `OPENAI_API_KEY` at build time when unset;
    /// an absent key fails the build — no point scanning screenshots first.
    pub api_key: String,

    /// Vision model identifier. Default: `gpt-4o`.
    pub model: String,

    /// Response token cap per image. Default: 500.
    ///
    /// Longer model outputs are truncated by the API itself; there is no
    /// local truncation logic.
    pub max_tokens: u32,

    /// Custom description prompt. If None, uses
    /// [`crate::prompts::DESCRIPTION_PROMPT`].
    pub prompt: Option<String>,

    /// Directory scanned for screenshots.
    pub screenshot_dir: PathBuf,

    /// Directory wiped and repopulated with chapter Markdown files.
    pub chapters_dir: PathBuf,

    /// Optional per-image progress events (drives the CLI progress bar).
    pub progress_callback: Option<Arc<dyn DescribeProgressCallback>>,
}

impl fmt::Debug for DescribeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DescribeConfig")
            .field("api_base", &self.api_base)
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .field("prompt", &self.prompt.as_deref().map(|_| "<custom>"))
            .field("screenshot_dir", &self.screenshot_dir)
            .field("chapters_dir", &self.chapters_dir)
            .field(
                "progress_callback",
                &self.progress_callback.as_ref().map(|_| "<dyn callback>"),
            )
            .finish()
    }
}

impl DescribeConfig {
    /// Create a new builder for `DescribeConfig`.
    pub fn builder() -> DescribeConfigBuilder {
        DescribeConfigBuilder::default()
    }
}

/// Builder for [`DescribeConfig`].
#[derive(Default)]
pub struct DescribeConfigBuilder {
    api_base: Option<String>,
    api_key: Option<String>,
    model: Option<String>,
    max_tokens: Option<u32>,
    prompt: Option<String>,
    screenshot_dir: Option<PathBuf>,
    chapters_dir: Option<PathBuf>,
    progress_callback: Option<Arc<dyn DescribeProgressCallback>>,
}

impl DescribeConfigBuilder {
    pub fn api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = Some(base.into());
        self
    }

    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn max_tokens(mut self, n: u32) -> Self {
        self.max_tokens = Some(n);
        self
    }

    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    pub fn screenshot_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.screenshot_dir = Some(dir.into());
        self
    }

    pub fn chapters_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.chapters_dir = Some(dir.into());
        self
    }

    pub fn progress_callback(mut self, cb: Arc<dyn DescribeProgressCallback>) -> Self {
        self.progress_callback = Some(cb);
        self
    }

    /// Build the configuration, validating constraints.
    ///
    /// The API key falls back to `OPENAI_API_KEY`; a missing key is
    /// [`GuideError::MissingApiKey`].
    pub fn build(self) -> Result<DescribeConfig, GuideError> {
        let api_key = match self.api_key {
            Some(k) if !k.is_empty() => k,
            _ => std::env::var("OPENAI_API_KEY")
                .ok()
                .filter(|k| !k.is_empty())
                .ok_or(GuideError::MissingApiKey)?,
        };

        let max_tokens = self.max_tokens.unwrap_or(500);
        if max_tokens == 0 {
            return Err(GuideError::InvalidConfig(
                "max_tokens must be ≥ 1".into(),
            ));
        }

        let api_base = self
            .api_base
            .unwrap_or_else(|| "https://api.openai.com/v1".to_string());
        if api_base.trim().is_empty() {
            return Err(GuideError::InvalidConfig("api_base must not be empty".into()));
        }

        Ok(DescribeConfig {
            api_base: api_base.trim_end_matches('/').to_string(),
            api_key,
            model: self.model.unwrap_or_else(|| "gpt-4o".to_string()),
            max_tokens,
            prompt: self.prompt,
            screenshot_dir: self
                .screenshot_dir
                .unwrap_or_else(|| PathBuf::from(DEFAULT_SCREENSHOT_DIR)),
            chapters_dir: self
                .chapters_dir
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CHAPTERS_DIR)),
            progress_callback: self.progress_callback,
        })
    }
}
