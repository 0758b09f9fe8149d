//! Prompts for the vision-model description stage.
//!
//! Centralising the prompt here serves two purposes:
//!
//! 1. **Single source of truth** — changing the house style of generated
//!    descriptions requires editing exactly one place.
//!
//! 2. **Testability** — unit tests can inspect the prompt directly without a
//!    live vision model, making prompt regressions easy to catch.
//!
//! Callers can override the default via
//! [`crate::config::DescribeConfig::prompt`]; the constant here is used only
//! when no override is provided.

/// Default instructional prompt sent with every screenshot.
///
/// The per-image filename caption from [`screenshot_caption`] is appended
/// before the request is built.
pub const DESCRIPTION_PROMPT: &str = "\
You are a helpful assistant that documents web applications.
You are given a screenshot of a web application and you need to describe the content of the screenshot.
You need to describe the content of the screenshot, including key elements, text, and overall layout.
Be concise but informative.";

/// Per-image caption appended to the prompt so the model knows which page
/// it is looking at.
pub fn screenshot_caption(image_path: &str) -> String {
    format!("\nScreenshot: {image_path}\n")
}

/// Assemble the full user-message text for one screenshot.
pub fn description_prompt(custom: Option<&str>, image_path: &str) -> String {
    let base = custom.unwrap_or(DESCRIPTION_PROMPT);
    format!("{base}{}", screenshot_caption(image_path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caption_names_the_file() {
        let caption = screenshot_caption("screenshots/home.png");
        assert!(caption.contains("screenshots/home.png"));
    }

    #[test]
    fn default_prompt_used_when_no_override() {
        let p = description_prompt(None, "screenshots/login.png");
        assert!(p.starts_with("You are a helpful assistant"));
        assert!(p.contains("Screenshot: screenshots/login.png"));
    }

    #[test]
    fn custom_prompt_replaces_default() {
        let p = description_prompt(Some("Describe tersely."), "a.png");
        assert!(p.starts_with("Describe tersely."));
        assert!(!p.contains("helpful assistant"));
        assert!(p.contains("Screenshot: a.png"));
    }
}
