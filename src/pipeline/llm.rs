//! VLM interaction: build the vision request and call the endpoint.
//!
//! This module turns one screenshot into one OpenAI-compatible
//! chat-completions call and returns the model's text. It is intentionally
//! thin — prompt text lives in [`crate::prompts`] and the degrade-on-error
//! policy lives in [`crate::pipeline::describe`], so this module only knows
//! how to shape a request and unpack a response.
//!
//! There is deliberately no retry, no backoff, and no request timeout beyond
//! the HTTP client's defaults: a failed call degrades to an error-string
//! description upstream and the run moves on to the next image.

use crate::config::DescribeConfig;
use crate::error::GuideError;
use serde::{Deserialize, Serialize};
use tracing::debug;

// ── Request body ─────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: Vec<ContentPart<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
enum ContentPart<'a> {
    #[serde(rename = "text")]
    Text { text: String },
    #[serde(rename = "image_url")]
    ImageUrl { image_url: ImageUrl<'a> },
}

#[derive(Debug, Serialize)]
struct ImageUrl<'a> {
    url: &'a str,
}

// ── Response body ────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

/// Describe one screenshot via the vision model.
///
/// ## Message Layout
///
/// A single user message with two content parts, in order:
/// 1. **Text** — the fixed instructional prompt plus a caption naming the
///    screenshot file, so the model knows which page it is looking at
/// 2. **Image** — the screenshot as a base64 `data:` URL
///
/// ## Errors
///
/// Any failure — connection, non-2xx status, body that does not decode, or a
/// response with no choices — is returned as [`GuideError::Internal`] with
/// enough text for the caller to embed in the degraded description.
pub async fn describe_image(
    client: &reqwest::Client,
    config: &DescribeConfig,
    prompt_text: String,
    data_url: &str,
) -> Result<String, GuideError> {
    let request = ChatRequest {
        model: &config.model,
        messages: vec![ChatMessage {
            role: "user",
            content: vec![
                ContentPart::Text { text: prompt_text },
                ContentPart::ImageUrl {
                    image_url: ImageUrl { url: data_url },
                },
            ],
        }],
        max_tokens: config.max_tokens,
    };

    let url = format!("{}/chat/completions", config.api_base);
    debug!("POST {} (model {})", url, config.model);

    let response = client
        .post(&url)
        .bearer_auth(&config.api_key)
        .json(&request)
        .send()
        .await
        .map_err(|e| GuideError::Internal(format!("request failed: {e}")))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(GuideError::Internal(format!(
            "API returned {status}: {}",
            body.chars().take(200).collect::<String>()
        )));
    }

    let parsed: ChatResponse = response
        .json()
        .await
        .map_err(|e| GuideError::Internal(format!("invalid response body: {e}")))?;

    parsed
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .ok_or_else(|| GuideError::Internal("response contained no completion".into()))
}
