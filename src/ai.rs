//! Text-generation client: one prompt in, one completion out.
//!
//! Speaks the chat-completions wire format. Failures propagate as
//! generic errors — there is no structured error contract here, and no
//! retry; the caller gets whatever the single attempt produced.

use serde::{Deserialize, Serialize};

/// Errors from outreach drafting.
#[derive(Debug, thiserror::Error)]
pub enum DraftError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("completion service returned {status}: {message}")]
    Api { status: u16, message: String },
    #[error("completion service returned no text")]
    EmptyCompletion,
    #[error("no draft strategy for stage: {0}")]
    UnsupportedStage(String),
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: [Message<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: String,
}

pub struct CompletionClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl CompletionClient {
    pub fn new(base_url: &str, api_key: &str, model: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
        }
    }

    /// Send one prompt, return the completion text.
    pub async fn complete(&self, prompt: &str) -> Result<String, DraftError> {
        let resp = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&CompletionRequest {
                model: &self.model,
                messages: [Message {
                    role: "user",
                    content: prompt,
                }],
            })
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(DraftError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: CompletionResponse = resp.json().await?;
        let text = body
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(DraftError::EmptyCompletion);
        }
        Ok(text)
    }
}
