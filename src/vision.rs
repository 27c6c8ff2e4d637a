use axum::async_trait;
use serde::Deserialize;
use serde_json::json;

use crate::error::{AppError, Result};

/// One request to the external vision-capable chat model: a system prompt,
/// a user instruction, and the image as a data URI.
#[derive(Debug, Clone, Copy)]
pub struct VisionPrompt<'a> {
    pub system: &'a str,
    pub instruction: &'a str,
    pub image_url: &'a str,
    pub max_tokens: u32,
}

#[async_trait]
pub trait VisionModel: Send + Sync {
    async fn complete(&self, prompt: VisionPrompt<'_>) -> Result<String>;
}

/// OpenAI-compatible chat-completions client.
#[derive(Clone)]
pub struct OpenAiVision {
    http: reqwest::Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl OpenAiVision {
    pub fn new(http: reqwest::Client, base_url: &str, model: &str, api_key: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            api_key: api_key.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ChatCompletion {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

#[async_trait]
impl VisionModel for OpenAiVision {
    async fn complete(&self, prompt: VisionPrompt<'_>) -> Result<String> {
        let body = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": prompt.system },
                {
                    "role": "user",
                    "content": [
                        { "type": "text", "text": prompt.instruction },
                        { "type": "image_url", "image_url": { "url": prompt.image_url } }
                    ]
                }
            ],
            "max_tokens": prompt.max_tokens,
            "temperature": 0.3
        });

        let response = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            tracing::error!(status = %status, detail = %detail, "vision API returned an error");
            return Err(AppError::Upstream(status.as_u16()));
        }

        let completion: ChatCompletion = response.json().await?;
        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(AppError::EmptyCompletion)
    }
}
