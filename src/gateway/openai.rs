use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::Settings;
use crate::gateway::client::{GenerationBackend, GenerationTask};

const DEFAULT_OPENAI_ENDPOINT: &str = "https://api.openai.com/v1";
const DEFAULT_OPENAI_MODEL: &str = "gpt-4o";

pub struct OpenAiClient {
    http: Client,
    model: String,
    endpoint: String,
}

impl OpenAiClient {
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let model = if settings.llm.model.trim().is_empty() {
            DEFAULT_OPENAI_MODEL.to_string()
        } else {
            settings.llm.model.trim().to_string()
        };

        let endpoint = if settings.llm.endpoint.trim().is_empty() {
            DEFAULT_OPENAI_ENDPOINT.to_string()
        } else {
            settings
                .llm
                .endpoint
                .trim()
                .trim_end_matches('/')
                .to_string()
        };

        Ok(Self {
            http: Client::builder()
                .timeout(std::time::Duration::from_secs(45))
                .build()
                .context("Failed to build OpenAI HTTP client")?,
            model,
            endpoint,
        })
    }

    fn request_url(&self) -> String {
        format!("{}/chat/completions", self.endpoint)
    }
}

#[async_trait]
impl GenerationBackend for OpenAiClient {
    async fn generate(&self, credential: &str, task: GenerationTask<'_>) -> Result<String> {
        let body = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: task.system.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: task.prompt.to_string(),
                },
            ],
        };

        let response = self
            .http
            .post(self.request_url())
            .bearer_auth(credential)
            .json(&body)
            .send()
            .await
            .context("OpenAI request failed")?;

        let response = response
            .error_for_status()
            .context("OpenAI returned an error status")?;

        let payload: ChatCompletionResponse = response
            .json()
            .await
            .context("Failed to parse OpenAI response")?;

        let text = payload
            .choices
            .iter()
            .filter_map(|c| c.message.content.as_deref())
            .map(str::trim)
            .find(|t| !t.is_empty())
            .map(str::to_string)
            .context("OpenAI response did not contain any text")?;

        Ok(text)
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessageResponse,
}

#[derive(Debug, Deserialize)]
struct ChatMessageResponse {
    content: Option<String>,
}
