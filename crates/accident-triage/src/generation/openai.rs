//! OpenAI-compatible chat-completions backend.
//!
//! Works against OpenAI itself or any endpoint speaking the same API
//! (Ollama, vLLM, LM Studio) via `TRIAGE_GENERATOR_BASE_URL`.

use super::{GenerationError, TextGenerator};
use crate::config::GeneratorConfig;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

pub struct OpenAiTextGenerator {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
    temperature: f32,
}

impl OpenAiTextGenerator {
    pub fn new(config: &GeneratorConfig, api_key: String) -> Result<Self, GenerationError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key,
            model: config.model.clone(),
            temperature: config.temperature,
        })
    }

    /// `None` when the configuration carries no API key.
    pub fn from_config(config: &GeneratorConfig) -> Result<Option<Self>, GenerationError> {
        match &config.api_key {
            Some(key) => Ok(Some(Self::new(config, key.clone())?)),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl TextGenerator for OpenAiTextGenerator {
    async fn generate(&self, system: &str, user: &str) -> Result<String, GenerationError> {
        let body = json!({
            "model": self.model,
            "messages": [
                {"role": "system", "content": system},
                {"role": "user", "content": user}
            ],
            "temperature": self.temperature,
        });

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::Backend { status, body });
        }

        #[derive(Deserialize)]
        struct Message {
            content: String,
        }
        #[derive(Deserialize)]
        struct Choice {
            message: Message,
        }
        #[derive(Deserialize)]
        struct ChatResponse {
            choices: Vec<Choice>,
        }

        let parsed: ChatResponse = response.json().await?;
        let text = parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(GenerationError::EmptyResponse)?;

        debug!(model = %self.model, chars = text.len(), "generation completed");
        Ok(text)
    }
}
