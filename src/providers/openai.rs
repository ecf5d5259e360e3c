use log::{error, info};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::ProviderError;

/// Token budget for every completion request. Fixed rather than configurable.
const COMPLETION_MAX_TOKENS: u32 = 150;

const COMPLETION_MODEL: &str = "gpt-3.5-turbo-instruct";

#[derive(Serialize)]
struct CompletionRequest {
    model: String,
    prompt: String,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct CompletionChoice {
    text: String,
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
}

#[derive(Clone)]
pub struct OpenAiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl OpenAiClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: "https://api.openai.com/v1".to_string(),
        }
    }

    /// Sends a completion-style request and returns the first choice's text.
    pub async fn complete(&self, prompt: &str) -> Result<String, ProviderError> {
        let request = CompletionRequest {
            model: COMPLETION_MODEL.to_string(),
            prompt: prompt.to_string(),
            max_tokens: COMPLETION_MAX_TOKENS,
        };

        info!("Sending completion request to OpenAI ({})", COMPLETION_MODEL);

        let response = self
            .client
            .post(format!("{}/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!("OpenAI API error: {}", error_text);
            return Err(ProviderError::Api {
                provider: "OpenAI",
                message: error_text,
            });
        }

        let completion: CompletionResponse = response.json().await?;

        match completion.choices.first() {
            Some(choice) => Ok(choice.text.clone()),
            None => Err(ProviderError::EmptyResponse("OpenAI")),
        }
    }
}
