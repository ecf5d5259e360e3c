use log::{error, info};
use reqwest::Client;
use serde::Deserialize;

use crate::error::ProviderError;

const GEMINI_MODEL: &str = "gemini-pro";

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ContentPart>,
}

#[derive(Deserialize)]
struct ContentPart {
    #[serde(default)]
    text: String,
}

/// Client for the Google generative-language API. Both the "Gemini" and
/// "Groq" form labels end up here (see providers::Backend).
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
        }
    }

    /// Sends the prompt to the generative-language endpoint and returns the
    /// first candidate's content text.
    pub async fn generate_content(&self, prompt: &str) -> Result<String, ProviderError> {
        let request_body = serde_json::json!({
            "contents": [
                {
                    "parts": [
                        { "text": prompt }
                    ]
                }
            ]
        });

        info!("Sending generateContent request to Gemini ({})", GEMINI_MODEL);

        let response = self
            .client
            .post(format!(
                "{}/models/{}:generateContent",
                self.base_url, GEMINI_MODEL
            ))
            .query(&[("key", self.api_key.as_str())])
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!("Gemini API error: {}", error_text);
            return Err(ProviderError::Api {
                provider: "Gemini",
                message: error_text,
            });
        }

        let reply: GenerateContentResponse = response.json().await?;

        let content = reply
            .candidates
            .first()
            .map(|candidate| {
                candidate
                    .content
                    .parts
                    .iter()
                    .map(|part| part.text.as_str())
                    .collect::<String>()
            })
            .unwrap_or_default();

        if content.is_empty() {
            return Err(ProviderError::EmptyResponse("Gemini"));
        }

        Ok(content)
    }
}
