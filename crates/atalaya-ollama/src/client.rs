//! Ollama API client implementation.

use crate::{Result, error::OllamaError, prompts};
use async_trait::async_trait;
use atalaya_traits::{Narrative, PromptContext};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;
use tracing::warn;

/// Default Ollama host when `OLLAMA_HOST` is unset.
const DEFAULT_HOST: &str = "http://localhost:11434";

/// Default model when `MODEL_NAME` is unset.
const DEFAULT_MODEL: &str = "llama3";

/// Low temperature keeps the narrative text factual and repeatable.
const TEMPERATURE: f64 = 0.2;

/// Token cap per narrative slot.
const NUM_PREDICT: u32 = 256;

/// Generation budget plus transport buffer.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

/// Ollama narrative client.
#[derive(Debug, Clone)]
pub struct OllamaClient {
    client: Client,
    host: String,
    model: String,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    options: GenerateOptions,
}

#[derive(Serialize)]
struct GenerateOptions {
    temperature: f64,
    num_predict: u32,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: String,
}

impl OllamaClient {
    /// Create a new Ollama client for the given host and model.
    #[must_use]
    pub fn new(host: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            host: host.into(),
            model: model.into(),
        }
    }

    /// Create a client from `OLLAMA_HOST` and `MODEL_NAME`, falling back
    /// to `http://localhost:11434` and `llama3`.
    ///
    /// This will also load from a `.env` file if present.
    #[must_use]
    pub fn from_env() -> Self {
        // Try to load .env file (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = env::var("OLLAMA_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let model = env::var("MODEL_NAME").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        Self::new(host, model)
    }

    /// The model this client generates with.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Run a prompt through `/api/generate` and return the trimmed
    /// completion.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or Ollama reports a
    /// non-success status.
    pub async fn complete(&self, prompt: &str) -> Result<String> {
        let url = format!("{}/api/generate", self.host);
        let body = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
            options: GenerateOptions {
                temperature: TEMPERATURE,
                num_predict: NUM_PREDICT,
            },
        };

        let response = self
            .client
            .post(&url)
            .timeout(REQUEST_TIMEOUT)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(OllamaError::Api(format!("HTTP {status}: {text}")));
        }

        let data: GenerateResponse = response.json().await?;
        Ok(data.response.trim().to_string())
    }
}

#[async_trait]
impl Narrative for OllamaClient {
    async fn generate(&self, context: &PromptContext) -> String {
        let prompt = prompts::render(context);
        match self.complete(&prompt).await {
            Ok(text) => text,
            Err(err) => {
                warn!(kind = ?context.kind, %err, "narrative generation failed");
                String::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let body = GenerateRequest {
            model: "llama3",
            prompt: "hello",
            stream: false,
            options: GenerateOptions {
                temperature: TEMPERATURE,
                num_predict: NUM_PREDICT,
            },
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["model"], "llama3");
        assert_eq!(json["stream"], false);
        assert_eq!(json["options"]["temperature"], 0.2);
        assert_eq!(json["options"]["num_predict"], 256);
    }

    #[test]
    fn test_response_defaults_to_empty() {
        let data: GenerateResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(data.response, "");
    }

    #[test]
    fn test_new_stores_host_and_model() {
        let client = OllamaClient::new("http://localhost:11434", "llama3");
        assert_eq!(client.model(), "llama3");
    }
}
