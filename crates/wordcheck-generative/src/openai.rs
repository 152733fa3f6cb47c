use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use wordcheck_types::Definition;

use crate::{DefinitionGenerator, GenerateError, ProviderMetadata, parse_definition};

/// Prompt sent for every word. `{word}` is replaced before sending.
const PROMPT: &str = r#"Create a fictional, humorous definition for the word "{word}" in the following JSON format:
{
    "MEANINGS": [
        ["Part of Speech", "Definition", ["Related Words"], []]
    ],
    "ANTONYMS": [],
    "SYNONYMS": []
}
Be creative and entertaining!"#;

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Chat-completions client that invents a definition for a word
#[derive(Clone)]
pub struct OpenAiGenerator {
    client: reqwest::Client,
    api_key: String,
    api_url: String,
    model: String,
    max_tokens: u32,
}

impl OpenAiGenerator {
    pub fn new(api_key: String, api_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            api_url,
            model: "gpt-4".to_string(),
            max_tokens: 300,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>, max_tokens: u32) -> Self {
        self.model = model.into();
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        match reqwest::Client::builder().timeout(timeout).build() {
            Ok(client) => self.client = client,
            Err(e) => tracing::warn!("Keeping default HTTP client, timeout not applied: {}", e),
        }
        self
    }

    fn prompt(word: &str) -> String {
        PROMPT.replace("{word}", word)
    }
}

#[async_trait]
impl DefinitionGenerator for OpenAiGenerator {
    async fn define(&self, word: &str) -> Result<Definition, GenerateError> {
        if self.api_key.is_empty() {
            return Err(GenerateError::AuthenticationError);
        }

        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: Self::prompt(word),
            }],
            max_tokens: self.max_tokens,
        };

        tracing::debug!("Requesting generated definition for '{}' from {}", word, self.model);

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(GenerateError::RateLimitExceeded);
        }

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(GenerateError::AuthenticationError);
        }

        if !status.is_success() {
            return Err(GenerateError::ApiError(format!("HTTP {}", status)));
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| GenerateError::ApiError(format!("Failed to parse response: {}", e)))?;

        let content = body
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message)
            .and_then(|m| m.content)
            .ok_or_else(|| GenerateError::MalformedContent("No message in response".to_string()))?;

        let definition = parse_definition(&content)?;
        tracing::debug!(
            "Generated definition for '{}' with {} meanings",
            word,
            definition.meanings.len()
        );

        Ok(definition)
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "OpenAI".to_string(),
            model: self.model.clone(),
            requires_api_key: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_mentions_word_and_shape() {
        let prompt = OpenAiGenerator::prompt("zyzzyva");
        assert!(prompt.contains("\"zyzzyva\""));
        assert!(prompt.contains("\"MEANINGS\""));
        assert!(!prompt.contains("{word}"));
    }

    #[test]
    fn test_request_body_shape() {
        let request = ChatRequest {
            model: "gpt-4",
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: "hi".to_string(),
            }],
            max_tokens: 300,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "gpt-4");
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["max_tokens"], 300);
    }

    #[tokio::test]
    async fn test_empty_key_fails_without_network() {
        let generator = OpenAiGenerator::new(String::new(), "http://127.0.0.1:9".to_string());
        assert!(matches!(
            generator.define("cat").await,
            Err(GenerateError::AuthenticationError)
        ));
    }

    #[test]
    fn test_metadata_reports_model() {
        let generator = OpenAiGenerator::new("k".into(), "u".into()).with_model("gpt-4o-mini", 200);
        let meta = generator.metadata();
        assert_eq!(meta.model, "gpt-4o-mini");
        assert!(meta.requires_api_key);
    }
}
