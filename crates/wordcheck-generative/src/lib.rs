use wordcheck_types::Definition;

pub mod openai;

pub use openai::OpenAiGenerator;

/// Produces a definition for a word the dictionary has nothing on
#[async_trait::async_trait]
pub trait DefinitionGenerator: Send + Sync {
    /// Generate a definition in the meaning table's shape
    async fn define(&self, word: &str) -> Result<Definition, GenerateError>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
    pub model: String,
    pub requires_api_key: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Malformed content: {0}")]
    MalformedContent(String),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Authentication error")]
    AuthenticationError,
}

/// Parse model output into a [`Definition`].
///
/// Chat models like to wrap JSON in a Markdown fence, so one is stripped
/// if present. Missing fields read as empty; anything that is not a JSON
/// object is rejected.
pub fn parse_definition(content: &str) -> Result<Definition, GenerateError> {
    let body = strip_code_fence(content.trim());

    let value: serde_json::Value = serde_json::from_str(body)
        .map_err(|e| GenerateError::MalformedContent(format!("not JSON: {e}")))?;

    if !value.is_object() {
        return Err(GenerateError::MalformedContent(
            "expected a JSON object".to_string(),
        ));
    }

    serde_json::from_value(value)
        .map_err(|e| GenerateError::MalformedContent(format!("unexpected shape: {e}")))
}

fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    // Drop the info string (e.g. "json") up to the first newline
    let rest = rest.split_once('\n').map_or("", |(_, body)| body);
    rest.trim_end().strip_suffix("```").unwrap_or(rest).trim()
}
