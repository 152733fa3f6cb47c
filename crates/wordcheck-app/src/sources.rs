use std::io::ErrorKind;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use wordcheck_config::Config;
use wordcheck_config::generative::GenerativeConfig;
use wordcheck_core::{DefinitionTable, Generative, Lexicon, LoadError, Session};
use wordcheck_generative::OpenAiGenerator;
use wordcheck_types::DictionaryVariant;

/// Somewhere a word list or meaning table can be read from
#[async_trait]
pub trait TextSource: Send + Sync {
    async fn fetch(&self, location: &str) -> Result<String, LoadError>;
}

pub struct FileSource;

#[async_trait]
impl TextSource for FileSource {
    async fn fetch(&self, location: &str) -> Result<String, LoadError> {
        tokio::fs::read_to_string(location).await.map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                LoadError::FileNotFound(location.to_string())
            } else {
                LoadError::IoError(e)
            }
        })
    }
}

pub struct HttpSource {
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl TextSource for HttpSource {
    async fn fetch(&self, location: &str) -> Result<String, LoadError> {
        let response = self
            .client
            .get(location)
            .send()
            .await
            .map_err(|e| LoadError::Fetch(e.to_string()))?;

        if !response.status().is_success() {
            return Err(LoadError::Fetch(format!(
                "HTTP {} for {}",
                response.status(),
                location
            )));
        }

        response.text().await.map_err(|e| LoadError::Fetch(e.to_string()))
    }
}

pub fn source_for(location: &str) -> Box<dyn TextSource> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Box::new(HttpSource::new())
    } else {
        Box::new(FileSource)
    }
}

pub async fn load_lexicon(config: &Config, variant: DictionaryVariant) -> Result<Lexicon, LoadError> {
    let location = config.dictionary.wordlist_location(variant);
    tracing::info!("Loading {} word list from {}", variant, location);

    let text = source_for(&location).fetch(&location).await?;
    let lexicon = Lexicon::parse(&text);

    tracing::info!("Dictionary loaded successfully. Total words: {}", lexicon.len());
    Ok(lexicon)
}

pub async fn load_table(config: &Config) -> Result<DefinitionTable, LoadError> {
    let location = &config.dictionary.meanings;
    tracing::info!("Loading meaning table from {}", location);

    let json = source_for(location).fetch(location).await?;
    let table = DefinitionTable::from_json(&json)?;

    tracing::info!("Loaded {} definitions", table.len());
    Ok(table)
}

pub fn build_generative(config: &GenerativeConfig) -> Generative {
    if !config.enabled {
        Generative::Disabled
    } else if !config.has_credential() {
        Generative::Unconfigured
    } else {
        let generator = OpenAiGenerator::new(config.api_key.clone(), config.api_url.clone())
            .with_model(config.model.clone(), config.max_tokens)
            .with_timeout(Duration::from_secs(config.timeout_seconds));
        Generative::Enabled(Arc::new(generator))
    }
}

/// Build a session from config. Load failures are logged and leave that
/// part empty; the returned messages are meant for the user.
pub async fn load_session(config: &Config) -> (Session, Vec<String>) {
    let mut warnings = Vec::new();

    let lexicon = load_lexicon(config, config.dictionary.variant)
        .await
        .unwrap_or_else(|e| {
            tracing::warn!("Failed to load word list: {}", e);
            warnings.push("Failed to load dictionary. Some features may not work correctly.".to_string());
            Lexicon::default()
        });

    let table = load_table(config).await.unwrap_or_else(|e| {
        tracing::warn!("Failed to load meaning table: {}", e);
        warnings.push("Failed to load meaning data. Some features may not work correctly.".to_string());
        DefinitionTable::default()
    });

    let session = Session::new(
        config.dictionary.variant,
        lexicon,
        Arc::new(table),
        build_generative(&config.generative),
    );

    (session, warnings)
}
