use std::sync::Arc;

use wordcheck_generative::DefinitionGenerator;
use wordcheck_types::Definition;

use crate::error::LookupError;
use crate::lexicon::Lexicon;
use crate::related::synthesize;
use crate::table::DefinitionTable;

/// Whether and how to ask a generator when the table has nothing
#[derive(Clone, Default)]
pub enum Generative {
    #[default]
    Disabled,
    /// Turned on but no API key configured
    Unconfigured,
    Enabled(Arc<dyn DefinitionGenerator>),
}

impl Generative {
    pub fn is_enabled(&self) -> bool {
        !matches!(self, Generative::Disabled)
    }
}

impl std::fmt::Debug for Generative {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Generative::Disabled => f.write_str("Disabled"),
            Generative::Unconfigured => f.write_str("Unconfigured"),
            Generative::Enabled(g) => write!(f, "Enabled({})", g.metadata().name),
        }
    }
}

/// Resolve a confirmed word to a definition.
///
/// Order: lexicon membership, meaning table, cross-reference synthesis, then
/// the generator if one is enabled. With the generator disabled an empty
/// synthetic definition is returned as-is; with it enabled but unconfigured
/// the result is [`LookupError::CredentialMissing`].
pub async fn resolve(
    word: &str,
    lexicon: &Lexicon,
    table: &DefinitionTable,
    generative: &Generative,
) -> Result<Definition, LookupError> {
    if !lexicon.contains(word) {
        tracing::debug!("'{}' is not in the lexicon", word);
        return Err(LookupError::NotFound(word.to_string()));
    }

    if let Some(definition) = table.get(word).filter(|d| !d.is_empty()) {
        tracing::debug!("'{}' found in meaning table", word);
        return Ok(definition.clone());
    }

    let synthetic = synthesize(word, lexicon, table);
    if !synthetic.is_empty() {
        return Ok(synthetic);
    }

    match generative {
        Generative::Disabled => Ok(synthetic),
        Generative::Unconfigured => {
            tracing::warn!("Generative fallback enabled without an API key");
            Err(LookupError::CredentialMissing)
        }
        Generative::Enabled(generator) => {
            tracing::info!(
                "No definition for '{}', asking {}",
                word,
                generator.metadata().name
            );
            generator.define(word).await.map_err(|e| {
                tracing::warn!("Generative fallback failed for '{}': {}", word, e);
                LookupError::ExternalService(e)
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use wordcheck_generative::{GenerateError, ProviderMetadata};
    use wordcheck_types::Meaning;

    use super::*;

    struct FakeGenerator {
        calls: AtomicUsize,
        fail: bool,
    }

    impl FakeGenerator {
        fn new(fail: bool) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                fail,
            })
        }
    }

    #[async_trait::async_trait]
    impl DefinitionGenerator for FakeGenerator {
        async fn define(&self, word: &str) -> Result<Definition, GenerateError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(GenerateError::RateLimitExceeded);
            }
            Ok(Definition {
                meanings: vec![Meaning::new("Noun", format!("a made-up {word}"))],
                ..Definition::default()
            })
        }

        fn metadata(&self) -> ProviderMetadata {
            ProviderMetadata {
                name: "fake".to_string(),
                model: "fake-1".to_string(),
                requires_api_key: false,
            }
        }
    }

    fn fixtures() -> (Lexicon, DefinitionTable) {
        let lexicon = Lexicon::from_words(["cat", "cot", "dog"]);
        let table =
            DefinitionTable::from_json(r#"{"CAT": {"MEANINGS": [["noun", "a feline", [], []]]}}"#)
                .unwrap();
        (lexicon, table)
    }

    #[tokio::test]
    async fn test_table_hit() {
        let (lexicon, table) = fixtures();
        let def = resolve("cat", &lexicon, &table, &Generative::Disabled)
            .await
            .unwrap();
        assert_eq!(def.meanings[0].text, "a feline");
    }

    #[tokio::test]
    async fn test_not_a_word_skips_fallbacks() {
        let (lexicon, table) = fixtures();
        let generator = FakeGenerator::new(false);
        let result = resolve("fox", &lexicon, &table, &Generative::Enabled(generator.clone())).await;

        assert!(matches!(result, Err(LookupError::NotFound(w)) if w == "fox"));
        assert_eq!(generator.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_empty_synthesis_without_generator() {
        let (lexicon, table) = fixtures();
        let def = resolve("cot", &lexicon, &table, &Generative::Disabled)
            .await
            .unwrap();
        assert!(def.is_empty());
    }

    #[tokio::test]
    async fn test_synthesis_before_generator() {
        let lexicon = Lexicon::from_words(["cat", "kitten"]);
        let table = DefinitionTable::from_json(r#"{"KITTEN": {"SYNONYMS": ["cat"]}, "CAT": {}}"#)
            .unwrap();
        let generator = FakeGenerator::new(false);

        let def = resolve("cat", &lexicon, &table, &Generative::Enabled(generator.clone()))
            .await
            .unwrap();
        assert_eq!(def.synonyms, vec!["KITTEN"]);
        assert_eq!(generator.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_generator_used_last() {
        let (lexicon, table) = fixtures();
        let generator = FakeGenerator::new(false);

        let def = resolve("dog", &lexicon, &table, &Generative::Enabled(generator.clone()))
            .await
            .unwrap();
        assert_eq!(def.meanings[0].text, "a made-up dog");
        assert_eq!(generator.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_missing_credential() {
        let (lexicon, table) = fixtures();
        let result = resolve("dog", &lexicon, &table, &Generative::Unconfigured).await;
        assert!(matches!(result, Err(LookupError::CredentialMissing)));
    }

    #[tokio::test]
    async fn test_generator_failure_is_external_error() {
        let (lexicon, table) = fixtures();
        let result = resolve("dog", &lexicon, &table, &Generative::Enabled(FakeGenerator::new(true))).await;
        assert!(matches!(
            result,
            Err(LookupError::ExternalService(GenerateError::RateLimitExceeded))
        ));
    }

    #[tokio::test]
    async fn test_resolve_is_idempotent() {
        let (lexicon, table) = fixtures();
        let first = resolve("cat", &lexicon, &table, &Generative::Disabled).await.unwrap();
        let second = resolve("cat", &lexicon, &table, &Generative::Disabled).await.unwrap();
        assert_eq!(first, second);
    }
}
