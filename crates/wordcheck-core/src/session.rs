use std::sync::Arc;

use wordcheck_types::{DictionaryVariant, DisplayResult, LookupResult};

use crate::error::LookupError;
use crate::lexicon::Lexicon;
use crate::matcher::find_matches;
use crate::preprocess::normalize_query;
use crate::related::filter_related;
use crate::resolver::{Generative, resolve};
use crate::score::score;
use crate::table::DefinitionTable;

/// Result of a user search
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The query was rejected before any lookup
    Invalid(String),
    /// Several words fit the pattern; ask the user which one
    Ambiguous(Vec<String>),
    /// A single word was looked up
    Resolved(DisplayResult),
}

/// Everything a lookup needs, loaded once and read-only afterwards.
///
/// Switching dictionary variant builds a new session with [`Session::with_lexicon`];
/// the meaning table and generator are shared with the old one.
#[derive(Debug, Clone)]
pub struct Session {
    variant: DictionaryVariant,
    lexicon: Arc<Lexicon>,
    table: Arc<DefinitionTable>,
    generative: Generative,
}

impl Session {
    pub fn new(
        variant: DictionaryVariant,
        lexicon: Lexicon,
        table: Arc<DefinitionTable>,
        generative: Generative,
    ) -> Self {
        tracing::info!(
            "Session ready: {} ({} words, {} definitions, generative {:?})",
            variant,
            lexicon.len(),
            table.len(),
            generative
        );
        Self {
            variant,
            lexicon: Arc::new(lexicon),
            table,
            generative,
        }
    }

    pub fn with_lexicon(&self, variant: DictionaryVariant, lexicon: Lexicon) -> Self {
        Self::new(variant, lexicon, self.table.clone(), self.generative.clone())
    }

    pub fn variant(&self) -> DictionaryVariant {
        self.variant
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn table(&self) -> &DefinitionTable {
        &self.table
    }

    /// Handle a raw query: validate, expand wildcards, and look up when exactly
    /// one word is meant. A query matching nothing is looked up as typed.
    pub async fn search(&self, raw: &str) -> SearchOutcome {
        let query = match normalize_query(raw) {
            Ok(q) => q,
            Err(e) => return SearchOutcome::Invalid(e.to_string()),
        };

        let mut matches = find_matches(&query, &self.lexicon);
        match matches.len() {
            0 => {
                tracing::debug!("No matches for '{}', looking up as typed", query);
                SearchOutcome::Resolved(self.lookup(&query).await)
            }
            1 => {
                let word = matches.remove(0);
                SearchOutcome::Resolved(self.lookup(&word).await)
            }
            n => {
                tracing::debug!("'{}' is ambiguous: {} candidates", query, n);
                SearchOutcome::Ambiguous(matches)
            }
        }
    }

    /// Look up a confirmed word and prepare it for display
    pub async fn lookup(&self, word: &str) -> DisplayResult {
        tracing::info!("Looking up '{}'", word);

        let resolved = resolve(word, &self.lexicon, &self.table, &self.generative)
            .await
            .and_then(|def| {
                if def.is_empty() {
                    Err(LookupError::DefinitionUnavailable(word.to_string()))
                } else {
                    Ok(filter_related(&def, word, &self.lexicon))
                }
            });

        // A real word is worth its points even without a definition
        let score = self.lexicon.contains(word).then(|| score(word));

        let result = match resolved {
            Ok(definition) => LookupResult::Found { definition },
            Err(e) => {
                tracing::debug!("Lookup of '{}' failed: {}", word, e);
                e.into()
            }
        };

        DisplayResult {
            word: word.to_string(),
            score,
            result,
        }
    }
}

#[cfg(test)]
mod tests {
    use wordcheck_types::ErrorKind;

    use super::*;

    fn session() -> Session {
        let lexicon = Lexicon::from_words(["cat", "cot", "dog", "kitten"]);
        let table = DefinitionTable::from_json(
            r#"{
                "CAT": {"MEANINGS": [["noun", "a feline", ["kitten", "cat", "moggy"], []]]},
                "KITTEN": {"MEANINGS": [["noun", "a young cat", ["cat"], []]]}
            }"#,
        )
        .unwrap();
        Session::new(
            DictionaryVariant::ScrabbleUs,
            lexicon,
            Arc::new(table),
            Generative::Disabled,
        )
    }

    fn error_kind(result: &DisplayResult) -> Option<ErrorKind> {
        match &result.result {
            LookupResult::Error { kind, .. } => Some(*kind),
            LookupResult::Found { .. } => None,
        }
    }

    #[tokio::test]
    async fn test_exact_search_resolves_with_score() {
        let SearchOutcome::Resolved(result) = session().search("  CAT ").await else {
            panic!("expected a resolved lookup");
        };
        assert_eq!(result.word, "cat");
        assert_eq!(result.score, Some(5));

        let def = result.result.definition().unwrap();
        assert_eq!(def.meanings[0].related, vec!["kitten"]);
    }

    #[tokio::test]
    async fn test_wildcard_ambiguity() {
        assert_eq!(
            session().search("c?t").await,
            SearchOutcome::Ambiguous(vec!["cat".into(), "cot".into()])
        );
    }

    #[tokio::test]
    async fn test_single_wildcard_match_resolves() {
        let SearchOutcome::Resolved(result) = session().search("d?g").await else {
            panic!("expected a resolved lookup");
        };
        assert_eq!(result.word, "dog");
        assert_eq!(error_kind(&result), Some(ErrorKind::DefinitionUnavailable));
        assert_eq!(result.score, Some(5));
    }

    #[tokio::test]
    async fn test_no_match_looks_up_raw_query() {
        let SearchOutcome::Resolved(result) = session().search("f?x").await else {
            panic!("expected a resolved lookup");
        };
        assert_eq!(result.word, "f?x");
        assert_eq!(error_kind(&result), Some(ErrorKind::NotFound));
        assert_eq!(result.score, None);

        let SearchOutcome::Resolved(result) = session().search("fox").await else {
            panic!("expected a resolved lookup");
        };
        assert_eq!(error_kind(&result), Some(ErrorKind::NotFound));
    }

    #[tokio::test]
    async fn test_invalid_query() {
        assert!(matches!(session().search("ice cream").await, SearchOutcome::Invalid(_)));
        assert!(matches!(
            session().search("abcdefghijklmnop").await,
            SearchOutcome::Invalid(_)
        ));
    }

    #[tokio::test]
    async fn test_synthetic_lookup_filters_self() {
        // "cot" is only in the lexicon; nothing refers to it
        let result = session().lookup("cot").await;
        assert_eq!(error_kind(&result), Some(ErrorKind::DefinitionUnavailable));

        let lexicon = Lexicon::from_words(["cat", "kitten", "moggy"]);
        let table = DefinitionTable::from_json(
            r#"{"KITTEN": {"SYNONYMS": ["moggy"]}, "CAT": {"SYNONYMS": ["moggy"]}}"#,
        )
        .unwrap();
        let session = Session::new(
            DictionaryVariant::ScrabbleUk,
            lexicon,
            Arc::new(table),
            Generative::Disabled,
        );
        let result = session.lookup("moggy").await;
        let def = result.result.definition().unwrap();
        assert_eq!(def.synonyms, vec!["cat", "kitten"]);
    }

    #[tokio::test]
    async fn test_real_word_keeps_score_without_definition() {
        for (generative, kind) in [
            (Generative::Disabled, ErrorKind::DefinitionUnavailable),
            (Generative::Unconfigured, ErrorKind::CredentialMissing),
        ] {
            let session = Session::new(
                DictionaryVariant::ScrabbleUs,
                Lexicon::from_words(["dog"]),
                Arc::new(DefinitionTable::default()),
                generative,
            );
            let result = session.lookup("dog").await;
            assert_eq!(error_kind(&result), Some(kind));
            assert_eq!(result.score, Some(5));
        }
    }

    #[tokio::test]
    async fn test_related_chips_are_unique_and_sorted() {
        let lexicon = Lexicon::from_words(["cat", "kitten", "tom", "moggy"]);
        let table = DefinitionTable::from_json(
            r#"{"CAT": {
                "MEANINGS": [["noun", "a feline", ["tom", "Kitten"], []], ["verb", "to hoist", ["kitten"], []]],
                "SYNONYMS": ["tom", "TOM", "moggy"]
            }}"#,
        )
        .unwrap();
        let session = Session::new(
            DictionaryVariant::ScrabbleUs,
            lexicon,
            Arc::new(table),
            Generative::Disabled,
        );
        let result = session.lookup("cat").await;
        let def = result.result.definition().unwrap();

        assert_eq!(def.meanings[0].related, vec!["kitten", "tom"]);
        assert_eq!(def.meanings[1].related, vec!["kitten"]);
        assert_eq!(def.synonyms, vec!["moggy", "tom"]);
    }

    #[tokio::test]
    async fn test_with_lexicon_builds_new_session() {
        let original = session();
        let switched = original.with_lexicon(DictionaryVariant::ScrabbleUk, Lexicon::from_words(["fox"]));

        assert_eq!(switched.variant(), DictionaryVariant::ScrabbleUk);
        assert!(switched.lexicon().contains("fox"));
        assert!(!original.lexicon().contains("fox"));
        assert_eq!(switched.table().len(), original.table().len());
    }
}
