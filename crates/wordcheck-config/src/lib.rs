use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::generative::GenerativeConfig;
use self::history::HistoryConfig;
use self::log::LogConfig;

pub mod dictionary;
pub mod generative;
pub mod history;
pub mod log;

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct Config {
    pub dictionary: DictionaryConfig,
    pub generative: GenerativeConfig,
    pub history: HistoryConfig,
    pub log: LogConfig,
}

impl Config {
    /// Defaults with environment overrides applied
    pub fn new() -> Self {
        Config {
            dictionary: DictionaryConfig::new(),
            generative: GenerativeConfig::new(),
            history: HistoryConfig::new(),
            log: LogConfig::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use wordcheck_types::DictionaryVariant;

    use super::*;

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: Config =
            serde_json::from_str(r#"{"dictionary": {"variant": "scrabble-uk"}, "generative": {"enabled": true}}"#)
                .unwrap();

        assert_eq!(config.dictionary.variant, DictionaryVariant::ScrabbleUk);
        assert_eq!(config.dictionary.meanings, "dictionary/meaning.json");
        assert!(config.generative.enabled);
        assert!(!config.generative.has_credential());
        assert_eq!(config.generative.model, "gpt-4");
        assert_eq!(config.generative.max_tokens, 300);
        assert_eq!(config.history.capacity, 50);
    }

    #[test]
    fn test_wordlist_location() {
        let mut dictionary = DictionaryConfig::default();
        assert_eq!(
            dictionary.wordlist_location(DictionaryVariant::ScrabbleUs),
            "dictionary/dictionaryUS.txt"
        );

        dictionary.wordlist_base = "https://example.org/words/".to_string();
        assert_eq!(
            dictionary.wordlist_location(DictionaryVariant::ScrabbleUk),
            "https://example.org/words/dictionaryUK.txt"
        );
    }

    #[test]
    fn test_blank_api_key_is_not_a_credential() {
        let generative = GenerativeConfig {
            api_key: "   ".to_string(),
            ..GenerativeConfig::default()
        };
        assert!(!generative.has_credential());
    }
}
