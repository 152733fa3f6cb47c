use std::env;

use serde::{Deserialize, Serialize};
use wordcheck_types::DictionaryVariant;

fn default_wordlist_base() -> String {
    "dictionary".to_string()
}

fn default_meanings() -> String {
    "dictionary/meaning.json".to_string()
}

/// Where the word lists and the meaning table come from.
///
/// Both locations may be a local path or an `http(s)://` URL.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct DictionaryConfig {
    pub variant: DictionaryVariant,
    /// Directory or URL prefix holding `dictionaryUS.txt` and `dictionaryUK.txt`
    #[serde(default = "default_wordlist_base")]
    pub wordlist_base: String,
    /// Path or URL of the meaning table JSON
    #[serde(default = "default_meanings")]
    pub meanings: String,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            variant: DictionaryVariant::default(),
            wordlist_base: default_wordlist_base(),
            meanings: default_meanings(),
        }
    }
}

impl DictionaryConfig {
    pub fn new() -> Self {
        let defaults = Self::default();

        let variant = env::var("WORDCHECK_VARIANT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.variant);

        let wordlist_base = env::var("WORDCHECK_WORDLIST_DIR").unwrap_or(defaults.wordlist_base);
        let meanings = env::var("WORDCHECK_MEANINGS").unwrap_or(defaults.meanings);

        Self {
            variant,
            wordlist_base,
            meanings,
        }
    }

    /// Location of the word list for `variant`
    pub fn wordlist_location(&self, variant: DictionaryVariant) -> String {
        let base = self.wordlist_base.trim_end_matches('/');
        if base.is_empty() {
            variant.file_name().to_string()
        } else {
            format!("{}/{}", base, variant.file_name())
        }
    }
}
