use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::definition::LookupResult;

#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Raw user query, possibly a `?` pattern
    Search {
        seq: u64,
        query: String,
    },
    /// A confirmed word: a picked suggestion, a related-word chip or a history entry
    Lookup {
        seq: u64,
        word: String,
    },
    SwitchVariant(DictionaryVariant),
    ShowHistory,
    ClearHistory,
    RemoveFromHistory(String),
    ShowResult {
        seq: u64,
        result: DisplayResult,
    },
    ShowSuggestions {
        seq: u64,
        words: Vec<String>,
    },
    ShowHistoryList(Vec<String>),
    Toast(String),
    BackendReady,
    Shutdown,
}

impl AppEvent {
    /// Lookup sequence number carried by request and response events
    pub fn seq(&self) -> Option<u64> {
        match self {
            AppEvent::Search { seq, .. }
            | AppEvent::Lookup { seq, .. }
            | AppEvent::ShowResult { seq, .. }
            | AppEvent::ShowSuggestions { seq, .. } => Some(*seq),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayResult {
    pub word: String,
    /// Letter score, present whenever the word is in the dictionary
    pub score: Option<u32>,
    pub result: LookupResult,
}

/// Word list to validate against
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DictionaryVariant {
    #[default]
    #[serde(rename = "scrabble-us")]
    ScrabbleUs,
    #[serde(rename = "scrabble-uk")]
    ScrabbleUk,
}

impl DictionaryVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            DictionaryVariant::ScrabbleUs => "scrabble-us",
            DictionaryVariant::ScrabbleUk => "scrabble-uk",
        }
    }

    /// File name of the newline-separated word list for this variant
    pub fn file_name(&self) -> &'static str {
        match self {
            DictionaryVariant::ScrabbleUs => "dictionaryUS.txt",
            DictionaryVariant::ScrabbleUk => "dictionaryUK.txt",
        }
    }
}

impl fmt::Display for DictionaryVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DictionaryVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "scrabble-us" | "us" => Ok(DictionaryVariant::ScrabbleUs),
            "scrabble-uk" | "uk" => Ok(DictionaryVariant::ScrabbleUk),
            other => Err(format!("unknown dictionary variant: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_parsing() {
        assert_eq!("uk".parse::<DictionaryVariant>(), Ok(DictionaryVariant::ScrabbleUk));
        assert_eq!(
            "Scrabble-US".parse::<DictionaryVariant>(),
            Ok(DictionaryVariant::ScrabbleUs)
        );
        assert!("fr".parse::<DictionaryVariant>().is_err());
    }

    #[test]
    fn test_variant_serde_names() {
        let json = serde_json::to_string(&DictionaryVariant::ScrabbleUk).unwrap();
        assert_eq!(json, "\"scrabble-uk\"");
        assert_eq!(DictionaryVariant::ScrabbleUk.file_name(), "dictionaryUK.txt");
    }

    #[test]
    fn test_event_seq() {
        let event = AppEvent::Search {
            seq: 7,
            query: "c?t".into(),
        };
        assert_eq!(event.seq(), Some(7));
        assert_eq!(AppEvent::ShowHistory.seq(), None);
    }
}
