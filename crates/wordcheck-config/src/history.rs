use std::env;

use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

fn default_path() -> String {
    "history.json".to_string()
}

fn default_capacity() -> usize {
    50
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct HistoryConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// JSON file the search history is kept in between runs
    #[serde(default = "default_path")]
    pub path: String,
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            path: default_path(),
            capacity: default_capacity(),
        }
    }
}

impl HistoryConfig {
    pub fn new() -> Self {
        let path = env::var("WORDCHECK_HISTORY").unwrap_or_else(|_| default_path());

        Self {
            path,
            ..Self::default()
        }
    }
}
