use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

const DEFAULT_CAPACITY: usize = 50;

/// Recent lookups, most recent first, without case-insensitive duplicates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct History {
    entries: VecDeque<String>,
    capacity: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl History {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    /// Rebuild a saved history, most recent first, keeping at most `capacity` entries
    pub fn from_entries<I, S>(words: I, capacity: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<S> = words.into_iter().collect();
        let mut history = Self::with_capacity(capacity);
        // Oldest first so the newest ends up at the front
        for word in words.iter().rev() {
            history.add(word.as_ref());
        }
        history
    }

    /// Move `word` to the front, dropping any older spelling of it
    pub fn add(&mut self, word: &str) {
        let needle = word.to_lowercase();
        self.entries.retain(|e| e.to_lowercase() != needle);
        self.entries.push_front(word.to_string());
        self.entries.truncate(self.capacity);
    }

    /// Remove exact matches of `word`
    pub fn remove(&mut self, word: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e != word);
        before != self.entries.len()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Change the capacity, dropping the oldest entries that no longer fit
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity.max(1);
        self.entries.truncate(self.capacity);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.entries.iter().cloned().collect()
    }
}

impl From<Vec<String>> for History {
    fn from(words: Vec<String>) -> Self {
        // Keep everything that was saved; callers trim with `set_capacity`
        let capacity = words.len().max(DEFAULT_CAPACITY);
        History::from_entries(words, capacity)
    }
}

impl From<History> for Vec<String> {
    fn from(history: History) -> Self {
        history.entries.into_iter().collect()
    }
}
