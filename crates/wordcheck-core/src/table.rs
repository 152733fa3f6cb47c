use std::collections::HashMap;

use wordcheck_types::Definition;

use crate::error::LoadError;

/// Static meaning table keyed by uppercase word
#[derive(Debug, Clone, Default)]
pub struct DefinitionTable {
    entries: HashMap<String, Definition>,
}

impl DefinitionTable {
    /// Load from a JSON object mapping words to definitions.
    ///
    /// Keys are uppercased on load, so a later duplicate differing only in
    /// case replaces the earlier one.
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        if !value.is_object() {
            return Err(LoadError::InvalidFormat(
                "meaning table must be a JSON object".to_string(),
            ));
        }

        let raw: HashMap<String, Definition> = serde_json::from_value(value)?;
        Ok(raw.into_iter().collect())
    }

    pub fn get(&self, word: &str) -> Option<&Definition> {
        self.entries.get(&word.to_uppercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Definition)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: AsRef<str>> FromIterator<(K, Definition)> for DefinitionTable {
    fn from_iter<T: IntoIterator<Item = (K, Definition)>>(iter: T) -> Self {
        let entries = iter
            .into_iter()
            .map(|(k, v)| (k.as_ref().to_uppercase(), v))
            .collect();
        Self { entries }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_uppercases_keys() {
        let table = DefinitionTable::from_json(
            r#"{"CAT": {"MEANINGS": [["Noun", "a feline", [], []]]}, "dog": {"SYNONYMS": ["hound"]}}"#,
        )
        .unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.get("cat").unwrap().meanings[0].text, "a feline");
        assert_eq!(table.get("Dog").unwrap().synonyms, vec!["hound"]);
        assert!(table.get("emu").is_none());
    }

    #[test]
    fn test_rejects_non_object() {
        assert!(matches!(
            DefinitionTable::from_json("[]"),
            Err(LoadError::InvalidFormat(_))
        ));
        assert!(matches!(
            DefinitionTable::from_json("{not json"),
            Err(LoadError::ParseError(_))
        ));
    }
}
