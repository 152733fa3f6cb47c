use unicode_normalization::UnicodeNormalization;

use crate::error::LookupError;

/// Longest accepted query, in characters
pub const MAX_QUERY_LEN: usize = 15;

/// Single-character wildcard
pub const WILDCARD: char = '?';

pub trait Preprocessor {
    fn process(&self, text: &str) -> String {
        let text = text.trim();

        if text.is_empty() {
            return String::new();
        }

        // NFKC folds full-width letters and ligatures into plain ones. It also
        // turns a full-width question mark into the `?` wildcard.
        text.nfkc().collect::<String>().to_lowercase()
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}

/// Reject queries that cannot be words or patterns
pub fn validate(query: &str) -> Result<(), LookupError> {
    let len = query.chars().count();
    if len == 0 || len > MAX_QUERY_LEN || query.chars().any(|c| c.is_whitespace() || c == '-') {
        return Err(LookupError::Validation(query.to_string()));
    }
    Ok(())
}

/// Preprocess then validate
pub fn normalize_query(raw: &str) -> Result<String, LookupError> {
    let query = DefaultPreprocessor.process(raw);
    validate(&query)?;
    Ok(query)
}
