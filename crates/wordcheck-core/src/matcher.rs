use crate::lexicon::Lexicon;
use crate::preprocess::WILDCARD;

/// Resolve a query against the lexicon.
///
/// `?` matches exactly one character; everything else matches literally and
/// the whole word must match. A wildcard-free query present in the lexicon is
/// returned on its own without scanning. Results are sorted.
pub fn find_matches(query: &str, lexicon: &Lexicon) -> Vec<String> {
    if !query.contains(WILDCARD) && lexicon.contains(query) {
        tracing::debug!("Exact hit for '{}'", query);
        return vec![query.to_lowercase()];
    }

    let pattern: Vec<char> = query.chars().collect();
    let mut matches: Vec<String> = lexicon
        .iter()
        .filter(|word| matches_pattern(&pattern, word))
        .map(str::to_string)
        .collect();
    matches.sort_unstable();

    tracing::debug!("Pattern '{}' matched {} words", query, matches.len());
    matches
}

fn matches_pattern(pattern: &[char], word: &str) -> bool {
    let mut chars = word.chars();
    for &p in pattern {
        match chars.next() {
            Some(c) if p == WILDCARD || p == c => {}
            _ => return false,
        }
    }
    chars.next().is_none()
}
