use std::collections::BTreeSet;

use wordcheck_types::{Definition, Meaning};

use crate::lexicon::Lexicon;
use crate::table::DefinitionTable;

/// Build a cross-reference definition for a word the table has no entry for.
///
/// Every table entry that is itself a lexicon word and lists `word` among its
/// related words, antonyms or synonyms contributes its own key. The keys land
/// in `synonyms`, sorted and deduplicated, although they are really "words
/// that mention this word" rather than synonyms.
pub fn synthesize(word: &str, lexicon: &Lexicon, table: &DefinitionTable) -> Definition {
    let needle = word.to_lowercase();

    let referrers: BTreeSet<&str> = table
        .iter()
        .filter(|(key, _)| lexicon.contains(key))
        .filter(|(_, def)| def.cross_references().any(|w| w.to_lowercase() == needle))
        .map(|(key, _)| key)
        .collect();

    tracing::debug!("Synthesized {} cross-references for '{}'", referrers.len(), word);

    Definition {
        meanings: Vec::new(),
        antonyms: Vec::new(),
        synonyms: referrers.into_iter().map(str::to_string).collect(),
    }
}

/// Keep only cross-references a user can follow: words in the lexicon other than `word` itself.
///
/// Each list comes back lowercased, deduplicated and sorted.
pub fn filter_related(definition: &Definition, word: &str, lexicon: &Lexicon) -> Definition {
    let needle = word.to_lowercase();
    let keep = |list: &[String]| -> Vec<String> {
        list.iter()
            .map(|w| w.to_lowercase())
            .filter(|w| *w != needle && lexicon.contains(w))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    };

    Definition {
        meanings: definition
            .meanings
            .iter()
            .map(|m| Meaning {
                part_of_speech: m.part_of_speech.clone(),
                text: m.text.clone(),
                related: keep(&m.related),
            })
            .collect(),
        antonyms: keep(&definition.antonyms),
        synonyms: keep(&definition.synonyms),
    }
}
