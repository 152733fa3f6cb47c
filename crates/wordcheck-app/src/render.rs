use std::collections::BTreeSet;
use std::fmt::Write as _;

use wordcheck_types::{Definition, DisplayResult, LookupResult};

pub fn title(word: &str) -> String {
    format!("Is \"{word}\" really a word?")
}

pub fn render_result(result: &DisplayResult) -> String {
    let mut out = title(&result.word);
    out.push('\n');

    if let Some(score) = result.score {
        let _ = writeln!(out, "{score} points");
    }

    match &result.result {
        LookupResult::Error { message, .. } => {
            out.push_str(message);
            out.push('\n');
        }
        LookupResult::Found { definition } => render_definition(&mut out, definition),
    }

    out
}

fn render_definition(out: &mut String, definition: &Definition) {
    // Meanings with no text are cross-reference carriers only
    let meanings: Vec<_> = definition
        .meanings
        .iter()
        .filter(|m| !m.text.is_empty())
        .collect();
    if meanings.is_empty() {
        out.push_str("No definition available.\n");
    } else {
        out.push_str("Meanings:\n");
        for m in meanings {
            let _ = writeln!(out, "  {}: {}", m.part_of_speech, m.text);
        }
    }

    // Several meanings can share a related word
    let related: Vec<&str> = definition
        .meanings
        .iter()
        .flat_map(|m| m.related.iter().map(String::as_str))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    render_chips(out, "Related Words", &related);

    let antonyms: Vec<&str> = definition.antonyms.iter().map(String::as_str).collect();
    render_chips(out, "Antonyms", &antonyms);

    let synonyms: Vec<&str> = definition.synonyms.iter().map(String::as_str).collect();
    render_chips(out, "Synonyms", &synonyms);
}

fn render_chips(out: &mut String, heading: &str, words: &[&str]) {
    if words.is_empty() {
        return;
    }
    let _ = writeln!(out, "{}: {}", heading, words.join(", "));
}

pub fn render_suggestions(words: &[String]) -> String {
    let mut out = format!("{} words match. Pick one by number:\n", words.len());
    for (i, word) in words.iter().enumerate() {
        let _ = writeln!(out, "  {:>3}. {}", i + 1, word);
    }
    out
}

pub fn render_history(words: &[String]) -> String {
    if words.is_empty() {
        return "History is empty.\n".to_string();
    }
    let mut out = String::from("Recent searches:\n");
    for word in words {
        let _ = writeln!(out, "  {word}");
    }
    out
}
