use std::fmt;

use serde::de::{IgnoredAny, SeqAccess, Visitor};
use serde::ser::SerializeTuple;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A dictionary definition as stored in the meaning table.
///
/// The on-disk shape is `{"MEANINGS": [...], "ANTONYMS": [...], "SYNONYMS": [...]}`.
/// Every key is optional, and `null` reads as an empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    #[serde(rename = "MEANINGS", default, deserialize_with = "nullable")]
    pub meanings: Vec<Meaning>,
    #[serde(rename = "ANTONYMS", default, deserialize_with = "nullable")]
    pub antonyms: Vec<String>,
    #[serde(rename = "SYNONYMS", default, deserialize_with = "nullable")]
    pub synonyms: Vec<String>,
}

impl Definition {
    /// True when there is nothing to show: no meanings and no cross-references.
    pub fn is_empty(&self) -> bool {
        self.meanings.is_empty() && self.antonyms.is_empty() && self.synonyms.is_empty()
    }

    /// Related words from every meaning, followed by antonyms and synonyms.
    pub fn cross_references(&self) -> impl Iterator<Item = &str> {
        self.meanings
            .iter()
            .flat_map(|m| m.related.iter())
            .chain(self.antonyms.iter())
            .chain(self.synonyms.iter())
            .map(String::as_str)
    }
}

/// One sense of a word. Serialized as `[pos, text, [related], []]`.
///
/// The fourth slot is unused by every producer we know of; it is accepted
/// with any content and always written back empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Meaning {
    pub part_of_speech: String,
    pub text: String,
    pub related: Vec<String>,
}

impl Meaning {
    pub fn new(part_of_speech: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            part_of_speech: part_of_speech.into(),
            text: text.into(),
            related: Vec::new(),
        }
    }

    pub fn with_related<I, S>(mut self, related: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.related = related.into_iter().map(Into::into).collect();
        self
    }
}

impl Serialize for Meaning {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let reserved: [String; 0] = [];
        let mut tuple = serializer.serialize_tuple(4)?;
        tuple.serialize_element(&self.part_of_speech)?;
        tuple.serialize_element(&self.text)?;
        tuple.serialize_element(&self.related)?;
        tuple.serialize_element(&reserved)?;
        tuple.end()
    }
}

impl<'de> Deserialize<'de> for Meaning {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct MeaningVisitor;

        impl<'de> Visitor<'de> for MeaningVisitor {
            type Value = Meaning;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an array [part of speech, definition, related words, reserved]")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Meaning, A::Error> {
                // Short tuples are fine: missing trailing slots read as empty
                let part_of_speech = seq.next_element::<Option<String>>()?.flatten();
                let text = seq.next_element::<Option<String>>()?.flatten();
                let related = seq.next_element::<Option<Vec<String>>>()?.flatten();
                while seq.next_element::<IgnoredAny>()?.is_some() {}

                Ok(Meaning {
                    part_of_speech: part_of_speech.unwrap_or_default(),
                    text: text.unwrap_or_default(),
                    related: related.unwrap_or_default(),
                })
            }
        }

        deserializer.deserialize_seq(MeaningVisitor)
    }
}

fn nullable<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Which stage of a lookup produced an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Validation,
    NotFound,
    DefinitionUnavailable,
    CredentialMissing,
    ExternalService,
}

/// Outcome of a lookup as handed to a front end: a definition or a message, never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LookupResult {
    Found { definition: Definition },
    Error { kind: ErrorKind, message: String },
}

impl LookupResult {
    pub fn definition(&self) -> Option<&Definition> {
        match self {
            LookupResult::Found { definition } => Some(definition),
            LookupResult::Error { .. } => None,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, LookupResult::Error { .. })
    }
}
