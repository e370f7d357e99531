//! Core types for dictionary extraction.

use serde::{Deserialize, Serialize};

/// Which of the two alternating row groups a table row belongs to.
///
/// The source table shades consecutive entries alternately; the shading
/// only tells where one entry stops and the next begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Group {
    First,
    Second,
}

impl Group {
    /// Map a row class to its group. Only `even` and `odd` are recognised.
    pub fn from_class(class: &str) -> Option<Self> {
        match class {
            "even" => Some(Self::First),
            "odd" => Some(Self::Second),
            _ => None,
        }
    }
}

/// One headword's accumulated dictionary data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub part_of_speech: Option<String>,
    #[serde(default)]
    pub definitions: Vec<String>,
    #[serde(default)]
    pub examples: Vec<Example>,
}

impl Entry {
    /// Whether the entry carries a non-empty headword.
    pub fn has_word(&self) -> bool {
        self.word.as_deref().is_some_and(|word| !word.is_empty())
    }
}

/// A source-language example with its candidate translations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    pub example: String,
    #[serde(default)]
    pub translations: Vec<String>,
}

impl Example {
    pub fn new(example: impl Into<String>, translations: Vec<String>) -> Self {
        Self {
            example: example.into(),
            translations,
        }
    }

    /// Example without any translation.
    pub fn untranslated(example: impl Into<String>) -> Self {
        Self::new(example, Vec::new())
    }
}

/// A (phrase, gloss) pair offered for selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub phrase: String,
    pub gloss: String,
}

impl Choice {
    pub fn new(phrase: impl Into<String>, gloss: impl Into<String>) -> Self {
        Self {
            phrase: phrase.into(),
            gloss: gloss.into(),
        }
    }
}
