//! Field extraction from a single row.

use crate::markup::{MarkupElement, MarkupRow};
use crate::text::capitalize;

/// Nested tags that hold annotations (part of speech, usage notes) and are
/// left out when reading headwords and definitions.
pub const ANNOTATION_TAGS: &[&str] = &["em"];

const CELL: &str = "td";
const PART_OF_SPEECH_TAG: &str = "em";
const PART_OF_SPEECH_CLASS: &str = "POS2";
const DEFINITION_CLASS: &str = "ToWrd";
const TARGET_EXAMPLE_CLASS: &str = "ToEx";

/// Fields found in one row. Any of them may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowFields {
    pub word: Option<String>,
    pub part_of_speech: Option<String>,
    pub definition: Option<String>,
    pub source_example: Option<String>,
    pub target_example: Option<String>,
}

/// Class names that depend on the source language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldKeys {
    word_class: String,
    source_example_class: String,
}

impl FieldKeys {
    /// Keys for rows whose source language is `lang_from` (e.g. `fr` gives
    /// `FrWrd` and `FrEx`).
    pub fn new(lang_from: &str) -> Self {
        let lang = capitalize(lang_from);
        Self {
            word_class: format!("{lang}Wrd"),
            source_example_class: format!("{lang}Ex"),
        }
    }

    pub fn word_class(&self) -> &str {
        &self.word_class
    }

    pub fn source_example_class(&self) -> &str {
        &self.source_example_class
    }

    /// Look up every field of `row` independently.
    pub fn extract<R: MarkupRow>(&self, row: &R) -> RowFields {
        RowFields {
            word: row
                .find(CELL, &self.word_class)
                .map(|cell| cell.stripped_text(ANNOTATION_TAGS)),
            part_of_speech: row
                .find(PART_OF_SPEECH_TAG, PART_OF_SPEECH_CLASS)
                .map(|em| em.text(&[])),
            definition: row
                .find(CELL, DEFINITION_CLASS)
                .map(|cell| cell.stripped_text(ANNOTATION_TAGS)),
            source_example: row
                .find(CELL, &self.source_example_class)
                .map(|cell| cell.text(&[])),
            target_example: row
                .find(CELL, TARGET_EXAMPLE_CLASS)
                .map(|cell| cell.text(&[])),
        }
    }
}

/// Extract the fields of a single row for source language `lang_from`.
pub fn extract<R: MarkupRow>(row: &R, lang_from: &str) -> RowFields {
    FieldKeys::new(lang_from).extract(row)
}
