//! Core dictionary extraction library shared by the langgen apps.
//!
//! Provides:
//! - Markup row model and the query traits the extractor depends on
//! - Row classification, field extraction and entry grouping
//! - Example/translation alignment
//! - Option flattening, menu rendering and selection
//! - Cloze card rendering and AnkiConnect payloads
//! - Shared types (Entry, Example, Choice, Group, etc.)

pub mod align;
pub mod anki;
pub mod card;
pub mod classify;
pub mod collins;
pub mod error;
pub mod fields;
pub mod grouper;
pub mod language;
pub mod markup;
pub mod menu;
pub mod options;
pub mod text;
pub mod types;

pub use align::{align, AlignmentCase};
pub use anki::{AddNoteRequest, AnkiResponse, VersionRequest};
pub use card::{audio_file_name, CardTemplate};
pub use classify::{classify, TaggedRow};
pub use collins::pair_phrases;
pub use error::{AnkiError, Error, LanguageError, Result, SelectionError};
pub use fields::{extract, FieldKeys, RowFields};
pub use grouper::{extract_entries, group};
pub use language::LanguagePair;
pub use markup::{Element, MarkupElement, MarkupRow, Node, TableRow};
pub use menu::{parse_choice, render_menu, Menu, Selection};
pub use options::{filter_with_word, flatten, flatten_indexed};
pub use types::{Choice, Entry, Example, Group};
