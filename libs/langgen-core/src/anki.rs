//! AnkiConnect request and response payloads.

use crate::error::AnkiError;
use serde::{Deserialize, Serialize};

/// AnkiConnect API version spoken by these payloads.
pub const API_VERSION: u8 = 6;

/// Note type the cards are created with.
pub const CLOZE_MODEL: &str = "Cloze";

/// `addNote` request.
#[derive(Debug, Clone, Serialize)]
pub struct AddNoteRequest {
    action: &'static str,
    version: u8,
    params: AddNoteParams,
}

#[derive(Debug, Clone, Serialize)]
struct AddNoteParams {
    note: Note,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub model_name: String,
    pub deck_name: String,
    pub fields: ClozeFields,
    pub tags: Vec<String>,
    pub options: NoteOptions,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClozeFields {
    #[serde(rename = "Text")]
    pub text: String,
    #[serde(rename = "Back Extra")]
    pub back_extra: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteOptions {
    pub allow_duplicate: bool,
    pub duplicate_scope: String,
    pub duplicate_scope_options: DuplicateScopeOptions,
}

impl Default for NoteOptions {
    fn default() -> Self {
        Self {
            allow_duplicate: false,
            duplicate_scope: "deck".to_string(),
            duplicate_scope_options: DuplicateScopeOptions::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DuplicateScopeOptions {
    pub deck_name: String,
    pub check_children: bool,
    pub check_all_models: bool,
}

impl Default for DuplicateScopeOptions {
    fn default() -> Self {
        Self {
            deck_name: "Default".to_string(),
            check_children: false,
            check_all_models: false,
        }
    }
}

impl AddNoteRequest {
    /// Cloze note for `deck` with the given field contents.
    pub fn cloze(deck: impl Into<String>, text: impl Into<String>, back_extra: impl Into<String>) -> Self {
        Self {
            action: "addNote",
            version: API_VERSION,
            params: AddNoteParams {
                note: Note {
                    model_name: CLOZE_MODEL.to_string(),
                    deck_name: deck.into(),
                    fields: ClozeFields {
                        text: text.into(),
                        back_extra: back_extra.into(),
                    },
                    tags: Vec::new(),
                    options: NoteOptions::default(),
                },
            },
        }
    }

    pub fn note(&self) -> &Note {
        &self.params.note
    }
}

/// `version` request, used to check that AnkiConnect is reachable.
#[derive(Debug, Clone, Serialize)]
pub struct VersionRequest {
    action: &'static str,
    version: u8,
}

impl Default for VersionRequest {
    fn default() -> Self {
        Self {
            action: "version",
            version: API_VERSION,
        }
    }
}

/// Reply envelope: exactly one of `result` and `error` is set.
#[derive(Debug, Clone, Deserialize)]
pub struct AnkiResponse<T> {
    pub result: Option<T>,
    pub error: Option<String>,
}

impl<T> AnkiResponse<T> {
    pub fn into_result(self) -> Result<T, AnkiError> {
        match (self.result, self.error) {
            (_, Some(error)) => Err(AnkiError::Rejected(error)),
            (Some(result), None) => Ok(result),
            (None, None) => Err(AnkiError::MissingResult),
        }
    }
}
