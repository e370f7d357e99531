//! Configuration from the environment.

use langgen_core::{LanguageError, LanguagePair};
use std::path::{Path, PathBuf};

pub const DEFAULT_LANG_FROM: &str = "fr";
pub const DEFAULT_LANG_TO: &str = "en";
pub const DEFAULT_DECK: &str = "French::French Phrases";
pub const DEFAULT_ANKI_URL: &str = "http://localhost:8765";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid language setting: {0}")]
    Language(#[from] LanguageError),
}

/// Settings passed explicitly to every command.
#[derive(Debug, Clone)]
pub struct Config {
    pub languages: LanguagePair,
    pub deck: String,
    pub anki_url: String,
    pub media_dir: Option<PathBuf>,
}

impl Config {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`, falling back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str, default: &str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Ok(Self {
            languages: LanguagePair::new(
                &get("LANGGEN_LANG_FROM", DEFAULT_LANG_FROM),
                &get("LANGGEN_LANG_TO", DEFAULT_LANG_TO),
            )?,
            deck: get("ANKI_DECK", DEFAULT_DECK),
            anki_url: get("ANKI_CONNECT_URL", DEFAULT_ANKI_URL),
            media_dir: lookup("ANKI_MEDIA_DIR")
                .filter(|value| !value.trim().is_empty())
                .map(PathBuf::from)
                .or_else(default_media_dir),
        })
    }

    /// Apply command-line overrides.
    pub fn with_overrides(
        mut self,
        from: Option<&str>,
        to: Option<&str>,
        deck: Option<&str>,
    ) -> Result<Self, ConfigError> {
        if from.is_some() || to.is_some() {
            self.languages = LanguagePair::new(
                from.unwrap_or(self.languages.source()),
                to.unwrap_or(self.languages.target()),
            )?;
        }
        if let Some(deck) = deck {
            self.deck = deck.to_string();
        }
        Ok(self)
    }

    /// Media folder, if it exists on disk.
    pub fn media_folder(&self) -> Option<&Path> {
        self.media_dir.as_deref().filter(|dir| dir.is_dir())
    }
}

/// Anki's media folder for the default profile.
pub fn default_media_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("Anki2").join("User 1").join("collection.media"))
}
