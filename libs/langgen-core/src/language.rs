//! Source/target language pair.

use crate::error::LanguageError;
use crate::text::capitalize;
use isolang::Language;
use serde::Serialize;
use std::fmt;

/// Two validated ISO 639-1 codes: the language looked up and the language
/// it is translated into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguagePair {
    source: String,
    target: String,
}

impl LanguagePair {
    pub fn new(source: &str, target: &str) -> Result<Self, LanguageError> {
        Ok(Self {
            source: normalize(source)?,
            target: normalize(target)?,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// Source code with its first letter upper-cased, as used in row
    /// class names.
    pub fn source_capitalized(&self) -> String {
        capitalize(&self.source)
    }

    pub fn source_name(&self) -> &'static str {
        english_name(&self.source)
    }

    pub fn target_name(&self) -> &'static str {
        english_name(&self.target)
    }
}

impl fmt::Display for LanguagePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source_name(), self.target_name())
    }
}

fn normalize(code: &str) -> Result<String, LanguageError> {
    let normalized = code.trim().to_lowercase();
    if normalized.len() == 2 && Language::from_639_1(&normalized).is_some() {
        Ok(normalized)
    } else {
        Err(LanguageError::Unknown(code.to_string()))
    }
}

fn english_name(code: &str) -> &'static str {
    Language::from_639_1(code)
        .map(|language| language.to_name())
        .unwrap_or("Unknown")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_two_letter_codes() {
        let pair = LanguagePair::new(" FR", "en").unwrap();
        assert_eq!(pair.source(), "fr");
        assert_eq!(pair.target(), "en");
        assert_eq!(pair.source_capitalized(), "Fr");
    }

    #[test]
    fn displays_english_names() {
        let pair = LanguagePair::new("fr", "en").unwrap();
        assert_eq!(pair.to_string(), "French -> English");
    }

    #[test]
    fn rejects_unknown_codes() {
        assert_eq!(
            LanguagePair::new("zz", "en"),
            Err(LanguageError::Unknown("zz".to_string()))
        );
        assert_eq!(
            LanguagePair::new("fr", "fra"),
            Err(LanguageError::Unknown("fra".to_string()))
        );
        assert!(LanguagePair::new("", "en").is_err());
    }
}
