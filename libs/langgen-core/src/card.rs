//! Cloze card rendering.

use crate::text::capitalize;

/// Everything shown on one cloze note.
#[derive(Debug, Clone, Copy)]
pub struct CardTemplate<'a> {
    /// Word looked up; highlighted in the sentence.
    pub word: &'a str,
    /// Definitions of the chosen entry; clozed in the translation.
    pub definitions: &'a [String],
    pub sentence: &'a str,
    pub translation: &'a str,
    /// Image file name inside the media folder.
    pub image: Option<&'a str>,
    /// Audio file name inside the media folder.
    pub audio: Option<&'a str>,
}

impl CardTemplate<'_> {
    /// Sentence with every occurrence of the word in bold italics.
    pub fn highlighted_sentence(&self) -> String {
        if self.word.is_empty() {
            return self.sentence.to_string();
        }
        self.sentence
            .replace(self.word, &format!("<b><i>{}</i></b>", self.word))
    }

    /// Translation with each definition found in it turned into a cloze
    /// deletion. A definition is matched as written first, then
    /// capitalised.
    pub fn clozed_translation(&self) -> String {
        let mut text = self.translation.to_string();
        for definition in self.definitions.iter().filter(|d| !d.is_empty()) {
            if text.contains(definition.as_str()) {
                text = text.replace(definition.as_str(), &cloze(definition));
            } else {
                let capitalized = capitalize(definition);
                if text.contains(&capitalized) {
                    text = text.replace(&capitalized, &cloze(&capitalized));
                }
            }
        }
        text
    }

    /// Note HTML for the `Text` field.
    pub fn render(&self) -> String {
        let mut html = format!(
            "<div style=\"text-align: center;\">{}</div>\n\
             <div style=\"text-align: center;\">{}<br></div>\n",
            self.highlighted_sentence(),
            self.clozed_translation()
        );
        if let Some(image) = self.image {
            html.push_str(&format!(
                "<div style=\"text-align: center; max-height: 400px;\">\n\
                 \x20   <img alt=\"Image\" src=\"{image}\"><br>\n\
                 </div>\n"
            ));
        }
        if let Some(audio) = self.audio {
            html.push_str(&format!(
                "<div style=\"text-align: center;\">\n\
                 \x20   <hr>[sound:{audio}]<br><br><br>\n\
                 </div>\n"
            ));
        }
        html
    }
}

fn cloze(text: &str) -> String {
    format!("<b><i>{{{{c1::{text}}}}}</i></b>")
}

/// Media file name for the pronunciation of `phrase`.
pub fn audio_file_name(lang: &str, phrase: &str) -> String {
    format!("pronunciation_{}_{}.mp3", lang, phrase.replace(' ', "_"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn definitions(items: &[&str]) -> Vec<String> {
        items.iter().map(|d| d.to_string()).collect()
    }

    fn template<'a>(definitions: &'a [String]) -> CardTemplate<'a> {
        CardTemplate {
            word: "chat",
            definitions,
            sentence: "Le chat dort sur le chat.",
            translation: "The cat sleeps.",
            image: None,
            audio: None,
        }
    }

    #[test]
    fn highlights_every_occurrence() {
        let defs = definitions(&["cat"]);
        assert_eq!(
            template(&defs).highlighted_sentence(),
            "Le <b><i>chat</i></b> dort sur le <b><i>chat</i></b>."
        );
    }

    #[test]
    fn clozes_matching_definition() {
        let defs = definitions(&["cat", "moggy"]);
        assert_eq!(
            template(&defs).clozed_translation(),
            "The <b><i>{{c1::cat}}</i></b> sleeps."
        );
    }

    #[test]
    fn falls_back_to_capitalized_definition() {
        let defs = definitions(&["cats"]);
        let card = CardTemplate {
            translation: "Cats sleep.",
            ..template(&defs)
        };
        assert_eq!(card.clozed_translation(), "<b><i>{{c1::Cats}}</i></b> sleep.");
    }

    #[test]
    fn empty_word_and_definitions_are_ignored() {
        let defs = definitions(&[""]);
        let card = CardTemplate {
            word: "",
            ..template(&defs)
        };
        assert_eq!(card.highlighted_sentence(), "Le chat dort sur le chat.");
        assert_eq!(card.clozed_translation(), "The cat sleeps.");
    }

    #[test]
    fn renders_media_blocks_when_present() {
        let defs = definitions(&["cat"]);
        let card = CardTemplate {
            image: Some("cat.png"),
            audio: Some("pronunciation_fr_chat.mp3"),
            ..template(&defs)
        };
        let html = card.render();
        assert!(html.contains("<img alt=\"Image\" src=\"cat.png\"><br>"));
        assert!(html.contains("<hr>[sound:pronunciation_fr_chat.mp3]<br><br><br>"));
        assert!(html.starts_with("<div style=\"text-align: center;\">Le <b><i>chat</i></b>"));
    }

    #[test]
    fn omits_media_blocks_when_absent() {
        let defs = definitions(&["cat"]);
        let html = template(&defs).render();
        assert!(!html.contains("<img"));
        assert!(!html.contains("[sound:"));
        assert_eq!(html.matches("<div").count(), 2);
    }

    #[test]
    fn audio_name_replaces_spaces() {
        assert_eq!(
            audio_file_name("fr", "le chat dort"),
            "pronunciation_fr_le_chat_dort.mp3"
        );
    }
}
