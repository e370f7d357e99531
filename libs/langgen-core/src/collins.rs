//! Phrase/translation pairing for Collins-style listings, where phrases
//! and their translations alternate in one flat run of elements.

use crate::markup::MarkupElement;
use crate::types::Choice;

const PHRASE_CLASS: &str = "phrase";
const TRANSLATION_CLASS: &str = "translation";

/// Pair each translation with the phrase just before it.
///
/// A translation with no pending phrase is dropped, and a phrase is used
/// at most once.
pub fn pair_phrases<'a, E, I>(elements: I) -> Vec<Choice>
where
    E: MarkupElement + 'a,
    I: IntoIterator<Item = &'a E>,
{
    let mut pairs = Vec::new();
    let mut pending: Option<String> = None;

    for element in elements {
        if element.has_class(PHRASE_CLASS) {
            pending = Some(element.stripped_text(&[]));
        } else if element.has_class(TRANSLATION_CLASS) {
            if let Some(phrase) = pending.take() {
                pairs.push(Choice::new(phrase, element.stripped_text(&[])));
            }
        }
    }

    pairs
}
