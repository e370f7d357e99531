//! Flattening entries into selectable (phrase, gloss) choices.

use crate::types::{Choice, Entry};

/// Joins an entry's definitions into one gloss.
pub const DEFINITION_DELIMITER: &str = ", ";

/// Gloss used when an entry has no definitions.
pub const NO_DEFINITIONS: &str = "No definitions";

/// Gloss used when an example has no translations.
pub const NO_TRANSLATION: &str = "No Translation";

/// Keep only entries with a non-empty headword.
pub fn filter_with_word(entries: Vec<Entry>) -> Vec<Entry> {
    entries.into_iter().filter(Entry::has_word).collect()
}

/// Flatten entries into choices.
///
/// Per entry: the headword with its joined definitions, then each example
/// once per translation.
pub fn flatten(entries: &[Entry]) -> Vec<Choice> {
    flatten_indexed(entries)
        .into_iter()
        .map(|(_, choice)| choice)
        .collect()
}

/// Like [`flatten`], also returning the index of the entry each choice
/// came from.
pub fn flatten_indexed(entries: &[Entry]) -> Vec<(usize, Choice)> {
    let mut choices = Vec::new();

    for (index, entry) in entries.iter().enumerate() {
        let Some(word) = entry.word.as_deref().filter(|w| !w.is_empty()) else {
            continue;
        };

        let gloss = if entry.definitions.is_empty() {
            NO_DEFINITIONS.to_string()
        } else {
            entry.definitions.join(DEFINITION_DELIMITER)
        };
        choices.push((index, Choice::new(word, gloss)));

        for example in &entry.examples {
            if example.translations.is_empty() {
                choices.push((index, Choice::new(&example.example, NO_TRANSLATION)));
                continue;
            }
            for translation in &example.translations {
                choices.push((index, Choice::new(&example.example, translation)));
            }
        }
    }

    choices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Example;
    use pretty_assertions::assert_eq;

    fn entry(word: Option<&str>, definitions: &[&str], examples: Vec<Example>) -> Entry {
        Entry {
            word: word.map(str::to_string),
            part_of_speech: None,
            definitions: definitions.iter().map(|d| d.to_string()).collect(),
            examples,
        }
    }

    #[test]
    fn word_choice_comes_first() {
        let entries = vec![entry(
            Some("chat"),
            &["cat", "tomcat"],
            vec![Example::new("Le chat dort", vec!["The cat sleeps".to_string()])],
        )];
        assert_eq!(
            flatten(&entries),
            vec![
                Choice::new("chat", "cat, tomcat"),
                Choice::new("Le chat dort", "The cat sleeps"),
            ]
        );
    }

    #[test]
    fn placeholders_for_missing_glosses() {
        let entries = vec![entry(
            Some("chat"),
            &[],
            vec![Example::untranslated("Le chat dort")],
        )];
        assert_eq!(
            flatten(&entries),
            vec![
                Choice::new("chat", NO_DEFINITIONS),
                Choice::new("Le chat dort", NO_TRANSLATION),
            ]
        );
    }

    #[test]
    fn one_choice_per_translation() {
        let entries = vec![entry(
            Some("chat"),
            &["cat"],
            vec![
                Example::new("a", vec!["x".to_string(), "y".to_string()]),
                Example::new("b", vec!["z".to_string()]),
            ],
        )];
        let phrases: Vec<(String, String)> = flatten(&entries)
            .into_iter()
            .map(|c| (c.phrase, c.gloss))
            .collect();
        assert_eq!(
            phrases,
            vec![
                ("chat".to_string(), "cat".to_string()),
                ("a".to_string(), "x".to_string()),
                ("a".to_string(), "y".to_string()),
                ("b".to_string(), "z".to_string()),
            ]
        );
    }

    #[test]
    fn entries_without_word_are_skipped() {
        let entries = vec![
            entry(None, &["orphan"], vec![Example::untranslated("lost")]),
            entry(Some(""), &["blank"], vec![]),
            entry(Some("chien"), &["dog"], vec![]),
        ];
        assert_eq!(flatten(&entries), vec![Choice::new("chien", "dog")]);
        assert_eq!(filter_with_word(entries).len(), 1);
    }

    #[test]
    fn indexed_choices_point_at_their_entry() {
        let entries = vec![
            entry(None, &[], vec![]),
            entry(Some("chat"), &["cat"], vec![Example::untranslated("a")]),
            entry(Some("chien"), &["dog"], vec![]),
        ];
        let indices: Vec<usize> = flatten_indexed(&entries).iter().map(|(i, _)| *i).collect();
        assert_eq!(indices, vec![1, 1, 2]);
    }

    #[test]
    fn word_choice_count_matches_entries_with_word() {
        let entries = vec![
            entry(Some("un"), &["one"], vec![Example::untranslated("Un.")]),
            entry(None, &[], vec![]),
            entry(Some("deux"), &[], vec![]),
            entry(Some("trois"), &["three"], vec![]),
        ];
        let indexed = flatten_indexed(&entries);
        let word_choices = indexed
            .iter()
            .filter(|(i, c)| entries[*i].word.as_deref() == Some(c.phrase.as_str()))
            .count();
        assert_eq!(word_choices, entries.iter().filter(|e| e.has_word()).count());
    }

    #[test]
    fn empty_entries_flatten_to_nothing() {
        assert!(flatten(&[]).is_empty());
    }
}
