//! Entry grouping.
//!
//! Consecutive rows sharing a group marker make up one entry. The first
//! row of an entry usually holds the headword and definition; the rows
//! after it add more definitions and example sentences.

use crate::align::align;
use crate::classify::{classify, TaggedRow};
use crate::fields::{FieldKeys, RowFields};
use crate::markup::MarkupRow;
use crate::types::{Entry, Group};

/// Classify `rows` and group them into entries for source language
/// `lang_from`.
pub fn extract_entries<R: MarkupRow>(rows: &[R], lang_from: &str) -> Vec<Entry> {
    group(&classify(rows), lang_from)
}

/// Group classified rows into entries, in a single pass.
pub fn group<R: MarkupRow>(rows: &[TaggedRow<'_, R>], lang_from: &str) -> Vec<Entry> {
    let mut grouper = Grouper::new(FieldKeys::new(lang_from));
    for tagged in rows {
        grouper.process_row(tagged);
    }
    grouper.finalize()
}

#[derive(Default)]
struct EntryBuilder {
    word: Option<String>,
    part_of_speech: Option<String>,
    definitions: Vec<String>,
    source_examples: Vec<String>,
    target_examples: Vec<String>,
}

impl EntryBuilder {
    fn absorb(&mut self, fields: RowFields) {
        if let Some(word) = fields.word.filter(|w| !w.is_empty()) {
            self.word = Some(word);
        }
        if let Some(pos) = fields.part_of_speech.filter(|p| !p.is_empty()) {
            self.part_of_speech = Some(pos);
        }
        self.definitions.extend(fields.definition);
        self.source_examples.extend(fields.source_example);
        self.target_examples.extend(fields.target_example);
    }

    fn build(self) -> Entry {
        Entry {
            examples: align(&self.source_examples, &self.target_examples),
            word: self.word,
            part_of_speech: self.part_of_speech,
            definitions: self.definitions,
        }
    }
}

struct Grouper {
    keys: FieldKeys,
    current: Option<(Group, EntryBuilder)>,
    entries: Vec<Entry>,
}

impl Grouper {
    fn new(keys: FieldKeys) -> Self {
        Self {
            keys,
            current: None,
            entries: Vec::new(),
        }
    }

    fn process_row<R: MarkupRow>(&mut self, tagged: &TaggedRow<'_, R>) {
        let same_group = self
            .current
            .as_ref()
            .is_some_and(|(group, _)| *group == tagged.group);

        if !same_group {
            self.flush();
            self.current = Some((tagged.group, EntryBuilder::default()));
        }

        if let Some((_, builder)) = self.current.as_mut() {
            builder.absorb(self.keys.extract(tagged.row));
        }
    }

    fn flush(&mut self) {
        if let Some((_, builder)) = self.current.take() {
            let entry = builder.build();
            tracing::debug!(
                word = entry.word.as_deref().unwrap_or_default(),
                definitions = entry.definitions.len(),
                examples = entry.examples.len(),
                "finalized entry"
            );
            self.entries.push(entry);
        }
    }

    fn finalize(mut self) -> Vec<Entry> {
        self.flush();
        self.entries
    }
}
