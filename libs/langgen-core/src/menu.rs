//! Numbered menu of choices and selection by number.

use crate::error::SelectionError;
use crate::options::{filter_with_word, flatten_indexed};
use crate::types::{Choice, Entry};

/// Header printed above the numbered choices.
pub const MENU_HEADER: &str = "Please select which phrase/word to use on your card:";

/// A chosen option and the entry it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection<'a> {
    /// 1-indexed number as shown in the menu.
    pub number: usize,
    pub choice: &'a Choice,
    pub entry: &'a Entry,
}

/// Entries with a headword and the choices flattened from them.
#[derive(Debug, Clone)]
pub struct Menu {
    entries: Vec<Entry>,
    choices: Vec<(usize, Choice)>,
}

impl Menu {
    /// Build a menu, dropping entries without a headword.
    pub fn new(entries: Vec<Entry>) -> Self {
        let entries = filter_with_word(entries);
        let choices = flatten_indexed(&entries);
        Self { entries, choices }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn choices(&self) -> impl Iterator<Item = &Choice> {
        self.choices.iter().map(|(_, choice)| choice)
    }

    pub fn len(&self) -> usize {
        self.choices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }

    /// Render the numbered menu.
    pub fn render(&self) -> String {
        render_lines(self.choices())
    }

    /// Pick the choice shown as `number` (1-indexed).
    pub fn select(&self, number: usize) -> Result<Selection<'_>, SelectionError> {
        if self.choices.is_empty() {
            return Err(SelectionError::Empty);
        }
        let (index, choice) = number
            .checked_sub(1)
            .and_then(|position| self.choices.get(position))
            .ok_or(SelectionError::OutOfRange {
                number,
                max: self.choices.len(),
            })?;

        Ok(Selection {
            number,
            choice,
            entry: &self.entries[*index],
        })
    }

    /// Parse user input and pick the matching choice.
    pub fn select_input(&self, input: &str) -> Result<Selection<'_>, SelectionError> {
        let number = parse_choice(input, self.choices.len())?;
        self.select(number)
    }
}

/// Render choices as a numbered menu, `1.` being the first.
pub fn render_menu(choices: &[Choice]) -> String {
    render_lines(choices.iter())
}

fn render_lines<'a>(choices: impl Iterator<Item = &'a Choice>) -> String {
    let mut lines = vec![MENU_HEADER.to_string()];
    lines.extend(
        choices
            .enumerate()
            .map(|(index, choice)| format!("{}. {} -> {}", index + 1, choice.phrase, choice.gloss)),
    );
    lines.join("\n")
}

/// Parse a 1-indexed choice between 1 and `max`.
pub fn parse_choice(input: &str, max: usize) -> Result<usize, SelectionError> {
    if max == 0 {
        return Err(SelectionError::Empty);
    }
    let trimmed = input.trim();
    let number = trimmed
        .parse::<usize>()
        .map_err(|_| SelectionError::NotANumber {
            input: trimmed.to_string(),
        })?;

    if (1..=max).contains(&number) {
        Ok(number)
    } else {
        Err(SelectionError::OutOfRange { number, max })
    }
}
