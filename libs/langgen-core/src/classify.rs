//! Row classification: keep the rows that belong to an entry group.

use crate::markup::MarkupRow;
use crate::types::Group;

/// A row that carries a recognised group marker.
#[derive(Debug)]
pub struct TaggedRow<'a, R> {
    pub group: Group,
    pub row: &'a R,
}

impl<R> Clone for TaggedRow<'_, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for TaggedRow<'_, R> {}

/// Keep rows tagged with one of the two groups, in order.
///
/// Untagged rows are layout filler around the dictionary data and are
/// dropped silently.
pub fn classify<R: MarkupRow>(rows: &[R]) -> Vec<TaggedRow<'_, R>> {
    let tagged: Vec<_> = rows
        .iter()
        .filter_map(|row| row.group().map(|group| TaggedRow { group, row }))
        .collect();

    let discarded = rows.len() - tagged.len();
    if discarded > 0 {
        tracing::debug!(discarded, kept = tagged.len(), "dropped untagged rows");
    }
    tagged
}
