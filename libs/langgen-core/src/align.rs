//! Pairing of source-language examples with their translations.
//!
//! Scraped tables rarely line examples up one to one, so the counts decide
//! how they are paired. The rules are best effort and may pair unrelated
//! sentences on irregular markup.

use crate::types::Example;

/// Separator packing several short translations into one cell.
pub const TRANSLATION_SEPARATOR: &str = "//";

/// How a set of examples is paired with its translations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignmentCase {
    /// No translations at all: examples stand alone.
    Untranslated,
    /// Same count: i-th example gets the i-th translation.
    Paired,
    /// More translations than examples: every example gets all of them.
    FanOut,
    /// Fewer translations than examples: translations are split on
    /// [`TRANSLATION_SEPARATOR`] then paired; unmatched examples are dropped.
    Split,
}

impl AlignmentCase {
    /// Case for the given counts, or `None` when there are no examples.
    pub fn for_counts(sources: usize, targets: usize) -> Option<Self> {
        if sources == 0 {
            return None;
        }
        Some(if targets == 0 {
            Self::Untranslated
        } else if targets == sources {
            Self::Paired
        } else if targets > sources {
            Self::FanOut
        } else {
            Self::Split
        })
    }
}

/// Pair examples with translations.
pub fn align<S, T>(sources: &[S], targets: &[T]) -> Vec<Example>
where
    S: AsRef<str>,
    T: AsRef<str>,
{
    let Some(case) = AlignmentCase::for_counts(sources.len(), targets.len()) else {
        return Vec::new();
    };
    tracing::debug!(
        ?case,
        sources = sources.len(),
        targets = targets.len(),
        "aligning examples"
    );

    match case {
        AlignmentCase::Untranslated => sources
            .iter()
            .map(|source| Example::untranslated(source.as_ref()))
            .collect(),
        AlignmentCase::Paired => pair(sources, targets.iter().map(|target| target.as_ref())),
        AlignmentCase::FanOut => {
            let all: Vec<String> = targets.iter().map(|t| t.as_ref().to_string()).collect();
            sources
                .iter()
                .map(|source| Example::new(source.as_ref(), all.clone()))
                .collect()
        }
        AlignmentCase::Split => pair(
            sources,
            targets
                .iter()
                .flat_map(|target| target.as_ref().split(TRANSLATION_SEPARATOR)),
        ),
    }
}

/// Positional pairing; stops at the shorter side.
fn pair<'t, S: AsRef<str>>(
    sources: &[S],
    targets: impl Iterator<Item = &'t str>,
) -> Vec<Example> {
    sources
        .iter()
        .zip(targets)
        .map(|(source, target)| Example::new(source.as_ref(), vec![target.to_string()]))
        .collect()
}
