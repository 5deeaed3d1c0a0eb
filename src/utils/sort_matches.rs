use crate::{FormattedMatch, SortBy};
use std::cmp::Ordering;

/// Sorts formatted matches in descending order of the field selected by `sort_by`.
///
/// ### Sorting Order:
/// - `SortBy::Freq`: by `count`.
/// - `SortBy::Lex`: by computed `value`.
/// - `SortBy::Weight`: by raw lexicon `weight`.
///
/// The sort is stable, so ties keep their incoming (first-encounter) order.
///
/// ### Example:
/// ```rust
/// use dark_triad::{sort_matches, FormattedMatch, SortBy};
///
/// let matches = vec![
///     FormattedMatch { word: "capital".to_string(), count: 1, weight: -133.9, value: -22.3 },
///     FormattedMatch { word: "note".to_string(), count: 3, weight: -34.8, value: -17.4 },
/// ];
///
/// let sorted = sort_matches(matches, SortBy::Freq);
/// assert_eq!(sorted[0].word, "note");
/// ```
pub fn sort_matches(mut matches: Vec<FormattedMatch>, sort_by: SortBy) -> Vec<FormattedMatch> {
    match sort_by {
        SortBy::Freq => matches.sort_by(|a, b| b.count.cmp(&a.count)),
        SortBy::Lex => matches.sort_by(|a, b| {
            b.value
                .partial_cmp(&a.value) // Sort by value (descending)
                .unwrap_or(Ordering::Equal) // Handle NaN gracefully
        }),
        SortBy::Weight => matches.sort_by(|a, b| {
            b.weight
                .partial_cmp(&a.weight) // Sort by weight (descending)
                .unwrap_or(Ordering::Equal)
        }),
    }

    matches
}
