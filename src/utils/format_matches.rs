use crate::types::{DecimalPlaces, WordCount};
use crate::utils::{round_to_places, sort_matches};
use crate::{Encoding, FormattedMatch, MatchSet, SortBy};

/// Attaches each match's rounded contribution under `encoding` and sorts the result.
///
/// Every entry of `match_set` appears exactly once in the output.
pub fn format_matches(
    match_set: &MatchSet,
    sort_by: SortBy,
    word_count: WordCount,
    places: DecimalPlaces,
    encoding: Encoding,
) -> Vec<FormattedMatch> {
    let formatted = match_set
        .entries()
        .iter()
        .map(|entry| FormattedMatch {
            word: entry.word.clone(),
            count: entry.count,
            weight: entry.weight,
            value: round_to_places(
                encoding.contribution(entry.count, entry.weight, word_count),
                places,
            ),
        })
        .collect();

    sort_matches(formatted, sort_by)
}
