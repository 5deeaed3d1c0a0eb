use crate::types::{DecimalPlaces, Weight, WordCount};
use crate::utils::round_to_places;
use crate::{Encoding, MatchSet};

/// Combines a trait's matches into a single score.
///
/// - `binary`: `intercept + Σ weight`
/// - `freq`: `intercept + Σ (count / word_count) × weight`
/// - `percent`: `distinct matches / word_count` (the intercept is not applied)
///
/// Returns `None` when `word_count` is zero, or when there are no matches under `binary`
/// or `freq`. An empty `percent` score is `0`. The sum is rounded once, half away from
/// zero, to `places` decimal digits.
pub fn calc_lexical_value(
    match_set: &MatchSet,
    intercept: Weight,
    word_count: WordCount,
    encoding: Encoding,
    places: DecimalPlaces,
) -> Option<f64> {
    if word_count == 0 {
        return None;
    }

    if match_set.is_empty() && encoding != Encoding::Percent {
        return None;
    }

    let value = match encoding {
        Encoding::Percent => match_set.len() as f64 / word_count as f64,
        Encoding::Binary | Encoding::Freq => {
            let weighted_sum: f64 = match_set
                .entries()
                .iter()
                .map(|entry| encoding.contribution(entry.count, entry.weight, word_count))
                .sum();

            intercept + weighted_sum
        }
    };

    Some(round_to_places(value, places))
}
