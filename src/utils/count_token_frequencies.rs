use crate::types::{Token, TokenFrequencyMap};

/// Counts the frequency of tokens in the given list.
///
/// # Arguments
/// * `tokens` - A slice of tokens (words and n-grams) to analyze.
///
/// # Returns
/// * A `TokenFrequencyMap` where the keys are the distinct tokens, in first-encounter
///   order, and the values are their respective frequencies.
///
/// # Example
/// ```
/// use dark_triad::count_token_frequencies;
///
/// let tokens = vec!["note".to_string(), "america".to_string(), "note".to_string()];
/// let frequencies = count_token_frequencies(&tokens);
/// assert_eq!(frequencies.get("note"), Some(&2));
/// assert_eq!(frequencies.get("america"), Some(&1));
/// assert_eq!(frequencies.get_index(0).map(|(token, _)| token.as_str()), Some("note"));
/// ```
pub fn count_token_frequencies(tokens: &[Token]) -> TokenFrequencyMap {
    let mut frequencies = TokenFrequencyMap::new();

    for token in tokens {
        *frequencies.entry(token.clone()).or_insert(0) += 1;
    }

    frequencies
}
