use crate::types::{Token, TokenFrequency, TokenFrequencyMap, Weight};
use crate::Lexicon;

/// A single lexicon hit within an analyzed text.
#[derive(Clone, Debug, PartialEq)]
pub struct MatchEntry {
    pub word: Token,
    pub count: TokenFrequency,
    pub weight: Weight,
}

/// Every lexicon hit for one trait, in the order the tokens were first encountered.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MatchSet {
    entries: Vec<MatchEntry>,
}

impl MatchSet {
    /// Collects each counted token that appears in `lexicon` with a weight strictly between
    /// `min` and `max`. Tokens missing from the lexicon are skipped.
    pub fn resolve(
        frequencies: &TokenFrequencyMap,
        lexicon: &Lexicon,
        min: Weight,
        max: Weight,
    ) -> Self {
        let entries = frequencies
            .iter()
            .filter_map(|(token, &count)| {
                lexicon
                    .weight(token)
                    .filter(|&weight| min < weight && weight < max)
                    .map(|weight| MatchEntry {
                        word: token.clone(),
                        count,
                        weight,
                    })
            })
            .collect();

        MatchSet { entries }
    }

    pub fn entries(&self) -> &[MatchEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::count_token_frequencies;

    fn lexicon() -> Lexicon {
        Lexicon::new([("note", -34.8), ("america", -49.2), ("capital", -133.9)], 0.0)
    }

    fn frequencies(text: &str) -> TokenFrequencyMap {
        let tokens: Vec<Token> = text.split_whitespace().map(str::to_string).collect();
        count_token_frequencies(&tokens)
    }

    #[test]
    fn test_resolves_matches_in_encounter_order() {
        let match_set = MatchSet::resolve(
            &frequencies("capital note unknown note america"),
            &lexicon(),
            f64::NEG_INFINITY,
            f64::INFINITY,
        );

        let words: Vec<(&str, usize)> = match_set
            .entries()
            .iter()
            .map(|entry| (entry.word.as_str(), entry.count))
            .collect();
        assert_eq!(words, vec![("capital", 1), ("note", 2), ("america", 1)]);
    }

    #[test]
    fn test_bounds_are_exclusive() {
        let match_set = MatchSet::resolve(
            &frequencies("note america capital"),
            &lexicon(),
            -49.2,
            -34.8,
        );

        assert!(match_set.is_empty());

        let match_set = MatchSet::resolve(
            &frequencies("note america capital"),
            &lexicon(),
            -50.0,
            -34.0,
        );

        assert_eq!(match_set.len(), 2);
    }
}
