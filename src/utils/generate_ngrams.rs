use crate::types::{NGramSize, Token};
use crate::Tokenizer;

/// Generates every contiguous window of `n` tokens over `text`, each joined with a single
/// space into one token.
///
/// Returns an empty vector when `n` is zero or exceeds the number of tokens in `text`.
///
/// ### Example:
/// ```rust
/// use dark_triad::{generate_ngrams, Tokenizer};
///
/// let bigrams = generate_ngrams(&Tokenizer::text_doc_parser(), "Look at me", 2);
/// assert_eq!(bigrams, vec!["look at", "at me"]);
/// ```
pub fn generate_ngrams(tokenizer: &Tokenizer, text: &str, n: NGramSize) -> Vec<Token> {
    if n == 0 {
        return Vec::new();
    }

    tokenizer
        .tokenize(text)
        .windows(n)
        .map(|window| window.join(" "))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generates_trigrams_in_order() {
        let trigrams = generate_ngrams(&Tokenizer::text_doc_parser(), "a b c d", 3);

        assert_eq!(trigrams, vec!["a b c", "b c d"]);
    }

    #[test]
    fn test_window_larger_than_text_yields_nothing() {
        let ngrams = generate_ngrams(&Tokenizer::text_doc_parser(), "big deal", 3);

        assert!(ngrams.is_empty());
    }

    #[test]
    fn test_zero_size_yields_nothing() {
        let ngrams = generate_ngrams(&Tokenizer::text_doc_parser(), "big deal", 0);

        assert!(ngrams.is_empty());
    }
}
