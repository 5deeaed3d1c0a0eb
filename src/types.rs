use indexmap::IndexMap;

// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a token as an owned `String`. Tokens are the basic units used for processing text,
/// and include space-joined n-grams once the token stream has been augmented.
pub type Token = String;

/// Represents a borrowed view of a token as a `str`. This is used when ownership is not required.
pub type TokenRef = str;

/// Represents the total number of occurrences of a token within a text document.
pub type TokenFrequency = usize;

/// Represents a map of tokens to their frequency counts within a text document.
///
/// Keys are kept in the order they were first encountered, which gives match
/// sorting a deterministic tie-breaker.
pub type TokenFrequencyMap = IndexMap<Token, TokenFrequency>;

/// A real-valued lexicon weight for a single term.
pub type Weight = f64;

/// The number of tokens used as the denominator for frequency-based scoring.
pub type WordCount = usize;

/// A single n-gram window size (e.g. `2` for bigrams).
pub type NGramSize = usize;

/// Number of decimal places a score is rounded to.
pub type DecimalPlaces = u32;
