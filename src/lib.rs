mod config;
pub use config::{DEFAULT_MAX_WEIGHT, DEFAULT_MIN_WEIGHT, DEFAULT_N_GRAMS, DEFAULT_PLACES};
mod constants;
pub use constants::INTERCEPT_TERM;
pub mod models;
pub use models::{
    AnalysisOptions, AnalysisResult, DarkTriadTrait, DefaultedOption, Encoding, Error,
    FormattedMatch, Lexicon, LexiconAnalyzer, Lexicons, Locale, LocaleNormalizer, MatchEntry,
    MatchSet, OptionField, Output, ParsedOptions, PerTrait, RawOptions, SortBy, Tokenizer,
    TraitMatches, TraitScores,
};
pub mod types;
mod utils;
pub use types::{
    DecimalPlaces, NGramSize, Token, TokenFrequency, TokenFrequencyMap, TokenRef, Weight,
    WordCount,
};
pub use utils::{
    calc_lexical_value, count_token_frequencies, format_matches, generate_ngrams,
    round_to_places, sort_matches,
};

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

/// Scores `text` against the embedded dark triad lexicons.
///
/// Returns `Ok(None)` when there is no text to score, or when it yields no tokens. An `Err`
/// is only possible if the embedded lexicon dataset fails to load.
#[cfg(feature = "embed-bytes")]
pub fn analyze<'t>(
    text: impl Into<Option<&'t str>>,
    options: &AnalysisOptions,
) -> Result<Option<AnalysisResult>, Error> {
    let lexicons = Lexicons::embedded()?;

    Ok(LexiconAnalyzer::new(lexicons).analyze(text, options))
}

/// Same as [`analyze`], but first validates loosely typed options, falling back to defaults
/// (with a logged warning) for any invalid value.
#[cfg(feature = "embed-bytes")]
pub fn analyze_with_raw_options<'t>(
    text: impl Into<Option<&'t str>>,
    raw_options: &RawOptions,
) -> Result<Option<AnalysisResult>, Error> {
    let parsed_options = raw_options.parse();

    analyze(text, &parsed_options.options)
}
