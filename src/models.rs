pub mod analysis_options;
pub use analysis_options::{
    AnalysisOptions, DefaultedOption, Encoding, Locale, OptionField, Output, ParsedOptions,
    RawOptions, SortBy,
};

pub mod analysis_result;
pub use analysis_result::{AnalysisResult, TraitMatches, TraitScores};

pub mod dark_triad_trait;
pub use dark_triad_trait::{DarkTriadTrait, PerTrait};

pub mod error;
pub use error::Error;

pub mod formatted_match;
pub use formatted_match::FormattedMatch;

pub mod lexicon;
pub use lexicon::{Lexicon, Lexicons};

pub mod lexicon_analyzer;
pub use lexicon_analyzer::LexiconAnalyzer;

pub mod locale_normalizer;
pub use locale_normalizer::LocaleNormalizer;

pub mod match_set;
pub use match_set::{MatchEntry, MatchSet};

pub mod tokenizer;
pub use tokenizer::Tokenizer;
