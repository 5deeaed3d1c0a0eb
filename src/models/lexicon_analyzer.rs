use crate::types::{Token, WordCount};
use crate::utils::{calc_lexical_value, count_token_frequencies, format_matches, generate_ngrams};
use crate::{
    AnalysisOptions, AnalysisResult, Lexicons, Locale, LocaleNormalizer, MatchSet, Output,
    PerTrait, Tokenizer, TraitMatches, TraitScores,
};
use log::{debug, info, warn};
use std::borrow::Cow;

/// Drives the scoring pipeline: locale normalization, tokenization, n-gram augmentation,
/// frequency counting, per-trait match resolution and output assembly.
pub struct LexiconAnalyzer<'a> {
    lexicons: &'a Lexicons,
    tokenizer: Tokenizer,
    locale_normalizer: LocaleNormalizer,
}

impl<'a> LexiconAnalyzer<'a> {
    pub fn new(lexicons: &'a Lexicons) -> Self {
        Self::with_tokenizer(lexicons, Tokenizer::text_doc_parser())
    }

    pub fn with_tokenizer(lexicons: &'a Lexicons, tokenizer: Tokenizer) -> Self {
        LexiconAnalyzer {
            lexicons,
            tokenizer,
            locale_normalizer: LocaleNormalizer::new(),
        }
    }

    /// Scores `text` against every trait lexicon.
    ///
    /// Returns `None` when there is no text, or when the text yields no tokens.
    pub fn analyze<'t>(
        &self,
        text: impl Into<Option<&'t str>>,
        options: &AnalysisOptions,
    ) -> Option<AnalysisResult> {
        let text = match text.into() {
            Some(text) if !text.trim().is_empty() => text,
            _ => {
                warn!("No input text provided; returning a null result");
                return None;
            }
        };

        let normalized_text = match options.locale {
            Locale::Gb => {
                info!("Normalizing GB spellings...");
                self.locale_normalizer.normalize(text)
            }
            Locale::Us => Cow::Borrowed(text),
        };

        info!("Tokenizing...");
        let tokens = self.tokenizer.tokenize(&normalized_text);

        if tokens.is_empty() {
            warn!("Input text produced no tokens; returning a null result");
            return None;
        }

        info!("Appending n-grams...");
        let (tokens, word_count) = self.append_ngrams(tokens, &normalized_text, options);

        info!("Counting token frequencies...");
        let frequencies = count_token_frequencies(&tokens);

        info!("Resolving lexicon matches...");
        let match_sets = PerTrait::from_fn(|dark_triad_trait| {
            let match_set = MatchSet::resolve(
                &frequencies,
                self.lexicons.get(dark_triad_trait),
                options.min,
                options.max,
            );
            debug!("{}: {} matches", dark_triad_trait, match_set.len());

            match_set
        });

        info!("Assembling {} output...", options.output);
        let result = match options.output {
            Output::Lex => {
                AnalysisResult::Lex(self.calc_trait_scores(&match_sets, word_count, options))
            }
            Output::Matches => AnalysisResult::Matches(Self::format_trait_matches(
                &match_sets,
                word_count,
                options,
            )),
            Output::Full => AnalysisResult::Full {
                values: self.calc_trait_scores(&match_sets, word_count, options),
                matches: Self::format_trait_matches(&match_sets, word_count, options),
            },
        };

        Some(result)
    }

    /// Appends n-grams of each configured size to `tokens` and returns the wordcount used for
    /// scoring. Sizes larger than the base token count are skipped.
    fn append_ngrams(
        &self,
        mut tokens: Vec<Token>,
        normalized_text: &str,
        options: &AnalysisOptions,
    ) -> (Vec<Token>, WordCount) {
        let base_word_count = tokens.len();

        for &n in &options.n_grams {
            // 0 disables n-grams, and unigrams would only repeat the base tokens
            if n < 2 {
                continue;
            }

            if n > base_word_count {
                warn!(
                    "Skipping {}-grams: text has only {} tokens",
                    n, base_word_count
                );
                continue;
            }

            tokens.extend(generate_ngrams(&self.tokenizer, normalized_text, n));
        }

        let word_count = if options.wc_grams {
            tokens.len()
        } else {
            base_word_count
        };

        debug!(
            "Base wordcount: {}, scoring wordcount: {}, total tokens: {}",
            base_word_count,
            word_count,
            tokens.len()
        );

        (tokens, word_count)
    }

    fn calc_trait_scores(
        &self,
        match_sets: &PerTrait<MatchSet>,
        word_count: WordCount,
        options: &AnalysisOptions,
    ) -> TraitScores {
        match_sets.map(|dark_triad_trait, match_set| {
            let intercept = if options.no_int {
                0.0
            } else {
                self.lexicons.get(dark_triad_trait).intercept()
            };

            calc_lexical_value(
                match_set,
                intercept,
                word_count,
                options.encoding,
                options.places,
            )
        })
    }

    fn format_trait_matches(
        match_sets: &PerTrait<MatchSet>,
        word_count: WordCount,
        options: &AnalysisOptions,
    ) -> TraitMatches {
        match_sets.map(|_, match_set| {
            format_matches(
                match_set,
                options.sort_by,
                word_count,
                options.places,
                options.encoding,
            )
        })
    }
}
