#![cfg(feature = "embed-bytes")]

use dark_triad::{
    analyze, analyze_with_raw_options, AnalysisOptions, AnalysisResult, Output, RawOptions,
};
use serde_json::json;

const TEXT: &str = "I deserve to win. Whatever, I don't care about your feelings; \
                    I will manipulate and control them, and I hate weak people.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_scores_every_trait() {
        let result = analyze(TEXT, &AnalysisOptions::default())
            .expect("Failed to load embedded lexicons")
            .expect("Expected a result");

        let values = result.values().expect("Lex output has values");
        for (dark_triad_trait, score) in values.iter() {
            assert!(score.is_some(), "{} score is null", dark_triad_trait);
        }
    }

    #[test]
    fn test_analyze_empty_text_is_null() {
        assert_eq!(analyze("", &AnalysisOptions::default()).unwrap(), None);
        assert_eq!(analyze(None::<&str>, &AnalysisOptions::default()).unwrap(), None);
    }

    #[test]
    fn test_matches_include_ngram_terms() {
        let options = AnalysisOptions {
            output: Output::Matches,
            ..Default::default()
        };

        let result = analyze(TEXT, &options).unwrap().expect("Expected a result");
        let matches = result.matches().expect("Matches output has matches");

        assert!(matches
            .psychopathy
            .iter()
            .any(|formatted_match| formatted_match.word == "don't care"));
        assert!(matches
            .triad
            .iter()
            .any(|formatted_match| formatted_match.word == "i deserve"));
    }

    #[test]
    fn test_raw_options_fall_back_to_lex_output() {
        let raw_options: RawOptions =
            serde_json::from_value(json!({ "output": "summary", "places": 2 })).unwrap();

        let result = analyze_with_raw_options(TEXT, &raw_options)
            .unwrap()
            .expect("Expected a result");

        assert!(matches!(result, AnalysisResult::Lex(_)));

        let json = result.to_json();
        for key in ["triad", "narcissism", "machiavellianism", "psychopathy"] {
            let score = json[key].as_f64().expect("Score should be a number");
            assert_eq!(score, (score * 100.0).round() / 100.0);
        }
    }
}
