use crate::config::{DEFAULT_MAX_WEIGHT, DEFAULT_MIN_WEIGHT, DEFAULT_N_GRAMS, DEFAULT_PLACES};
use crate::types::{DecimalPlaces, NGramSize, TokenFrequency, Weight, WordCount};
use log::warn;
use serde::Deserialize;
use serde_json::Value;
use std::fmt;

macro_rules! option_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $label:literal),+ $(,)? } default $default:ident
    ) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn name(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }

            /// Case-insensitive lookup by option value.
            pub fn from_name(name: &str) -> Option<Self> {
                let name = name.trim();

                Self::ALL
                    .iter()
                    .copied()
                    .find(|candidate| candidate.name().eq_ignore_ascii_case(name))
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

option_enum! {
    /// Formula used to combine match weights and counts into a trait score.
    Encoding { Binary => "binary", Freq => "freq", Percent => "percent" } default Freq
}

option_enum! {
    /// Spelling region of the input text. `GB` text is rewritten to American spelling
    /// before tokenizing.
    Locale { Us => "US", Gb => "GB" } default Us
}

option_enum! {
    /// Shape of the analysis result.
    Output { Lex => "lex", Matches => "matches", Full => "full" } default Lex
}

option_enum! {
    /// Ordering of formatted match lists.
    SortBy { Freq => "freq", Lex => "lex", Weight => "weight" } default Freq
}

impl Encoding {
    /// The amount a single match adds to a trait's weighted sum under this encoding.
    pub fn contribution(&self, count: TokenFrequency, weight: Weight, word_count: WordCount) -> f64 {
        match self {
            Encoding::Binary => weight,
            Encoding::Freq if word_count == 0 => 0.0,
            Encoding::Freq => (count as f64 / word_count as f64) * weight,
            Encoding::Percent if word_count == 0 => 0.0,
            Encoding::Percent => 1.0 / word_count as f64,
        }
    }
}

/// Validated, immutable configuration for a single analysis call.
#[derive(Clone, Debug, PartialEq)]
pub struct AnalysisOptions {
    pub encoding: Encoding,
    pub locale: Locale,
    /// Exclusive upper weight bound; terms weighted at or above it are ignored.
    pub max: Weight,
    /// Exclusive lower weight bound; terms weighted at or below it are ignored.
    pub min: Weight,
    /// N-gram sizes appended to the token stream. Sizes below 2 add nothing.
    pub n_grams: Vec<NGramSize>,
    /// Treat every trait intercept as zero.
    pub no_int: bool,
    pub output: Output,
    pub places: DecimalPlaces,
    pub sort_by: SortBy,
    /// Include appended n-grams in the wordcount denominator.
    pub wc_grams: bool,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        AnalysisOptions {
            encoding: Encoding::default(),
            locale: Locale::default(),
            max: DEFAULT_MAX_WEIGHT,
            min: DEFAULT_MIN_WEIGHT,
            n_grams: DEFAULT_N_GRAMS.to_vec(),
            no_int: false,
            output: Output::default(),
            places: DEFAULT_PLACES,
            sort_by: SortBy::default(),
            wc_grams: false,
        }
    }
}

impl AnalysisOptions {
    /// Validates loosely typed options. Invalid values fall back to their defaults and are
    /// reported in [`ParsedOptions::defaulted`].
    pub fn from_raw(raw: &RawOptions) -> ParsedOptions {
        raw.parse()
    }
}

/// Option values as they arrive from JSON or a command line, before validation.
///
/// Keys use the camelCase names (`nGrams`, `noInt`, `sortBy`, `wcGrams`). Unknown keys are
/// ignored and `null` is treated as absent.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawOptions {
    pub encoding: Option<Value>,
    pub locale: Option<Value>,
    pub max: Option<Value>,
    pub min: Option<Value>,
    pub n_grams: Option<Value>,
    pub no_int: Option<Value>,
    pub output: Option<Value>,
    pub places: Option<Value>,
    pub sort_by: Option<Value>,
    pub wc_grams: Option<Value>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum OptionField {
    Encoding,
    Locale,
    Max,
    Min,
    NGrams,
    NoInt,
    Output,
    Places,
    SortBy,
    WcGrams,
}

impl OptionField {
    pub fn name(&self) -> &'static str {
        match self {
            OptionField::Encoding => "encoding",
            OptionField::Locale => "locale",
            OptionField::Max => "max",
            OptionField::Min => "min",
            OptionField::NGrams => "nGrams",
            OptionField::NoInt => "noInt",
            OptionField::Output => "output",
            OptionField::Places => "places",
            OptionField::SortBy => "sortBy",
            OptionField::WcGrams => "wcGrams",
        }
    }
}

impl fmt::Display for OptionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A raw option value which was rejected (wholly or in part) during parsing.
#[derive(Clone, Debug, PartialEq)]
pub struct DefaultedOption {
    pub field: OptionField,
    pub reason: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParsedOptions {
    pub options: AnalysisOptions,
    pub defaulted: Vec<DefaultedOption>,
}

impl ParsedOptions {
    pub fn was_defaulted(&self, field: OptionField) -> bool {
        self.defaulted.iter().any(|defaulted| defaulted.field == field)
    }
}

impl RawOptions {
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn parse(&self) -> ParsedOptions {
        let mut parser = OptionsParser::default();

        let options = AnalysisOptions {
            encoding: parser.parse_enum(OptionField::Encoding, &self.encoding, Encoding::from_name),
            locale: parser.parse_enum(OptionField::Locale, &self.locale, Locale::from_name),
            max: parser.parse_bound(OptionField::Max, &self.max, DEFAULT_MAX_WEIGHT),
            min: parser.parse_bound(OptionField::Min, &self.min, DEFAULT_MIN_WEIGHT),
            n_grams: parser.parse_n_grams(&self.n_grams),
            no_int: parser.parse_bool(OptionField::NoInt, &self.no_int),
            output: parser.parse_enum(OptionField::Output, &self.output, Output::from_name),
            places: parser.parse_places(&self.places),
            sort_by: parser.parse_enum(OptionField::SortBy, &self.sort_by, SortBy::from_name),
            wc_grams: parser.parse_bool(OptionField::WcGrams, &self.wc_grams),
        };

        ParsedOptions {
            options,
            defaulted: parser.defaulted,
        }
    }
}

/// Reads a JSON number as a non-negative integer. Integral floats such as `3.0` are accepted.
fn as_whole_number(value: &Value) -> Option<u64> {
    if let Some(number) = value.as_u64() {
        return Some(number);
    }

    value
        .as_f64()
        .filter(|number| number.is_finite() && *number >= 0.0 && number.fract() == 0.0)
        .filter(|number| *number < u64::MAX as f64)
        .map(|number| number as u64)
}

#[derive(Default)]
struct OptionsParser {
    defaulted: Vec<DefaultedOption>,
}

impl OptionsParser {
    fn fall_back(&mut self, field: OptionField, reason: String) {
        warn!("Invalid `{}` option ({}); using default", field, reason);

        self.defaulted.push(DefaultedOption { field, reason });
    }

    fn parse_enum<T: Copy + Default>(
        &mut self,
        field: OptionField,
        value: &Option<Value>,
        from_name: fn(&str) -> Option<T>,
    ) -> T {
        match value {
            None | Some(Value::Null) => T::default(),
            Some(Value::String(name)) => from_name(name).unwrap_or_else(|| {
                self.fall_back(field, format!("unrecognized value \"{}\"", name));
                T::default()
            }),
            Some(other) => {
                self.fall_back(field, format!("expected a string, got {}", other));
                T::default()
            }
        }
    }

    fn parse_bound(&mut self, field: OptionField, value: &Option<Value>, default: Weight) -> Weight {
        let parsed = match value {
            None | Some(Value::Null) => return default,
            Some(Value::Number(number)) => number.as_f64(),
            Some(Value::String(text)) => text.trim().parse::<f64>().ok(),
            Some(_) => None,
        };

        match parsed.filter(|bound| !bound.is_nan()) {
            Some(bound) => bound,
            None => {
                if let Some(raw) = value {
                    self.fall_back(field, format!("{} is not numeric", raw));
                }
                default
            }
        }
    }

    fn parse_bool(&mut self, field: OptionField, value: &Option<Value>) -> bool {
        match value {
            None | Some(Value::Null) => false,
            Some(Value::Bool(flag)) => *flag,
            Some(Value::String(text)) if text.trim().eq_ignore_ascii_case("true") => true,
            Some(Value::String(text)) if text.trim().eq_ignore_ascii_case("false") => false,
            Some(other) => {
                self.fall_back(field, format!("{} is not a boolean", other));
                false
            }
        }
    }

    fn parse_places(&mut self, value: &Option<Value>) -> DecimalPlaces {
        let parsed = match value {
            None | Some(Value::Null) => return DEFAULT_PLACES,
            Some(number @ Value::Number(_)) => {
                as_whole_number(number).and_then(|places| DecimalPlaces::try_from(places).ok())
            }
            Some(Value::String(text)) => text.trim().parse::<DecimalPlaces>().ok(),
            Some(_) => None,
        };

        match (parsed, value) {
            (Some(places), _) => places,
            (None, Some(raw)) => {
                self.fall_back(
                    OptionField::Places,
                    format!("{} is not a non-negative integer", raw),
                );
                DEFAULT_PLACES
            }
            (None, None) => DEFAULT_PLACES,
        }
    }

    fn parse_n_grams(&mut self, value: &Option<Value>) -> Vec<NGramSize> {
        let entries = match value {
            None | Some(Value::Null) => return DEFAULT_N_GRAMS.to_vec(),
            Some(Value::Array(entries)) => entries.iter().collect::<Vec<_>>(),
            Some(single @ Value::Number(_)) => vec![single],
            Some(other) => {
                self.fall_back(
                    OptionField::NGrams,
                    format!("{} is not a list of n-gram sizes", other),
                );
                return DEFAULT_N_GRAMS.to_vec();
            }
        };

        let mut n_grams = Vec::with_capacity(entries.len());

        for entry in &entries {
            match as_whole_number(entry).and_then(|n| NGramSize::try_from(n).ok()) {
                Some(n) => n_grams.push(n),
                None => self.fall_back(
                    OptionField::NGrams,
                    format!("ignoring invalid n-gram size {}", entry),
                ),
            }
        }

        if n_grams.is_empty() && !entries.is_empty() {
            self.fall_back(
                OptionField::NGrams,
                "no valid n-gram sizes were given".to_string(),
            );
            return DEFAULT_N_GRAMS.to_vec();
        }

        n_grams
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw_from(value: Value) -> RawOptions {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_absent_options_take_defaults_silently() {
        let parsed = RawOptions::default().parse();

        assert_eq!(parsed.options, AnalysisOptions::default());
        assert!(parsed.defaulted.is_empty());
    }

    #[test]
    fn test_parses_well_formed_options() {
        let parsed = raw_from(json!({
            "encoding": "Binary",
            "locale": "gb",
            "max": 0.5,
            "min": "-0.5",
            "nGrams": [2],
            "noInt": true,
            "output": "full",
            "places": 3,
            "sortBy": "weight",
            "wcGrams": "true"
        }))
        .parse();

        assert!(parsed.defaulted.is_empty());
        assert_eq!(
            parsed.options,
            AnalysisOptions {
                encoding: Encoding::Binary,
                locale: Locale::Gb,
                max: 0.5,
                min: -0.5,
                n_grams: vec![2],
                no_int: true,
                output: Output::Full,
                places: 3,
                sort_by: SortBy::Weight,
                wc_grams: true,
            }
        );
    }

    #[test]
    fn test_malformed_bounds_fall_back_to_infinity() {
        let parsed = raw_from(json!({ "max": "lots", "min": [1] })).parse();

        assert_eq!(parsed.options.max, f64::INFINITY);
        assert_eq!(parsed.options.min, f64::NEG_INFINITY);
        assert!(parsed.was_defaulted(OptionField::Max));
        assert!(parsed.was_defaulted(OptionField::Min));
    }

    #[test]
    fn test_unrecognized_output_falls_back_to_lex() {
        let parsed = raw_from(json!({ "output": "everything", "sortBy": 7 })).parse();

        assert_eq!(parsed.options.output, Output::Lex);
        assert_eq!(parsed.options.sort_by, SortBy::Freq);
        assert_eq!(parsed.defaulted.len(), 2);
    }

    #[test]
    fn test_n_grams_accepts_single_integer_and_drops_invalid_entries() {
        let single = raw_from(json!({ "nGrams": 4 })).parse();
        assert_eq!(single.options.n_grams, vec![4]);

        let mixed = raw_from(json!({ "nGrams": [2, "three", -1] })).parse();
        assert_eq!(mixed.options.n_grams, vec![2]);
        assert_eq!(mixed.defaulted.len(), 2);

        let invalid = raw_from(json!({ "nGrams": "bigrams" })).parse();
        assert_eq!(invalid.options.n_grams, DEFAULT_N_GRAMS.to_vec());
        assert!(invalid.was_defaulted(OptionField::NGrams));
    }

    #[test]
    fn test_zero_n_grams_disables_without_fallback() {
        let parsed = raw_from(json!({ "nGrams": [0] })).parse();

        assert_eq!(parsed.options.n_grams, vec![0]);
        assert!(parsed.defaulted.is_empty());
    }

    #[test]
    fn test_integral_floats_are_accepted_as_integers() {
        let parsed = raw_from(json!({ "nGrams": [2.0], "places": 3.0 })).parse();

        assert_eq!(parsed.options.n_grams, vec![2]);
        assert_eq!(parsed.options.places, 3);
        assert!(parsed.defaulted.is_empty());

        let fractional = raw_from(json!({ "nGrams": [2.5], "places": 1.5 })).parse();
        assert_eq!(fractional.options.n_grams, DEFAULT_N_GRAMS.to_vec());
        assert_eq!(fractional.options.places, DEFAULT_PLACES);
        assert!(fractional.was_defaulted(OptionField::NGrams));
        assert!(fractional.was_defaulted(OptionField::Places));
    }

    #[test]
    fn test_non_boolean_flags_fall_back_to_false() {
        let parsed = raw_from(json!({ "noInt": "yes", "wcGrams": 1 })).parse();

        assert!(!parsed.options.no_int);
        assert!(!parsed.options.wc_grams);
        assert!(parsed.was_defaulted(OptionField::NoInt));
        assert!(parsed.was_defaulted(OptionField::WcGrams));
    }

    #[test]
    fn test_empty_n_grams_disables_without_fallback() {
        let parsed = raw_from(json!({ "nGrams": [] })).parse();

        assert!(parsed.options.n_grams.is_empty());
        assert!(parsed.defaulted.is_empty());
    }

    #[test]
    fn test_enum_values_ignore_case() {
        let parsed =
            raw_from(json!({ "output": "FULL", "encoding": "Percent", "sortBy": "LEX" })).parse();

        assert_eq!(parsed.options.output, Output::Full);
        assert_eq!(parsed.options.encoding, Encoding::Percent);
        assert_eq!(parsed.options.sort_by, SortBy::Lex);
        assert!(parsed.defaulted.is_empty());
    }

    #[test]
    fn test_non_numeric_bound_types_fall_back() {
        let parsed = raw_from(json!({ "min": true, "max": { "value": 1 } })).parse();

        assert_eq!(parsed.options.min, f64::NEG_INFINITY);
        assert_eq!(parsed.options.max, f64::INFINITY);
        assert!(parsed.was_defaulted(OptionField::Min));
        assert!(parsed.was_defaulted(OptionField::Max));
    }

    #[test]
    fn test_invalid_places_fall_back_to_default() {
        let parsed = raw_from(json!({ "places": -2 })).parse();

        assert_eq!(parsed.options.places, DEFAULT_PLACES);
        assert!(parsed.was_defaulted(OptionField::Places));
    }

    #[test]
    fn test_percent_contribution_is_reciprocal_wordcount() {
        assert_eq!(Encoding::Percent.contribution(3, -34.8, 4), 0.25);
        assert_eq!(Encoding::Binary.contribution(3, -34.8, 4), -34.8);
        assert_eq!(Encoding::Freq.contribution(1, 2.0, 0), 0.0);
    }
}
