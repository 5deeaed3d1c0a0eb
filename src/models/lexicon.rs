use crate::constants::INTERCEPT_TERM;
use crate::types::{Token, TokenRef, Weight};
use crate::{DarkTriadTrait, Error, PerTrait};
use csv::{ReaderBuilder, Trim};
use flate2::read::GzDecoder;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

#[cfg(feature = "embed-bytes")]
use crate::constants::COMPRESSED_LEXICON_BYTES;
#[cfg(feature = "embed-bytes")]
use log::info;
#[cfg(feature = "embed-bytes")]
use std::sync::OnceLock;

/// Weighted terms (words or space-joined n-grams) for a single trait, plus the trait's
/// intercept.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Lexicon {
    terms: HashMap<Token, Weight>,
    intercept: Weight,
}

impl Lexicon {
    /// Terms are stored verbatim; they should already be in the case the tokenizer emits.
    pub fn new<I, T>(terms: I, intercept: Weight) -> Self
    where
        I: IntoIterator<Item = (T, Weight)>,
        T: Into<Token>,
    {
        Lexicon {
            terms: terms
                .into_iter()
                .map(|(term, weight)| (term.into(), weight))
                .collect(),
            intercept,
        }
    }

    pub fn weight(&self, term: &TokenRef) -> Option<Weight> {
        self.terms.get(term).copied()
    }

    pub fn contains(&self, term: &TokenRef) -> bool {
        self.terms.contains_key(term)
    }

    pub fn intercept(&self) -> Weight {
        self.intercept
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

#[derive(Debug, Deserialize)]
struct LexiconRecord {
    category: String,
    term: String,
    weight: Weight,
}

/// The four trait lexicons. Immutable once loaded and safe to share across threads.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Lexicons {
    lexicons: PerTrait<Lexicon>,
}

impl Lexicons {
    pub fn new(lexicons: PerTrait<Lexicon>) -> Self {
        Lexicons { lexicons }
    }

    pub fn get(&self, dark_triad_trait: DarkTriadTrait) -> &Lexicon {
        self.lexicons.get(dark_triad_trait)
    }

    /// Parses `category,term,weight` CSV data.
    ///
    /// `category` names the trait, and the reserved `_intercept` term sets that trait's
    /// intercept. Terms are trimmed and lowercased.
    pub fn from_csv_str(csv: &str) -> Result<Self, Error> {
        Self::from_csv_reader(csv.as_bytes())
    }

    /// Parses gzip-compressed `category,term,weight` CSV data.
    pub fn from_gzipped_csv(bytes: &[u8]) -> Result<Self, Error> {
        Self::from_csv_reader(GzDecoder::new(bytes))
    }

    /// Opens and parses a `category,term,weight` CSV file.
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let file = File::open(path)?;

        Self::from_csv_reader(BufReader::new(file))
    }

    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, Error> {
        let mut lexicons: PerTrait<Lexicon> = PerTrait::default();

        let mut reader = ReaderBuilder::new()
            .has_headers(true) // Ensure headers are expected
            .trim(Trim::All)
            .from_reader(reader);

        // Header read errors are not reported by `deserialize`
        reader.headers()?;

        for (index, record) in reader.deserialize::<LexiconRecord>().enumerate() {
            let record = record?;

            let dark_triad_trait = DarkTriadTrait::from_name(&record.category).ok_or_else(|| {
                Error::LexiconParseError(format!("Unknown category '{}'", record.category))
            })?;

            let term = record.term.to_lowercase();

            if term.is_empty() {
                return Err(Error::LexiconParseError(format!(
                    "Empty term in record {}",
                    index + 1
                )));
            }

            if !record.weight.is_finite() {
                return Err(Error::LexiconParseError(format!(
                    "Non-finite weight for term '{}'",
                    term
                )));
            }

            let lexicon = lexicons.get_mut(dark_triad_trait);

            if term == INTERCEPT_TERM {
                lexicon.intercept = record.weight;
            } else {
                lexicon.terms.insert(term, record.weight);
            }
        }

        Ok(Lexicons::new(lexicons))
    }

    /// The bundled lexicon dataset, decompressed and parsed once per process.
    #[cfg(feature = "embed-bytes")]
    pub fn embedded() -> Result<&'static Lexicons, Error> {
        static EMBEDDED_LEXICONS: OnceLock<Lexicons> = OnceLock::new();

        if let Some(lexicons) = EMBEDDED_LEXICONS.get() {
            return Ok(lexicons);
        }

        info!("Loading embedded lexicons...");
        let lexicons = Self::from_gzipped_csv(COMPRESSED_LEXICON_BYTES)?;

        Ok(EMBEDDED_LEXICONS.get_or_init(|| lexicons))
    }
}
