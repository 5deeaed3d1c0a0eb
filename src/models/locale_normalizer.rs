use crate::constants::GB_TO_US_SPELLINGS;
use regex::{Captures, Regex};
use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::LazyLock;

static GB_SPELLING_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let alternation = GB_TO_US_SPELLINGS
        .iter()
        .map(|(gb, _)| regex::escape(gb))
        .collect::<Vec<_>>()
        .join("|");

    Regex::new(&format!(r"(?i)\b(?:{})\b", alternation))
        .expect("GB spelling table forms a valid pattern")
});

static GB_TO_US_MAP: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| GB_TO_US_SPELLINGS.iter().copied().collect());

/// Rewrites British spellings to their American equivalents.
#[derive(Copy, Clone, Debug, Default)]
pub struct LocaleNormalizer;

impl LocaleNormalizer {
    pub fn new() -> Self {
        Self
    }

    /// Returns the text with every known British spelling replaced. Text with nothing to
    /// replace is returned borrowed.
    pub fn normalize<'a>(&self, text: &'a str) -> Cow<'a, str> {
        GB_SPELLING_PATTERN.replace_all(text, |caps: &Captures| {
            let word = &caps[0];

            match GB_TO_US_MAP.get(word.to_lowercase().as_str()) {
                Some(replacement) => Self::match_case(word, replacement),
                None => word.to_string(),
            }
        })
    }

    /// Carries the casing of `source` over to `replacement` (all caps or leading capital).
    fn match_case(source: &str, replacement: &str) -> String {
        let is_all_caps =
            source.chars().count() > 1 && source.chars().all(|c| !c.is_lowercase());

        if is_all_caps {
            return replacement.to_uppercase();
        }

        match source.chars().next() {
            Some(first) if first.is_uppercase() => {
                let mut chars = replacement.chars();
                match chars.next() {
                    Some(head) => head.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            }
            _ => replacement.to_string(),
        }
    }
}
