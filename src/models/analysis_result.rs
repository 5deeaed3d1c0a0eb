use crate::{FormattedMatch, PerTrait};
use serde::Serialize;

/// Rounded score per trait; `None` where there was nothing to score.
pub type TraitScores = PerTrait<Option<f64>>;

/// Sorted matches per trait.
pub type TraitMatches = PerTrait<Vec<FormattedMatch>>;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnalysisResult {
    Lex(TraitScores),
    Matches(TraitMatches),
    Full {
        values: TraitScores,
        matches: TraitMatches,
    },
}

impl AnalysisResult {
    pub fn values(&self) -> Option<&TraitScores> {
        match self {
            AnalysisResult::Lex(values) | AnalysisResult::Full { values, .. } => Some(values),
            AnalysisResult::Matches(_) => None,
        }
    }

    pub fn matches(&self) -> Option<&TraitMatches> {
        match self {
            AnalysisResult::Matches(matches) | AnalysisResult::Full { matches, .. } => {
                Some(matches)
            }
            AnalysisResult::Lex(_) => None,
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}
