use crate::types::{Token, TokenFrequency, Weight};
use serde::{Serialize, Serializer};

/// A match as reported to callers. Serializes as the tuple `[word, count, weight, value]`.
#[derive(Clone, Debug, PartialEq)]
pub struct FormattedMatch {
    pub word: Token,
    pub count: TokenFrequency,
    pub weight: Weight,
    /// The match's contribution to the trait score under the requested encoding, rounded.
    pub value: f64,
}

impl Serialize for FormattedMatch {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (&self.word, self.count, self.weight, self.value).serialize(serializer)
    }
}
