//! Explorer sort keys.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CxrError;

/// Field the evidence explorer ranks by. Score keys sort best-first:
/// weight, similarity, and confidence descending, disagreement ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Weight,
    Similarity,
    Confidence,
    Disagreement,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        Self::Weight,
        Self::Similarity,
        Self::Confidence,
        Self::Disagreement,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Weight => "weight",
            Self::Similarity => "similarity",
            Self::Confidence => "confidence",
            Self::Disagreement => "disagreement",
        }
    }

    /// Whether larger values rank first.
    pub fn descending(self) -> bool {
        !matches!(self, Self::Disagreement)
    }
}

impl FromStr for SortKey {
    type Err = CxrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| CxrError::InvalidSortKey {
                value: s.to_string(),
            })
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
