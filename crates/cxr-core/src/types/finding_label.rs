//! Finding categories attached to evidence cases.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::UNKNOWN_LABEL;

/// A radiological finding category.
///
/// The five named findings cover the sample pool. Anything else an upstream
/// source produces is carried verbatim as `Other`. `Unknown` is the sentinel
/// majority label of an empty consensus and never comes from a source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FindingLabel {
    Normal,
    Cardiomegaly,
    Pneumonia,
    Effusion,
    Pneumothorax,
    Other(String),
    Unknown,
}

impl FindingLabel {
    /// The five named findings, in explorer filter order.
    pub const NAMED: [FindingLabel; 5] = [
        Self::Normal,
        Self::Cardiomegaly,
        Self::Pneumonia,
        Self::Effusion,
        Self::Pneumothorax,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Self::Normal => "Normal",
            Self::Cardiomegaly => "Cardiomegaly",
            Self::Pneumonia => "Pneumonia",
            Self::Effusion => "Effusion",
            Self::Pneumothorax => "Pneumothorax",
            Self::Other(name) => name,
            Self::Unknown => UNKNOWN_LABEL,
        }
    }

    /// Whether this label reports an abnormality.
    pub fn is_abnormal(&self) -> bool {
        !matches!(self, Self::Normal | Self::Unknown)
    }
}

impl From<&str> for FindingLabel {
    fn from(name: &str) -> Self {
        match name {
            "Normal" => Self::Normal,
            "Cardiomegaly" => Self::Cardiomegaly,
            "Pneumonia" => Self::Pneumonia,
            "Effusion" => Self::Effusion,
            "Pneumothorax" => Self::Pneumothorax,
            UNKNOWN_LABEL => Self::Unknown,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for FindingLabel {
    fn from(name: String) -> Self {
        match Self::from(name.as_str()) {
            Self::Other(_) => Self::Other(name),
            named => named,
        }
    }
}

impl From<FindingLabel> for String {
    fn from(label: FindingLabel) -> Self {
        match label {
            FindingLabel::Other(name) => name,
            named => named.as_str().to_string(),
        }
    }
}

impl fmt::Display for FindingLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
