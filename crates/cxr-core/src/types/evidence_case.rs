//! A retrieved reference case and the scores attached to it upstream.

use serde::{Deserialize, Serialize};

use super::FindingLabel;
use crate::errors::{CxrError, CxrResult};

/// A retrieved evidence case.
///
/// `weight` (similarity × confidence) and `disagreement_score` are computed
/// upstream; this crate only reads them. The remaining fields are carried
/// for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvidenceCase {
    /// Unique case identifier, e.g. `cxr-1024`.
    pub id: String,
    #[serde(default)]
    pub patient_id: String,
    #[serde(default)]
    pub modality: String,
    /// Free-text finding as written in the source report.
    #[serde(default)]
    pub finding: String,
    /// Finding category used for consensus.
    pub label: FindingLabel,
    #[serde(default)]
    pub confidence: f64,
    #[serde(default)]
    pub similarity: f64,
    /// Relevance weight in [0, 1].
    pub weight: f64,
    /// Conflict score in [0, 1].
    pub disagreement_score: f64,
    #[serde(default)]
    pub report_snippet: String,
    #[serde(default)]
    pub image_url: String,
}

impl EvidenceCase {
    /// Create a case with only the fields consensus reads. Display fields
    /// default to empty, with `finding` mirroring the label.
    pub fn new(
        id: impl Into<String>,
        label: FindingLabel,
        weight: f64,
        disagreement_score: f64,
    ) -> Self {
        Self {
            id: id.into(),
            patient_id: String::new(),
            modality: String::new(),
            finding: label.to_string(),
            label,
            confidence: 0.0,
            similarity: 0.0,
            weight,
            disagreement_score,
            report_snippet: String::new(),
            image_url: String::new(),
        }
    }

    /// Check that the case can take part in consensus: non-empty id, a real
    /// finding label, finite weight and disagreement score within [0, 1].
    pub fn validate(&self) -> CxrResult<()> {
        if self.id.trim().is_empty() {
            return Err(self.invalid("id is empty".to_string()));
        }
        if self.label == FindingLabel::Unknown {
            return Err(self.invalid(format!(
                "label {} is reserved for an empty consensus",
                self.label
            )));
        }
        for (name, value) in [
            ("weight", self.weight),
            ("disagreementScore", self.disagreement_score),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(self.invalid(format!("{name} {value} outside [0, 1]")));
            }
        }
        Ok(())
    }

    fn invalid(&self, reason: String) -> CxrError {
        CxrError::InvalidCase {
            id: self.id.clone(),
            reason,
        }
    }
}
