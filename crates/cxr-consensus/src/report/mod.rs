//! Evidence-grounded reports: the consensus phrasing, the report model,
//! citation checks against the evidence source, and plain-text export.

pub mod grounding;
pub mod phrasing;
pub mod render;

pub use grounding::{check_grounding, GroundingCheck};
pub use phrasing::suggested_phrasing;
pub use render::render_text;

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

use cxr_core::errors::CxrResult;

/// Evidence ids cited by one finding. Most findings cite one or two cases.
pub type EvidenceIds = SmallVec<[String; 2]>;

/// One sentence of the findings section and the cases it cites.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportFinding {
    pub text: String,
    #[serde(default)]
    pub evidence: EvidenceIds,
    pub confidence: f64,
}

impl ReportFinding {
    pub fn new(text: impl Into<String>, evidence: &[&str], confidence: f64) -> Self {
        Self {
            text: text.into(),
            evidence: evidence.iter().map(|id| id.to_string()).collect(),
            confidence,
        }
    }

    pub fn is_supported(&self) -> bool {
        !self.evidence.is_empty()
    }
}

/// A generated radiology report whose findings cite evidence cases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroundedReport {
    pub patient_id: String,
    pub study_date: String,
    pub modality: String,
    pub referring_physician: String,
    pub findings: Vec<ReportFinding>,
    pub impression: String,
    #[serde(default)]
    pub uncertainty_note: Option<String>,
}

impl GroundedReport {
    pub fn from_json_str(json: &str) -> CxrResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_pretty(&self) -> CxrResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Every distinct evidence id cited, in first-citation order.
    pub fn cited_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = Vec::new();
        for id in self.findings.iter().flat_map(|f| f.evidence.iter()) {
            let id = id.as_str();
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        ids
    }
}

/// The P-4921 sample report.
pub fn sample_report() -> GroundedReport {
    GroundedReport {
        patient_id: "P-4921".to_string(),
        study_date: "2026-01-13".to_string(),
        modality: "Chest X-Ray (PA)".to_string(),
        referring_physician: "Dr. R. Patel".to_string(),
        findings: vec![
            ReportFinding::new(
                "The cardiac silhouette is mildly enlarged",
                &["cxr-1024", "cxr-2201"],
                0.94,
            ),
            ReportFinding::new("with cardiothoracic ratio greater than 0.5.", &["cxr-1024"], 0.92),
            ReportFinding::new(
                "The lungs are clear bilaterally",
                &["cxr-2201", "cxr-0592"],
                0.89,
            ),
            ReportFinding::new(
                "with no focal consolidation, pleural effusion, or pneumothorax.",
                &["cxr-2201"],
                0.95,
            ),
            ReportFinding::new(
                "The mediastinal contours are within normal limits.",
                &["cxr-2201"],
                0.91,
            ),
            ReportFinding {
                text: "Bony structures appear intact.".to_string(),
                evidence: smallvec![],
                confidence: 0.88,
            },
        ],
        impression: "Mild cardiomegaly. No acute cardiopulmonary process.".to_string(),
        uncertainty_note: Some(
            "A minority of retrieved cases (20%) suggested possible early pulmonary edema, \
             which warrants clinical correlation."
                .to_string(),
        ),
    }
}
