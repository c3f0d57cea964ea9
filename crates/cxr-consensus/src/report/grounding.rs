//! Check that a report's findings cite evidence the source can resolve.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use cxr_core::source::EvidenceSource;

use super::GroundedReport;

/// Outcome of checking a report's citations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroundingCheck {
    pub total_findings: usize,
    /// Findings citing at least one evidence id.
    pub supported_findings: usize,
    /// Text of findings with no citation.
    pub unsupported: Vec<String>,
    /// Cited ids the source does not know, in first-citation order.
    pub unresolved_ids: Vec<String>,
}

impl GroundingCheck {
    /// Supported findings over all findings; 0 for an empty report.
    pub fn grounded_ratio(&self) -> f64 {
        if self.total_findings == 0 {
            return 0.0;
        }
        self.supported_findings as f64 / self.total_findings as f64
    }

    /// Every citation resolves against the source.
    pub fn citations_resolve(&self) -> bool {
        self.unresolved_ids.is_empty()
    }
}

/// Count supported findings and resolve every citation against `source`.
pub fn check_grounding<S: EvidenceSource + ?Sized>(
    report: &GroundedReport,
    source: &S,
) -> GroundingCheck {
    let unsupported: Vec<String> = report
        .findings
        .iter()
        .filter(|f| !f.is_supported())
        .map(|f| f.text.clone())
        .collect();

    let unresolved_ids: Vec<String> = report
        .cited_ids()
        .into_iter()
        .filter(|id| source.get(id).is_none())
        .map(str::to_string)
        .collect();

    if !unresolved_ids.is_empty() {
        warn!(
            patient = %report.patient_id,
            unresolved = ?unresolved_ids,
            "Report cites evidence missing from the source"
        );
    }

    let check = GroundingCheck {
        total_findings: report.findings.len(),
        supported_findings: report.findings.len() - unsupported.len(),
        unsupported,
        unresolved_ids,
    };
    debug!(
        patient = %report.patient_id,
        supported = check.supported_findings,
        total = check.total_findings,
        "Checked report grounding"
    );
    check
}
