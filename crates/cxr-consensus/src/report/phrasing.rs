use crate::pruning::ConsensusSummary;

/// One-sentence wording a report can use for the consensus finding.
pub fn suggested_phrasing(summary: &ConsensusSummary) -> String {
    format!(
        "Based on {} high-confidence evidence cases with {}% agreement, findings suggest {}.",
        summary.total_kept,
        summary.agreement_percent(),
        summary.majority_label.as_str().to_lowercase(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use cxr_core::types::FindingLabel;

    #[test]
    fn test_phrasing() {
        let summary = ConsensusSummary {
            majority_label: FindingLabel::Cardiomegaly,
            agreement_ratio: 1.0 / 3.0,
            total_kept: 3,
            total_pruned: 2,
        };
        assert_eq!(
            suggested_phrasing(&summary),
            "Based on 3 high-confidence evidence cases with 33% agreement, findings suggest cardiomegaly."
        );
    }
}
