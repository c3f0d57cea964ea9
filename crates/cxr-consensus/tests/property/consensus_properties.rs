//! Property-based tests for pruning and consensus.
//!
//! - classify is a total, order-preserving partition
//! - raising the weight threshold only moves cases from kept to pruned
//! - agreement ratio stays in (0, 1] for a non-empty kept set
//! - the majority label has the maximum count and wins ties by first sighting

use proptest::prelude::*;

use cxr_consensus::pruning::{classify, label_distribution, summarize};
use cxr_core::types::{EvidenceCase, FindingLabel};

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn arb_label() -> impl Strategy<Value = FindingLabel> {
    prop_oneof![
        Just(FindingLabel::Normal),
        Just(FindingLabel::Cardiomegaly),
        Just(FindingLabel::Pneumonia),
        Just(FindingLabel::Effusion),
        Just(FindingLabel::Pneumothorax),
        Just(FindingLabel::Other("Edema".to_string())),
    ]
}

fn arb_cases() -> impl Strategy<Value = Vec<EvidenceCase>> {
    prop::collection::vec((arb_label(), 0.0f64..=1.0, 0.0f64..=1.0), 0..40).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (label, weight, disagreement))| {
                EvidenceCase::new(format!("case-{i}"), label, weight, disagreement)
            })
            .collect()
    })
}

fn index_of(cases: &[EvidenceCase], id: &str) -> usize {
    cases.iter().position(|c| c.id == id).unwrap()
}

// ---------------------------------------------------------------------------
// Partition
// ---------------------------------------------------------------------------
proptest! {
    #[test]
    fn prop_partition_is_total_and_disjoint(
        cases in arb_cases(),
        threshold in -0.5f64..1.5,
    ) {
        let partition = classify(&cases, threshold);
        prop_assert_eq!(partition.kept.len() + partition.pruned.len(), cases.len());

        let mut seen: Vec<&str> = partition
            .kept
            .iter()
            .chain(partition.pruned.iter())
            .map(|c| c.id.as_str())
            .collect();
        seen.sort_unstable();
        let mut expected: Vec<&str> = cases.iter().map(|c| c.id.as_str()).collect();
        expected.sort_unstable();
        prop_assert_eq!(seen, expected);
    }

    #[test]
    fn prop_partition_preserves_order(
        cases in arb_cases(),
        threshold in 0.0f64..=1.0,
    ) {
        let partition = classify(&cases, threshold);
        for side in [&partition.kept, &partition.pruned] {
            let positions: Vec<usize> = side.iter().map(|c| index_of(&cases, &c.id)).collect();
            prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn prop_threshold_monotonic(
        cases in arb_cases(),
        a in 0.0f64..=1.0,
        b in 0.0f64..=1.0,
    ) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let loose = classify(&cases, low);
        let strict = classify(&cases, high);
        for case in &strict.kept {
            prop_assert!(loose.kept.iter().any(|c| c.id == case.id));
        }
        prop_assert!(strict.kept.len() <= loose.kept.len());
    }

    #[test]
    fn prop_kept_cases_satisfy_rule(
        cases in arb_cases(),
        threshold in 0.0f64..=1.0,
    ) {
        let partition = classify(&cases, threshold);
        for case in &partition.kept {
            prop_assert!(case.weight >= threshold && case.disagreement_score < 0.5);
        }
        for case in &partition.pruned {
            prop_assert!(case.weight < threshold || case.disagreement_score >= 0.5);
        }
    }
}

// ---------------------------------------------------------------------------
// Consensus
// ---------------------------------------------------------------------------
proptest! {
    #[test]
    fn prop_agreement_ratio_bounds(cases in arb_cases()) {
        let kept: Vec<&EvidenceCase> = cases.iter().collect();
        let summary = summarize(&kept, 0);
        if kept.is_empty() {
            prop_assert_eq!(summary.agreement_ratio, 0.0);
            prop_assert_eq!(summary.majority_label, FindingLabel::Unknown);
        } else {
            prop_assert!(summary.agreement_ratio > 0.0);
            prop_assert!(summary.agreement_ratio <= 1.0);
        }
        prop_assert_eq!(summary.total_kept, kept.len());
    }

    #[test]
    fn prop_majority_is_first_maximum(cases in arb_cases()) {
        prop_assume!(!cases.is_empty());
        let kept: Vec<&EvidenceCase> = cases.iter().collect();
        let summary = summarize(&kept, 0);
        let dist = label_distribution(&kept);

        let max = dist.iter().map(|d| d.count).max().unwrap();
        let first_max = dist.iter().find(|d| d.count == max).unwrap();
        prop_assert_eq!(&summary.majority_label, &first_max.label);

        let majority_count = kept.iter().filter(|c| c.label == summary.majority_label).count();
        prop_assert_eq!(summary.agreement_ratio, majority_count as f64 / kept.len() as f64);
        prop_assert_eq!(dist.iter().map(|d| d.count).sum::<usize>(), kept.len());
    }
}
