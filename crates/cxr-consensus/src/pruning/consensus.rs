//! Majority-label consensus over the kept set.
//!
//! Labels are counted in scan order. The majority is the label with the
//! highest count; on a tie the label seen first wins.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use cxr_core::types::{EvidenceCase, FindingLabel};

use super::classifier::{classify, Partition};

/// How many kept cases carry a label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelCount {
    pub label: FindingLabel,
    pub count: usize,
}

/// Consensus over a kept set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsensusSummary {
    /// `Unknown` when nothing was kept.
    pub majority_label: FindingLabel,
    /// Share of kept cases with the majority label; 0 when nothing was kept.
    pub agreement_ratio: f64,
    pub total_kept: usize,
    /// Supplied by the caller from the companion partition.
    pub total_pruned: usize,
}

impl ConsensusSummary {
    /// Whether any case survived pruning.
    pub fn has_consensus(&self) -> bool {
        self.total_kept > 0
    }

    /// Agreement ratio as a whole percentage.
    pub fn agreement_percent(&self) -> u32 {
        (self.agreement_ratio * 100.0).round() as u32
    }
}

/// Partition plus consensus for one threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct ConsensusResult<'a> {
    pub kept: Vec<&'a EvidenceCase>,
    pub pruned: Vec<&'a EvidenceCase>,
    pub summary: ConsensusSummary,
}

impl<'a> ConsensusResult<'a> {
    pub fn is_pruned(&self, id: &str) -> bool {
        self.pruned.iter().any(|c| c.id == id)
    }

    pub fn is_kept(&self, id: &str) -> bool {
        self.kept.iter().any(|c| c.id == id)
    }
}

/// Label frequencies over `kept`, in first-seen order.
pub fn label_distribution(kept: &[&EvidenceCase]) -> Vec<LabelCount> {
    let mut slots: FxHashMap<&FindingLabel, usize> = FxHashMap::default();
    let mut counts: Vec<LabelCount> = Vec::new();

    for case in kept {
        let slot = *slots.entry(&case.label).or_insert_with(|| {
            counts.push(LabelCount {
                label: case.label.clone(),
                count: 0,
            });
            counts.len() - 1
        });
        counts[slot].count += 1;
    }

    counts
}

/// Majority label and agreement ratio of `kept`.
pub fn summarize(kept: &[&EvidenceCase], total_pruned: usize) -> ConsensusSummary {
    let distribution = label_distribution(kept);

    // Strictly-greater keeps the earliest label on ties.
    let majority = distribution.iter().fold(None::<&LabelCount>, |best, entry| match best {
        Some(b) if b.count >= entry.count => Some(b),
        _ => Some(entry),
    });

    match majority {
        Some(top) => ConsensusSummary {
            majority_label: top.label.clone(),
            agreement_ratio: top.count as f64 / kept.len() as f64,
            total_kept: kept.len(),
            total_pruned,
        },
        None => ConsensusSummary {
            majority_label: FindingLabel::Unknown,
            agreement_ratio: 0.0,
            total_kept: 0,
            total_pruned,
        },
    }
}

/// Classify then summarize.
pub fn evaluate(cases: &[EvidenceCase], weight_threshold: f64) -> ConsensusResult<'_> {
    let Partition { kept, pruned } = classify(cases, weight_threshold);
    let summary = summarize(&kept, pruned.len());

    debug!(
        threshold = weight_threshold,
        kept = summary.total_kept,
        pruned = summary.total_pruned,
        majority = %summary.majority_label,
        agreement = summary.agreement_ratio,
        "Evaluated evidence consensus"
    );

    ConsensusResult {
        kept,
        pruned,
        summary,
    }
}
