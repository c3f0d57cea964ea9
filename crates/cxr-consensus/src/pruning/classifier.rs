//! Partition evidence cases into kept and pruned sets.
//!
//! A case is kept iff `weight >= threshold` and
//! `disagreement_score < DISAGREEMENT_CUTOFF`. Only the weight threshold is
//! caller-supplied. It is not range-checked: values outside [0, 1] make the
//! weight test always pass or always fail, and NaN fails every case.

use serde::{Deserialize, Serialize};

use cxr_core::constants::DISAGREEMENT_CUTOFF;
use cxr_core::types::EvidenceCase;

/// Per-case outcome, with the reason when pruned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PruneDecision {
    Kept,
    /// Weight below the threshold.
    BelowWeight,
    /// Disagreement score at or above the cutoff.
    HighDisagreement,
    BelowWeightAndHighDisagreement,
}

impl PruneDecision {
    pub fn is_kept(self) -> bool {
        self == Self::Kept
    }
}

/// Decide a single case.
pub fn decide(case: &EvidenceCase, weight_threshold: f64) -> PruneDecision {
    let meets_weight = case.weight >= weight_threshold;
    let low_disagreement = case.disagreement_score < DISAGREEMENT_CUTOFF;
    match (meets_weight, low_disagreement) {
        (true, true) => PruneDecision::Kept,
        (false, true) => PruneDecision::BelowWeight,
        (true, false) => PruneDecision::HighDisagreement,
        (false, false) => PruneDecision::BelowWeightAndHighDisagreement,
    }
}

/// Two disjoint, order-preserving views over the input whose union is the
/// whole input. Cases are borrowed, never copied or modified.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Partition<'a> {
    pub kept: Vec<&'a EvidenceCase>,
    pub pruned: Vec<&'a EvidenceCase>,
}

impl<'a> Partition<'a> {
    /// Total number of cases classified.
    pub fn len(&self) -> usize {
        self.kept.len() + self.pruned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn kept_ids(&self) -> Vec<&'a str> {
        self.kept.iter().map(|c| c.id.as_str()).collect()
    }

    pub fn pruned_ids(&self) -> Vec<&'a str> {
        self.pruned.iter().map(|c| c.id.as_str()).collect()
    }

    pub fn is_pruned(&self, id: &str) -> bool {
        self.pruned.iter().any(|c| c.id == id)
    }
}

/// Split `cases` into kept and pruned. Never fails; empty in, empty out.
pub fn classify(cases: &[EvidenceCase], weight_threshold: f64) -> Partition<'_> {
    let (kept, pruned): (Vec<&EvidenceCase>, Vec<&EvidenceCase>) = cases
        .iter()
        .partition(|case| decide(case, weight_threshold).is_kept());
    Partition { kept, pruned }
}
