//! Interactive pruning session: a two-state toggle around `evaluate`.
//!
//! `Idle` → `Pruned` on `prune()`, back to `Idle` on `reset()`. The
//! threshold can only move while `Idle`. Reset restores the configured
//! default threshold.

use std::fmt;

use tracing::{info, warn};

use cxr_core::config::{PruningConfig, ThresholdPolicy};
use cxr_core::errors::{CxrError, CxrResult};
use cxr_core::source::EvidenceSource;

use super::consensus::{evaluate, ConsensusResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// No pruning requested; threshold adjustable.
    Idle,
    /// Results computed; threshold locked until reset.
    Pruned,
}

impl fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => f.write_str("idle"),
            Self::Pruned => f.write_str("pruned"),
        }
    }
}

/// Pruning session over a borrowed evidence source.
pub struct PruningSession<'a, S: EvidenceSource + ?Sized> {
    source: &'a S,
    threshold: f64,
    default_threshold: f64,
    policy: ThresholdPolicy,
    /// Present iff the session is `Pruned`.
    result: Option<ConsensusResult<'a>>,
}

impl<'a, S: EvidenceSource + ?Sized> PruningSession<'a, S> {
    pub fn new(source: &'a S, config: &PruningConfig) -> Self {
        Self {
            source,
            threshold: config.default_threshold,
            default_threshold: config.default_threshold,
            policy: config.threshold_policy,
            result: None,
        }
    }

    /// Session with the default config (threshold 0.5, accept any value).
    pub fn with_defaults(source: &'a S) -> Self {
        Self::new(source, &PruningConfig::default())
    }

    pub fn phase(&self) -> SessionPhase {
        if self.result.is_some() {
            SessionPhase::Pruned
        } else {
            SessionPhase::Idle
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Move the threshold. Fails with `ThresholdLocked` once pruned, and
    /// with `InvalidThreshold` when the policy rejects the value. Returns
    /// the threshold actually stored.
    pub fn set_threshold(&mut self, value: f64) -> CxrResult<f64> {
        if self.result.is_some() {
            return Err(CxrError::ThresholdLocked);
        }
        let applied = self.policy.apply(value)?;
        if self.policy == ThresholdPolicy::Clamp && applied != value {
            warn!(requested = value, applied, "Weight threshold clamped");
        }
        self.threshold = applied;
        Ok(applied)
    }

    /// Result for the current threshold without changing phase.
    pub fn preview(&self) -> ConsensusResult<'a> {
        let source: &'a S = self.source;
        evaluate(source.cases(), self.threshold)
    }

    /// Compute and lock in the result. Idempotent while `Pruned`.
    pub fn prune(&mut self) -> &ConsensusResult<'a> {
        let source = self.source;
        let threshold = self.threshold;
        self.result.get_or_insert_with(|| {
            let result = evaluate(source.cases(), threshold);
            info!(
                threshold,
                kept = result.summary.total_kept,
                pruned = result.summary.total_pruned,
                majority = %result.summary.majority_label,
                "Pruned weak evidence"
            );
            result
        })
    }

    /// The locked-in result, if pruned.
    pub fn result(&self) -> Option<&ConsensusResult<'a>> {
        self.result.as_ref()
    }

    /// Whether a case was pruned. Always false while `Idle`.
    pub fn is_pruned(&self, id: &str) -> bool {
        self.result.as_ref().is_some_and(|r| r.is_pruned(id))
    }

    /// Back to `Idle` at the default threshold.
    pub fn reset(&mut self) {
        self.result = None;
        self.threshold = self.default_threshold;
        info!(threshold = self.threshold, "Pruning session reset");
    }
}
