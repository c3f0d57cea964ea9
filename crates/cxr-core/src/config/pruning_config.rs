//! Pruning session configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_WEIGHT_THRESHOLD;
use crate::errors::{CxrError, CxrResult};

/// What a pruning session does with a threshold outside [0, 1].
///
/// The pruning rule itself accepts any threshold; this is caller policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThresholdPolicy {
    /// Store the value as given.
    #[default]
    Accept,
    /// Clamp into [0, 1]. Non-finite values are rejected.
    Clamp,
    /// Reject with `InvalidThreshold`.
    Reject,
}

impl ThresholdPolicy {
    /// Apply the policy to a requested threshold.
    pub fn apply(self, value: f64) -> CxrResult<f64> {
        match self {
            Self::Accept => Ok(value),
            Self::Clamp if value.is_finite() => Ok(value.clamp(0.0, 1.0)),
            Self::Reject if is_unit_interval(value) => Ok(value),
            Self::Clamp | Self::Reject => Err(CxrError::InvalidThreshold { value }),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PruningConfig {
    /// Threshold a session starts from and resets to.
    pub default_threshold: f64,
    pub threshold_policy: ThresholdPolicy,
}

impl PruningConfig {
    pub fn validate(&self) -> CxrResult<()> {
        if !is_unit_interval(self.default_threshold) {
            return Err(CxrError::InvalidThreshold {
                value: self.default_threshold,
            });
        }
        Ok(())
    }
}

impl Default for PruningConfig {
    fn default() -> Self {
        Self {
            default_threshold: DEFAULT_WEIGHT_THRESHOLD,
            threshold_policy: ThresholdPolicy::Accept,
        }
    }
}

fn is_unit_interval(value: f64) -> bool {
    value.is_finite() && (0.0..=1.0).contains(&value)
}
