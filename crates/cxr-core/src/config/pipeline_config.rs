//! Analysis pipeline configuration.

use serde::{Deserialize, Serialize};

/// Nominal durations in milliseconds. `upload_hold_ms` is the pause in the
/// uploading phase before the first stage; the rest are per-stage. Nothing in
/// the library waits on them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PipelineConfig {
    pub upload_hold_ms: u64,
    pub upload_ms: u64,
    pub cnn_ms: u64,
    pub retrieval_ms: u64,
    pub weighting_ms: u64,
    pub disagreement_ms: u64,
    pub generation_ms: u64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            upload_hold_ms: 1000,
            upload_ms: 1000,
            cnn_ms: 2500,
            retrieval_ms: 2000,
            weighting_ms: 1500,
            disagreement_ms: 1500,
            generation_ms: 2000,
        }
    }
}
