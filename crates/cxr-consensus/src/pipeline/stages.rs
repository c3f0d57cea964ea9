//! The six named analysis stages and their nominal durations.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use cxr_core::config::PipelineConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StageId {
    Upload,
    Cnn,
    Retrieval,
    Weighting,
    Disagreement,
    Generation,
}

impl StageId {
    /// All stages, in execution order.
    pub const ALL: [StageId; 6] = [
        Self::Upload,
        Self::Cnn,
        Self::Retrieval,
        Self::Weighting,
        Self::Disagreement,
        Self::Generation,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Upload => "upload",
            Self::Cnn => "cnn",
            Self::Retrieval => "retrieval",
            Self::Weighting => "weighting",
            Self::Disagreement => "disagreement",
            Self::Generation => "generation",
        }
    }

    /// Human-readable stage name.
    pub fn label(self) -> &'static str {
        match self {
            Self::Upload => "Image Upload",
            Self::Cnn => "CNN Inference",
            Self::Retrieval => "FAISS Retrieval",
            Self::Weighting => "Evidence Weighting",
            Self::Disagreement => "Disagreement Check",
            Self::Generation => "Report Generation",
        }
    }

    fn configured_ms(self, config: &PipelineConfig) -> u64 {
        match self {
            Self::Upload => config.upload_ms,
            Self::Cnn => config.cnn_ms,
            Self::Retrieval => config.retrieval_ms,
            Self::Weighting => config.weighting_ms,
            Self::Disagreement => config.disagreement_ms,
            Self::Generation => config.generation_ms,
        }
    }
}

impl fmt::Display for StageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineStage {
    pub id: StageId,
    /// How long the stage is expected to take. Informational only.
    pub nominal_duration: Duration,
}

impl PipelineStage {
    pub fn new(id: StageId, nominal_duration: Duration) -> Self {
        Self {
            id,
            nominal_duration,
        }
    }

    pub fn label(&self) -> &'static str {
        self.id.label()
    }
}

/// Stages with durations taken from `config`.
pub fn stages_from_config(config: &PipelineConfig) -> Vec<PipelineStage> {
    StageId::ALL
        .into_iter()
        .map(|id| PipelineStage::new(id, Duration::from_millis(id.configured_ms(config))))
        .collect()
}

/// Stages with the stock durations.
pub fn default_stages() -> Vec<PipelineStage> {
    stages_from_config(&PipelineConfig::default())
}

/// Sum of nominal durations.
pub fn total_nominal(stages: &[PipelineStage]) -> Duration {
    stages.iter().map(|s| s.nominal_duration).sum()
}
