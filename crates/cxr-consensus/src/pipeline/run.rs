//! A single analysis run, stepped by an external driver.
//!
//! `Idle` → `Uploading` → `Analyzing { step: 0 }` → ... →
//! `Analyzing { step: n - 1 }` → `Complete`. The run never waits; whoever
//! owns the clock calls `advance()` when a stage's time is up. The uploading
//! phase has its own nominal hold before the first stage.

use std::fmt;
use std::time::Duration;

use tracing::info;

use cxr_core::config::PipelineConfig;
use cxr_core::errors::{CxrError, CxrResult};

use super::stages::{stages_from_config, total_nominal, PipelineStage};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisState {
    Idle,
    Uploading,
    Analyzing { step: usize },
    Complete,
}

impl fmt::Display for AnalysisState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => f.write_str("idle"),
            Self::Uploading => f.write_str("uploading"),
            Self::Analyzing { step } => write!(f, "analyzing[{step}]"),
            Self::Complete => f.write_str("complete"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PipelineRun {
    stages: Vec<PipelineStage>,
    upload_hold: Duration,
    state: AnalysisState,
}

impl PipelineRun {
    /// A run over `stages` with the stock upload hold. At least one stage is
    /// required.
    pub fn new(stages: Vec<PipelineStage>) -> CxrResult<Self> {
        if stages.is_empty() {
            return Err(CxrError::EmptyPipeline);
        }
        Ok(Self {
            stages,
            upload_hold: Duration::from_millis(PipelineConfig::default().upload_hold_ms),
            state: AnalysisState::Idle,
        })
    }

    /// Stages and upload hold taken from `config`.
    pub fn from_config(config: &PipelineConfig) -> Self {
        Self {
            stages: stages_from_config(config),
            upload_hold: Duration::from_millis(config.upload_hold_ms),
            state: AnalysisState::Idle,
        }
    }

    pub fn with_default_stages() -> Self {
        Self::from_config(&PipelineConfig::default())
    }

    pub fn with_upload_hold(mut self, hold: Duration) -> Self {
        self.upload_hold = hold;
        self
    }

    pub fn upload_hold(&self) -> Duration {
        self.upload_hold
    }

    pub fn state(&self) -> AnalysisState {
        self.state
    }

    pub fn stages(&self) -> &[PipelineStage] {
        &self.stages
    }

    /// Begin a run. Valid from `Idle` or after a completed run.
    pub fn start(&mut self) -> CxrResult<()> {
        match self.state {
            AnalysisState::Idle | AnalysisState::Complete => {
                self.transition(AnalysisState::Uploading);
                Ok(())
            }
            from => Err(invalid(from, "uploading")),
        }
    }

    /// Move to the next state and return it.
    pub fn advance(&mut self) -> CxrResult<AnalysisState> {
        let next = match self.state {
            AnalysisState::Uploading => AnalysisState::Analyzing { step: 0 },
            AnalysisState::Analyzing { step } if step + 1 < self.stages.len() => {
                AnalysisState::Analyzing { step: step + 1 }
            }
            AnalysisState::Analyzing { .. } => AnalysisState::Complete,
            from @ (AnalysisState::Idle | AnalysisState::Complete) => {
                return Err(invalid(from, "next stage"));
            }
        };
        self.transition(next);
        Ok(next)
    }

    pub fn reset(&mut self) {
        self.state = AnalysisState::Idle;
    }

    /// Stage currently running, if analyzing.
    pub fn current_stage(&self) -> Option<&PipelineStage> {
        match self.state {
            AnalysisState::Analyzing { step } => self.stages.get(step),
            _ => None,
        }
    }

    pub fn completed_stages(&self) -> usize {
        match self.state {
            AnalysisState::Idle | AnalysisState::Uploading => 0,
            AnalysisState::Analyzing { step } => step,
            AnalysisState::Complete => self.stages.len(),
        }
    }

    /// Completed stages as a fraction of all stages.
    pub fn progress(&self) -> f64 {
        self.completed_stages() as f64 / self.stages.len() as f64
    }

    /// Upload hold plus every stage.
    pub fn total_nominal(&self) -> Duration {
        self.upload_hold + total_nominal(&self.stages)
    }

    /// Nominal time left, counting the current phase in full.
    pub fn remaining_nominal(&self) -> Duration {
        match self.state {
            AnalysisState::Idle | AnalysisState::Uploading => self.total_nominal(),
            _ => total_nominal(&self.stages[self.completed_stages()..]),
        }
    }

    fn transition(&mut self, next: AnalysisState) {
        let stage = match next {
            AnalysisState::Analyzing { step } => self.stages.get(step).map(|s| s.label()),
            _ => None,
        };
        info!(from = %self.state, to = %next, stage, "Pipeline transition");
        self.state = next;
    }
}

fn invalid(from: AnalysisState, to: &str) -> CxrError {
    CxrError::InvalidTransition {
        from: from.to_string(),
        to: to.to_string(),
    }
}
