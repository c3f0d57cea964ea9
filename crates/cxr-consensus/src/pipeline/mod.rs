//! Analysis pipeline as an explicit sequence of named stages.

pub mod run;
pub mod stages;

pub use run::{AnalysisState, PipelineRun};
pub use stages::{default_stages, stages_from_config, total_nominal, PipelineStage, StageId};
