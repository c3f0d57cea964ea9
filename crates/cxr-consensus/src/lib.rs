//! # cxr-consensus
//!
//! Evidence pruning and consensus for CXR report grounding.
//!
//! ## Modules
//! - `pruning` — threshold classification, majority-label consensus, interactive session
//! - `explorer` — label filter, text search, ranked sort over the evidence pool
//! - `report` — consensus phrasing, grounded report model, citation checks, text export
//! - `pipeline` — named analysis stages and a run state machine driven from outside

pub mod explorer;
pub mod pipeline;
pub mod pruning;
pub mod report;

pub use explorer::{explore, ExplorerQuery};
pub use pipeline::{AnalysisState, PipelineRun, PipelineStage, StageId};
pub use pruning::{
    classify, evaluate, summarize, ConsensusResult, ConsensusSummary, Partition, PruneDecision,
    PruningSession, SessionPhase,
};
pub use report::{check_grounding, suggested_phrasing, GroundedReport, GroundingCheck};
