//! Evidence pruning: threshold classification, majority-label consensus,
//! and the interactive session around them.

pub mod classifier;
pub mod consensus;
pub mod session;

pub use classifier::{classify, decide, Partition, PruneDecision};
pub use consensus::{
    evaluate, label_distribution, summarize, ConsensusResult, ConsensusSummary, LabelCount,
};
pub use cxr_core::constants::DISAGREEMENT_CUTOFF;
pub use session::{PruningSession, SessionPhase};
