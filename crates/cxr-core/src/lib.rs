//! # cxr-core
//!
//! Foundation crate for CXR evidence consensus.
//! Defines the evidence case types, the evidence source trait, the sample
//! dataset, errors, config, tracing, and constants.
//! `cxr-consensus` depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod sample;
pub mod source;
pub mod tracing;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::CxrConfig;
pub use errors::{CxrError, CxrResult};
pub use source::{EvidenceSource, StaticEvidenceSource};
pub use types::{EvidenceCase, FindingLabel};
