pub mod explorer_config;
pub mod observability_config;
pub mod pipeline_config;
pub mod pruning_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::CxrResult;

pub use explorer_config::ExplorerConfig;
pub use observability_config::ObservabilityConfig;
pub use pipeline_config::PipelineConfig;
pub use pruning_config::{PruningConfig, ThresholdPolicy};

/// Top-level configuration aggregating all subsystem configs.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct CxrConfig {
    pub pruning: PruningConfig,
    pub explorer: ExplorerConfig,
    pub pipeline: PipelineConfig,
    pub observability: ObservabilityConfig,
}

impl CxrConfig {
    /// Load config from a TOML string, falling back to defaults for missing fields.
    pub fn from_toml(toml_str: &str) -> CxrResult<Self> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> CxrResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml(&raw)
    }

    /// Check values serde cannot constrain.
    pub fn validate(&self) -> CxrResult<()> {
        self.pruning.validate()
    }
}
