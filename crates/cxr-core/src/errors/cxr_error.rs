/// Top-level error type for CXR evidence consensus.
///
/// Pruning and consensus are total and never produce one of these; only the
/// edges do (loading evidence, reading config, session and pipeline transitions).
#[derive(Debug, thiserror::Error)]
pub enum CxrError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("invalid evidence case {id}: {reason}")]
    InvalidCase { id: String, reason: String },

    #[error("duplicate evidence case id: {id}")]
    DuplicateCaseId { id: String },

    #[error("unknown sort key: {value}")]
    InvalidSortKey { value: String },

    #[error("invalid weight threshold: {value}")]
    InvalidThreshold { value: f64 },

    #[error("weight threshold is locked until the session is reset")]
    ThresholdLocked,

    #[error("invalid transition: {from} → {to}")]
    InvalidTransition { from: String, to: String },

    #[error("pipeline has no stages")]
    EmptyPipeline,
}

/// Convenience type alias.
pub type CxrResult<T> = Result<T, CxrError>;
