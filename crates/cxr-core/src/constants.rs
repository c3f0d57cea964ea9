//! Fixed constants shared across the workspace.

/// Cases with a disagreement score at or above this value are always pruned.
/// Not configurable: only the weight threshold is exposed to callers.
pub const DISAGREEMENT_CUTOFF: f64 = 0.5;

/// Weight threshold a pruning session starts from and returns to on reset.
pub const DEFAULT_WEIGHT_THRESHOLD: f64 = 0.5;

/// Label reported as the majority when no case survives pruning.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Default log filter when neither config nor `RUST_LOG` provides one.
pub const DEFAULT_LOG_LEVEL: &str = "info";
