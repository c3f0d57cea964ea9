//! Evidence explorer configuration.

use serde::{Deserialize, Serialize};

use crate::types::SortKey;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ExplorerConfig {
    /// Sort order used when a query does not specify one.
    pub default_sort: SortKey,
}
