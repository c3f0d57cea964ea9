//! Evidence explorer: filter the pool by label and text, rank by a score.

use serde::{Deserialize, Serialize};

use cxr_core::config::ExplorerConfig;
use cxr_core::types::{EvidenceCase, FindingLabel, SortKey};

/// A filter-and-sort request over the evidence pool.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerQuery {
    /// Only cases with exactly this label. `None` means all labels.
    pub label: Option<FindingLabel>,
    /// Case-insensitive substring over id, finding, and report snippet.
    pub search: Option<String>,
    pub sort_by: SortKey,
}

impl ExplorerQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty query using the configured default sort.
    pub fn from_config(config: &ExplorerConfig) -> Self {
        Self {
            sort_by: config.default_sort,
            ..Self::default()
        }
    }

    pub fn with_label(mut self, label: FindingLabel) -> Self {
        self.label = Some(label);
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn sorted_by(mut self, key: SortKey) -> Self {
        self.sort_by = key;
        self
    }

    /// Whether a case passes the label and text filters.
    pub fn matches(&self, case: &EvidenceCase) -> bool {
        if self.label.as_ref().is_some_and(|label| *label != case.label) {
            return false;
        }
        match self.search.as_deref() {
            None | Some("") => true,
            Some(needle) => {
                let needle = needle.to_lowercase();
                [&case.id, &case.finding, &case.report_snippet]
                    .iter()
                    .any(|field| field.to_lowercase().contains(&needle))
            }
        }
    }
}

/// The score a sort key ranks by.
pub fn sort_value(case: &EvidenceCase, key: SortKey) -> f64 {
    match key {
        SortKey::Weight => case.weight,
        SortKey::Similarity => case.similarity,
        SortKey::Confidence => case.confidence,
        SortKey::Disagreement => case.disagreement_score,
    }
}

/// Filter then rank. The sort is stable, so equal scores keep pool order.
pub fn explore<'a>(cases: &'a [EvidenceCase], query: &ExplorerQuery) -> Vec<&'a EvidenceCase> {
    let key = query.sort_by;
    let mut results: Vec<&EvidenceCase> = cases.iter().filter(|c| query.matches(c)).collect();
    results.sort_by(|a, b| {
        let (x, y) = (sort_value(a, key), sort_value(b, key));
        if key.descending() {
            y.total_cmp(&x)
        } else {
            x.total_cmp(&y)
        }
    });
    results
}
