//! Evidence sources: where the ordered case pool comes from.
//!
//! Consensus only needs an ordered, read-only slice of cases. The sample
//! pool is a static list; a retrieval backend would implement the same trait.

use std::path::Path;

use rustc_hash::FxHashSet;
use tracing::{debug, info};

use crate::errors::{CxrError, CxrResult};
use crate::sample;
use crate::types::EvidenceCase;

/// Supplies the fixed, ordered collection of evidence cases.
pub trait EvidenceSource: Send + Sync {
    /// All cases, in retrieval order.
    fn cases(&self) -> &[EvidenceCase];

    /// Look up a case by id.
    fn get(&self, id: &str) -> Option<&EvidenceCase> {
        self.cases().iter().find(|c| c.id == id)
    }

    fn len(&self) -> usize {
        self.cases().len()
    }

    fn is_empty(&self) -> bool {
        self.cases().is_empty()
    }
}

/// An in-memory evidence pool, validated on construction.
#[derive(Debug, Clone, Default)]
pub struct StaticEvidenceSource {
    cases: Vec<EvidenceCase>,
}

impl StaticEvidenceSource {
    /// Build a source from cases. Rejects empty or duplicate ids and scores
    /// outside [0, 1].
    pub fn new(cases: Vec<EvidenceCase>) -> CxrResult<Self> {
        validate_cases(&cases)?;
        debug!(count = cases.len(), "Evidence source built");
        Ok(Self { cases })
    }

    /// The five-case sample pool.
    pub fn sample() -> Self {
        Self {
            cases: sample::sample_cases(),
        }
    }

    /// Parse a JSON array of cases.
    pub fn from_json_str(json: &str) -> CxrResult<Self> {
        let cases: Vec<EvidenceCase> = serde_json::from_str(json)?;
        Self::new(cases)
    }

    /// Read and parse a JSON array of cases from disk.
    pub fn from_json_file(path: impl AsRef<Path>) -> CxrResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let source = Self::from_json_str(&raw)?;
        info!(path = %path.display(), count = source.len(), "Loaded evidence cases");
        Ok(source)
    }

    pub fn into_cases(self) -> Vec<EvidenceCase> {
        self.cases
    }
}

impl EvidenceSource for StaticEvidenceSource {
    fn cases(&self) -> &[EvidenceCase] {
        &self.cases
    }
}

fn validate_cases(cases: &[EvidenceCase]) -> CxrResult<()> {
    let mut seen = FxHashSet::default();
    for case in cases {
        case.validate()?;
        if !seen.insert(case.id.as_str()) {
            return Err(CxrError::DuplicateCaseId {
                id: case.id.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FindingLabel;

    #[test]
    fn test_sample_source_lookup() {
        let source = StaticEvidenceSource::sample();
        assert_eq!(source.len(), 5);
        assert_eq!(source.get("cxr-2201").unwrap().label, FindingLabel::Normal);
        assert!(source.get("cxr-0000").is_none());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let cases = vec![
            EvidenceCase::new("a", FindingLabel::Normal, 0.5, 0.1),
            EvidenceCase::new("a", FindingLabel::Effusion, 0.6, 0.2),
        ];
        let err = StaticEvidenceSource::new(cases).unwrap_err();
        assert!(matches!(err, CxrError::DuplicateCaseId { ref id } if id == "a"));
    }

    #[test]
    fn test_out_of_range_weight_rejected() {
        let cases = vec![EvidenceCase::new("a", FindingLabel::Normal, 1.5, 0.1)];
        let err = StaticEvidenceSource::new(cases).unwrap_err();
        assert!(matches!(err, CxrError::InvalidCase { .. }));
    }

    #[test]
    fn test_nan_disagreement_rejected() {
        let cases = vec![EvidenceCase::new("a", FindingLabel::Normal, 0.5, f64::NAN)];
        assert!(StaticEvidenceSource::new(cases).is_err());
    }

    #[test]
    fn test_empty_source_is_valid() {
        let source = StaticEvidenceSource::new(Vec::new()).unwrap();
        assert!(source.is_empty());
    }
}
