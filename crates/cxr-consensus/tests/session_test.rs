//! Pruning session lifecycle: Idle → Pruned → Idle.

use cxr_consensus::pruning::{PruningSession, SessionPhase};
use cxr_consensus::report::suggested_phrasing;
use cxr_core::config::{CxrConfig, PruningConfig, ThresholdPolicy};
use cxr_core::errors::CxrError;
use cxr_core::source::StaticEvidenceSource;
use cxr_core::types::FindingLabel;

#[test]
fn full_cycle_on_sample() {
    let source = StaticEvidenceSource::sample();
    let mut session = PruningSession::with_defaults(&source);

    // Preview follows the slider without locking anything.
    session.set_threshold(0.0).unwrap();
    assert_eq!(session.preview().summary.total_pruned, 1);
    session.set_threshold(0.5).unwrap();
    assert_eq!(session.preview().summary.total_pruned, 2);
    assert_eq!(session.phase(), SessionPhase::Idle);
    assert!(!session.is_pruned("cxr-3312"));

    let summary = session.prune().summary.clone();
    assert_eq!(session.phase(), SessionPhase::Pruned);
    assert_eq!(summary.majority_label, FindingLabel::Cardiomegaly);
    assert_eq!(summary.total_kept, 3);
    assert!(session.is_pruned("cxr-3312"));
    assert!(session.is_pruned("cxr-9921"));
    assert!(!session.is_pruned("cxr-1024"));
    assert_eq!(
        suggested_phrasing(&summary),
        "Based on 3 high-confidence evidence cases with 33% agreement, findings suggest cardiomegaly."
    );

    session.reset();
    assert_eq!(session.phase(), SessionPhase::Idle);
    assert_eq!(session.threshold(), 0.5);
    assert!(session.result().is_none());
}

#[test]
fn prune_twice_keeps_first_result() {
    let source = StaticEvidenceSource::sample();
    let mut session = PruningSession::with_defaults(&source);
    session.set_threshold(0.0).unwrap();
    let first = session.prune().clone();
    let second = session.prune().clone();
    assert_eq!(first, second);
    assert_eq!(second.summary.total_kept, 4);
}

#[test]
fn locked_threshold_rejects_changes() {
    let source = StaticEvidenceSource::sample();
    let mut session = PruningSession::with_defaults(&source);
    session.prune();
    let err = session.set_threshold(0.2).unwrap_err();
    assert!(matches!(err, CxrError::ThresholdLocked));
    assert_eq!(session.threshold(), 0.5);
}

#[test]
fn reject_policy_and_configured_default() {
    let source = StaticEvidenceSource::sample();
    let config = CxrConfig::from_toml(
        "[pruning]\ndefault_threshold = 0.65\nthreshold_policy = \"reject\"\n",
    )
    .unwrap();
    let mut session = PruningSession::new(&source, &config.pruning);
    assert_eq!(session.threshold(), 0.65);

    let err = session.set_threshold(-0.1).unwrap_err();
    assert!(matches!(err, CxrError::InvalidThreshold { .. }));
    assert_eq!(session.threshold(), 0.65);

    session.set_threshold(0.1).unwrap();
    session.prune();
    session.reset();
    assert_eq!(session.threshold(), 0.65);
}

#[test]
fn accept_policy_passes_out_of_range_through() {
    let source = StaticEvidenceSource::sample();
    let config = PruningConfig {
        default_threshold: 0.5,
        threshold_policy: ThresholdPolicy::Accept,
    };
    let mut session = PruningSession::new(&source, &config);
    assert_eq!(session.set_threshold(7.0).unwrap(), 7.0);
    let result = session.prune();
    assert!(result.kept.is_empty());
    assert_eq!(result.summary.majority_label, FindingLabel::Unknown);
}

#[test]
fn session_over_trait_object() {
    let source = StaticEvidenceSource::sample();
    let dyn_source: &dyn cxr_core::source::EvidenceSource = &source;
    let mut session = PruningSession::with_defaults(dyn_source);
    assert_eq!(session.prune().summary.total_pruned, 2);
}
