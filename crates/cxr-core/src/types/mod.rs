pub mod evidence_case;
pub mod finding_label;
pub mod sort_key;

pub use evidence_case::EvidenceCase;
pub use finding_label::FindingLabel;
pub use sort_key::SortKey;
