//! The hand-authored five-case evidence pool.

use crate::types::{EvidenceCase, FindingLabel};

struct SampleRow {
    id: &'static str,
    patient_id: &'static str,
    finding: &'static str,
    label: FindingLabel,
    confidence: f64,
    similarity: f64,
    weight: f64,
    disagreement_score: f64,
    report_snippet: &'static str,
    image_url: &'static str,
}

const SAMPLE_ROWS: [SampleRow; 5] = [
    SampleRow {
        id: "cxr-1024",
        patient_id: "P-4921",
        finding: "Cardiomegaly",
        label: FindingLabel::Cardiomegaly,
        confidence: 0.94,
        similarity: 0.88,
        weight: 0.82,
        disagreement_score: 0.1,
        report_snippet: "Cardiac silhouette is enlarged with CTR > 0.5. No obvious pulmonary edema.",
        image_url: "https://images.unsplash.com/photo-1530497610245-94d3c16cda28?auto=format&fit=crop&q=80&w=300&h=300",
    },
    SampleRow {
        id: "cxr-0592",
        patient_id: "P-3810",
        finding: "Pneumonia",
        label: FindingLabel::Pneumonia,
        confidence: 0.89,
        similarity: 0.76,
        weight: 0.67,
        disagreement_score: 0.3,
        report_snippet: "Opacification seen in the right lower lobe consistent with consolidation.",
        image_url: "https://images.unsplash.com/photo-1579154204601-01588f351e67?auto=format&fit=crop&q=80&w=300&h=300",
    },
    SampleRow {
        id: "cxr-2201",
        patient_id: "P-9002",
        finding: "No Finding",
        label: FindingLabel::Normal,
        confidence: 0.98,
        similarity: 0.92,
        weight: 0.90,
        disagreement_score: 0.05,
        report_snippet: "Lungs are clear. Heart size is normal. No pleural effusion.",
        image_url: "https://images.unsplash.com/photo-1530497610245-94d3c16cda28?auto=format&fit=crop&q=80&w=300&h=300",
    },
    SampleRow {
        id: "cxr-3312",
        patient_id: "P-1123",
        finding: "Effusion",
        label: FindingLabel::Effusion,
        confidence: 0.72,
        similarity: 0.65,
        weight: 0.46,
        disagreement_score: 0.6,
        report_snippet: "Blunting of the costophrenic angles suggests small pleural effusion.",
        image_url: "https://images.unsplash.com/photo-1576091160399-112ba8d25d1d?auto=format&fit=crop&q=80&w=300&h=300",
    },
    SampleRow {
        id: "cxr-9921",
        patient_id: "P-7721",
        finding: "Pneumothorax",
        label: FindingLabel::Pneumothorax,
        confidence: 0.81,
        similarity: 0.55,
        weight: 0.44,
        disagreement_score: 0.4,
        report_snippet: "Small visualization of visceral pleural line in right apex.",
        image_url: "https://images.unsplash.com/photo-1584036561566-b93a901e3ae3?auto=format&fit=crop&q=80&w=300&h=300",
    },
];

/// The sample pool, in retrieval order.
pub fn sample_cases() -> Vec<EvidenceCase> {
    SAMPLE_ROWS
        .iter()
        .map(|row| EvidenceCase {
            id: row.id.to_string(),
            patient_id: row.patient_id.to_string(),
            modality: "CXR".to_string(),
            finding: row.finding.to_string(),
            label: row.label.clone(),
            confidence: row.confidence,
            similarity: row.similarity,
            weight: row.weight,
            disagreement_score: row.disagreement_score,
            report_snippet: row.report_snippet.to_string(),
            image_url: row.image_url.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_scores() {
        let cases = sample_cases();
        let weights: Vec<f64> = cases.iter().map(|c| c.weight).collect();
        let disagreement: Vec<f64> = cases.iter().map(|c| c.disagreement_score).collect();
        assert_eq!(weights, vec![0.82, 0.67, 0.90, 0.46, 0.44]);
        assert_eq!(disagreement, vec![0.1, 0.3, 0.05, 0.6, 0.4]);
    }

    #[test]
    fn test_sample_cases_validate() {
        for case in sample_cases() {
            assert!(case.validate().is_ok(), "{} failed validation", case.id);
            assert_eq!(case.modality, "CXR");
        }
    }
}
