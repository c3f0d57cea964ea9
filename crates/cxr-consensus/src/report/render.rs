use std::fmt::Write;

use super::GroundedReport;

/// Plain-text export of a report.
///
/// Findings are joined into one paragraph with their citations appended as
/// `[id, id]`. Uncited findings carry no marker.
pub fn render_text(report: &GroundedReport) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "RADIOLOGY REPORT");
    let _ = writeln!(out, "Patient: {}", report.patient_id);
    let _ = writeln!(out, "Study date: {}", report.study_date);
    let _ = writeln!(out, "Modality: {}", report.modality);
    let _ = writeln!(out, "Referring physician: {}", report.referring_physician);
    out.push('\n');

    let findings: Vec<String> = report
        .findings
        .iter()
        .map(|f| {
            if f.evidence.is_empty() {
                f.text.clone()
            } else {
                format!("{} [{}]", f.text, f.evidence.join(", "))
            }
        })
        .collect();
    let _ = writeln!(out, "FINDINGS:\n{}", findings.join(" "));
    out.push('\n');
    let _ = writeln!(out, "IMPRESSION:\n{}", report.impression);

    if let Some(note) = &report.uncertainty_note {
        out.push('\n');
        let _ = writeln!(out, "UNCERTAINTY:\n{note}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::sample_report;

    #[test]
    fn test_render_sections() {
        let text = render_text(&sample_report());
        assert!(text.starts_with("RADIOLOGY REPORT\nPatient: P-4921\n"));
        assert!(text.contains("mildly enlarged [cxr-1024, cxr-2201]"));
        assert!(text.contains("Bony structures appear intact.\n"));
        assert!(text.contains("IMPRESSION:\nMild cardiomegaly."));
        assert!(text.contains("UNCERTAINTY:\n"));
    }

    #[test]
    fn test_render_without_note() {
        let mut report = sample_report();
        report.uncertainty_note = None;
        assert!(!render_text(&report).contains("UNCERTAINTY"));
    }
}
