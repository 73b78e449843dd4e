use serde::Serialize;

use super::decisions::ScreeningResults;
use super::domain::{AnalyzedCandidate, DecidedCandidate, ScreeningStatus};

/// Fixed column set of the screening report, in output order.
pub const REPORT_COLUMNS: [&str; 9] = [
    "Name",
    "Email",
    "Phone",
    "Education",
    "Experience",
    "Status",
    "Decision Reason",
    "AI Detected Gaps",
    "AI Confidence",
];

/// Renders the downstream-facing report. The header row is written bare;
/// every data cell is wrapped in double quotes unconditionally, with no
/// escaping of embedded quotes. Consumers of this format expect exactly
/// that framing, so the standard CSV writer is not used here.
pub fn build_report<'a, I>(candidates: I) -> String
where
    I: IntoIterator<Item = &'a DecidedCandidate>,
{
    let mut lines = vec![REPORT_COLUMNS.join(",")];

    for candidate in candidates {
        let cells = [
            candidate.record.name.clone(),
            candidate.record.email.clone(),
            candidate.record.phone.clone(),
            candidate.record.education.clone(),
            candidate.record.experience.clone(),
            candidate.status.label().to_string(),
            candidate.decision_reason.clone(),
            candidate.analysis.gaps.join("; "),
            candidate.analysis.confidence.to_string(),
        ];
        let row: Vec<String> = cells.iter().map(|cell| format!("\"{cell}\"")).collect();
        lines.push(row.join(","));
    }

    lines.join("\n")
}

impl ScreeningResults {
    /// Full report over every bucket, approved first.
    pub fn to_report(&self) -> String {
        build_report(self.export_order())
    }
}

/// Aggregate view of an analyzed batch, before any decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnalysisSummary {
    pub total: usize,
    pub flagged: usize,
    pub clean: usize,
    /// Mean confidence over flagged candidates, rounded. `None` when
    /// nothing was flagged.
    pub average_confidence: Option<u8>,
}

pub fn summarize_analysis(candidates: &[AnalyzedCandidate]) -> AnalysisSummary {
    let flagged: Vec<&AnalyzedCandidate> =
        candidates.iter().filter(|c| c.analysis.has_gaps).collect();

    let average_confidence = if flagged.is_empty() {
        None
    } else {
        let total: u32 = flagged.iter().map(|c| u32::from(c.analysis.confidence)).sum();
        Some(((total as f64 / flagged.len() as f64).round()) as u8)
    };

    AnalysisSummary {
        total: candidates.len(),
        flagged: flagged.len(),
        clean: candidates.len() - flagged.len(),
        average_confidence,
    }
}

/// Aggregate counts for one screening run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScreeningSummary {
    pub total: usize,
    pub flagged: usize,
    pub clean: usize,
    /// Mean confidence over flagged candidates, rounded.
    pub average_confidence: Option<u8>,
    pub auto_approved: usize,
    pub approved: usize,
    pub rejected: usize,
    pub undecided: usize,
}

pub fn summarize(results: &ScreeningResults) -> ScreeningSummary {
    let flagged_confidences: Vec<u8> = results
        .export_order()
        .filter(|c| c.analysis.has_gaps)
        .map(|c| c.analysis.confidence)
        .collect();
    let average_confidence = if flagged_confidences.is_empty() {
        None
    } else {
        let total: u32 = flagged_confidences.iter().map(|&c| u32::from(c)).sum();
        Some(((total as f64 / flagged_confidences.len() as f64).round()) as u8)
    };
    let auto_approved = results
        .approved
        .iter()
        .filter(|c| c.status == ScreeningStatus::AutoApproved)
        .count();

    ScreeningSummary {
        total: results.total(),
        flagged: flagged_confidences.len(),
        clean: results.total() - flagged_confidences.len(),
        average_confidence,
        auto_approved,
        approved: results.approved.len() - auto_approved,
        rejected: results.rejected.len(),
        undecided: results.undecided.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::screening::domain::{CandidateRecord, GapAnalysis};

    fn candidate(name: &str, status: ScreeningStatus, gaps: &[&str], confidence: u8) -> DecidedCandidate {
        DecidedCandidate {
            record: CandidateRecord {
                id: 1,
                name: name.to_string(),
                email: format!("{}@email.com", name.to_lowercase()),
                phone: "555-0100".to_string(),
                education: "MBA, Harvard (2020-2022)".to_string(),
                experience: "Consultant (2022-present)".to_string(),
            },
            analysis: GapAnalysis {
                has_gaps: !gaps.is_empty(),
                gaps: gaps.iter().map(|g| g.to_string()).collect(),
                all_gaps: gaps.iter().map(|g| g.to_string()).collect(),
                confidence,
                analysis_summary: String::new(),
            },
            status,
            decision_reason: match status {
                ScreeningStatus::AutoApproved => "No gaps detected".to_string(),
                ScreeningStatus::NotDecided => "N/A".to_string(),
                _ => "Reviewed".to_string(),
            },
        }
    }

    #[test]
    fn header_row_is_unquoted_and_fixed() {
        let empty: [&DecidedCandidate; 0] = [];
        let report = build_report(empty);
        assert_eq!(
            report,
            "Name,Email,Phone,Education,Experience,Status,Decision Reason,AI Detected Gaps,AI Confidence"
        );
    }

    #[test]
    fn data_cells_are_always_quoted() {
        let flagged = candidate(
            "Jane",
            ScreeningStatus::NotDecided,
            &["Explicit gap mentioned in resume", "Career transition period mentioned"],
            40,
        );
        let report = build_report([&flagged]);
        let lines: Vec<&str> = report.split('\n').collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[1],
            "\"Jane\",\"jane@email.com\",\"555-0100\",\"MBA, Harvard (2020-2022)\",\"Consultant (2022-present)\",\"N/A\",\"N/A\",\"Explicit gap mentioned in resume; Career transition period mentioned\",\"40\""
        );
    }

    #[test]
    fn report_has_no_trailing_newline() {
        let report = build_report([&candidate("Jane", ScreeningStatus::AutoApproved, &[], 0)]);
        assert!(!report.ends_with('\n'));
    }

    #[test]
    fn status_labels_match_bucket_names() {
        assert_eq!(ScreeningStatus::Approved.label(), "Approved");
        assert_eq!(ScreeningStatus::Rejected.label(), "Rejected");
        assert_eq!(ScreeningStatus::AutoApproved.label(), "Auto-Approved");
        assert_eq!(ScreeningStatus::NotDecided.label(), "N/A");
    }

    #[test]
    fn summary_splits_auto_and_reviewed_approvals() {
        let results = ScreeningResults {
            approved: vec![
                candidate("A", ScreeningStatus::AutoApproved, &[], 0),
                candidate("B", ScreeningStatus::Approved, &["Explicit gap mentioned in resume"], 25),
            ],
            rejected: vec![candidate("C", ScreeningStatus::Rejected, &["Explicit gap mentioned in resume"], 25)],
            undecided: vec![candidate("D", ScreeningStatus::NotDecided, &["Explicit gap mentioned in resume"], 25)],
        };

        let summary = summarize(&results);
        assert_eq!(summary.total, 4);
        assert_eq!(summary.flagged, 3);
        assert_eq!(summary.clean, 1);
        assert_eq!(summary.average_confidence, Some(25));
        assert_eq!(summary.auto_approved, 1);
        assert_eq!(summary.approved, 1);
        assert_eq!(summary.rejected, 1);
        assert_eq!(summary.undecided, 1);
    }

    #[test]
    fn analysis_summary_averages_flagged_confidence() {
        use crate::workflows::screening::domain::AnalyzedCandidate;

        let flagged = |confidence: u8| AnalyzedCandidate {
            record: candidate("X", ScreeningStatus::NotDecided, &["finding"], confidence).record,
            analysis: GapAnalysis {
                has_gaps: true,
                gaps: vec!["finding".to_string()],
                all_gaps: vec!["finding".to_string()],
                confidence,
                analysis_summary: String::new(),
            },
        };
        let clean = AnalyzedCandidate {
            record: candidate("Y", ScreeningStatus::AutoApproved, &[], 0).record,
            analysis: GapAnalysis {
                has_gaps: false,
                gaps: Vec::new(),
                all_gaps: Vec::new(),
                confidence: 0,
                analysis_summary: String::new(),
            },
        };

        let summary = summarize_analysis(&[flagged(40), flagged(95), clean.clone()]);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.flagged, 2);
        assert_eq!(summary.clean, 1);
        // (40 + 95) / 2 = 67.5, rounded to 68.
        assert_eq!(summary.average_confidence, Some(68));

        let none_flagged = summarize_analysis(&[clean]);
        assert_eq!(none_flagged.average_confidence, None);
    }
}
