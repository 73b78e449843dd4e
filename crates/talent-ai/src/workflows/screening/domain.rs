use serde::{Deserialize, Serialize};

/// One candidate row lifted from an uploaded file.
///
/// `id` is the 1-based position of the row among the non-blank lines of
/// the source (the header sits at position 0). Rows skipped during intake
/// still consume positions, so ids stay stable across re-parses and are
/// the join key between analysis and decisions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateRecord {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub education: String,
    pub experience: String,
}

/// Verdict produced by the gap analyzer for a single candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GapAnalysis {
    pub has_gaps: bool,
    /// Findings surviving exception filtering, in detection order.
    pub gaps: Vec<String>,
    /// Every finding detected, before exception filtering.
    pub all_gaps: Vec<String>,
    /// 0-95. Accumulated from all findings (filtering does not subtract
    /// weight), forced to zero when nothing survives the filter.
    pub confidence: u8,
    pub analysis_summary: String,
}

/// Candidate paired with its analysis verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzedCandidate {
    pub record: CandidateRecord,
    pub analysis: GapAnalysis,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecisionOutcome {
    Approve,
    Reject,
}

/// Human adjudication for one flagged candidate, joined by record id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    pub candidate_id: u32,
    pub outcome: DecisionOutcome,
    pub reason: String,
}

/// Final disposition of a candidate after human review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScreeningStatus {
    Approved,
    Rejected,
    AutoApproved,
    NotDecided,
}

impl ScreeningStatus {
    pub const fn label(self) -> &'static str {
        match self {
            ScreeningStatus::Approved => "Approved",
            ScreeningStatus::Rejected => "Rejected",
            ScreeningStatus::AutoApproved => "Auto-Approved",
            ScreeningStatus::NotDecided => "N/A",
        }
    }
}

/// Candidate carrying its verdict and final disposition, ready for export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecidedCandidate {
    pub record: CandidateRecord,
    pub analysis: GapAnalysis,
    pub status: ScreeningStatus,
    pub decision_reason: String,
}
