use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use super::domain::{
    AnalyzedCandidate, DecidedCandidate, Decision, DecisionOutcome, ScreeningStatus,
};

#[derive(Debug, Error)]
pub enum DecisionImportError {
    #[error("failed to read decisions file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse decisions file: {0}")]
    Csv(#[from] csv::Error),
    #[error("unknown decision outcome '{0}', expected 'approve' or 'reject'")]
    UnknownOutcome(String),
}

#[derive(Debug, Deserialize)]
struct DecisionRow {
    candidate_id: u32,
    outcome: String,
    #[serde(default)]
    reason: String,
}

/// Loads reviewer decisions from a `candidate_id,outcome,reason` CSV.
/// Outcomes are matched case-insensitively.
pub fn decisions_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Decision>, DecisionImportError> {
    let file = std::fs::File::open(path)?;
    decisions_from_reader(file)
}

pub fn decisions_from_reader<R: Read>(reader: R) -> Result<Vec<Decision>, DecisionImportError> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let mut decisions = Vec::new();
    for row in csv_reader.deserialize::<DecisionRow>() {
        let row = row?;
        let outcome = match row.outcome.to_lowercase().as_str() {
            "approve" => DecisionOutcome::Approve,
            "reject" => DecisionOutcome::Reject,
            other => return Err(DecisionImportError::UnknownOutcome(other.to_string())),
        };
        decisions.push(Decision {
            candidate_id: row.candidate_id,
            outcome,
            reason: row.reason,
        });
    }

    Ok(decisions)
}

/// A screening run split by final status, preserving each bucket's
/// original candidate order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreeningResults {
    pub approved: Vec<DecidedCandidate>,
    pub rejected: Vec<DecidedCandidate>,
    pub undecided: Vec<DecidedCandidate>,
}

impl ScreeningResults {
    /// Export ordering: approved, then rejected, then undecided.
    pub fn export_order(&self) -> impl Iterator<Item = &DecidedCandidate> {
        self.approved
            .iter()
            .chain(self.rejected.iter())
            .chain(self.undecided.iter())
    }

    pub fn total(&self) -> usize {
        self.approved.len() + self.rejected.len() + self.undecided.len()
    }

    /// Share of decided candidates that were approved, as a percentage.
    /// `None` when nothing has been decided yet.
    pub fn approval_rate(&self) -> Option<f64> {
        let decided = self.approved.len() + self.rejected.len();
        if decided == 0 {
            return None;
        }
        Some(self.approved.len() as f64 * 100.0 / decided as f64)
    }
}

/// Joins reviewer decisions onto analyzed candidates by id. Candidates
/// with no surviving findings are auto-approved regardless of reviewer
/// input; flagged candidates without a decision stay undecided. When the
/// same id appears in several decisions the last one wins.
pub fn apply_decisions(
    candidates: &[AnalyzedCandidate],
    decisions: &[Decision],
) -> ScreeningResults {
    let by_id: HashMap<u32, &Decision> =
        decisions.iter().map(|d| (d.candidate_id, d)).collect();

    let mut results = ScreeningResults {
        approved: Vec::new(),
        rejected: Vec::new(),
        undecided: Vec::new(),
    };

    for candidate in candidates {
        if !candidate.analysis.has_gaps {
            results.approved.push(decided(
                candidate,
                ScreeningStatus::AutoApproved,
                "No gaps detected".to_string(),
            ));
            continue;
        }

        match by_id.get(&candidate.record.id) {
            Some(decision) => {
                let (status, bucket, default_reason) = match decision.outcome {
                    DecisionOutcome::Approve => {
                        (ScreeningStatus::Approved, &mut results.approved, "Acceptable gap")
                    }
                    DecisionOutcome::Reject => {
                        (ScreeningStatus::Rejected, &mut results.rejected, "Unacceptable gap")
                    }
                };
                let reason = if decision.reason.trim().is_empty() {
                    default_reason.to_string()
                } else {
                    decision.reason.clone()
                };
                bucket.push(decided(candidate, status, reason));
            }
            None => {
                results.undecided.push(decided(
                    candidate,
                    ScreeningStatus::NotDecided,
                    "N/A".to_string(),
                ));
            }
        }
    }

    results
}

fn decided(
    candidate: &AnalyzedCandidate,
    status: ScreeningStatus,
    decision_reason: String,
) -> DecidedCandidate {
    DecidedCandidate {
        record: candidate.record.clone(),
        analysis: candidate.analysis.clone(),
        status,
        decision_reason,
    }
}
