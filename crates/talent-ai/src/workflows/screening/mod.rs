//! Resume screening workflow: candidate intake, heuristic gap analysis,
//! reviewer decisions, and the exported report.

pub mod analysis;
pub mod decisions;
pub mod domain;
pub mod intake;
pub mod report;

pub use analysis::{default_exceptions, GapAnalyzer};
pub use decisions::{
    apply_decisions, decisions_from_path, decisions_from_reader, DecisionImportError,
    ScreeningResults,
};
pub use domain::{
    AnalyzedCandidate, CandidateRecord, DecidedCandidate, Decision, DecisionOutcome, GapAnalysis,
    ScreeningStatus,
};
pub use intake::{CandidateImporter, IntakeError};
pub use report::{
    build_report, summarize, summarize_analysis, AnalysisSummary, ScreeningSummary,
    REPORT_COLUMNS,
};
