mod exceptions;
mod rules;

use chrono::{Datelike, Local};

pub use exceptions::default_exceptions;

use super::domain::{AnalyzedCandidate, CandidateRecord, GapAnalysis};

const MAX_CONFIDENCE: i32 = 95;

/// Heuristic employment-gap detector. Analysis is pure: the same record,
/// exception list, and reference year always produce the same output.
#[derive(Debug, Clone)]
pub struct GapAnalyzer {
    exceptions: Vec<String>,
    reference_year: i32,
}

impl GapAnalyzer {
    /// Analyzer with the default exception policy, anchored to the
    /// current calendar year.
    pub fn new() -> Self {
        Self {
            exceptions: default_exceptions(),
            reference_year: Local::now().year(),
        }
    }

    pub fn with_exceptions(mut self, exceptions: Vec<String>) -> Self {
        self.exceptions = exceptions;
        self
    }

    /// Pins the year used by the stale-timeline rule. Results for a given
    /// dataset shift as calendar years pass, so batch runs that must be
    /// reproducible pin this explicitly.
    pub fn with_reference_year(mut self, reference_year: i32) -> Self {
        self.reference_year = reference_year;
        self
    }

    pub fn exceptions(&self) -> &[String] {
        &self.exceptions
    }

    /// Scans one candidate. Confidence reflects the full weight of every
    /// detected signal, including ones the exception policy later
    /// suppresses; only a candidate with no surviving findings reports
    /// zero confidence.
    pub fn analyze(&self, record: &CandidateRecord) -> GapAnalysis {
        let findings = rules::detect_findings(record, self.reference_year);
        let total_weight: i32 = findings.iter().map(|f| f.weight).sum();

        let exceptions_lower: Vec<String> =
            self.exceptions.iter().map(|e| e.to_lowercase()).collect();

        let all_gaps: Vec<String> = findings.iter().map(|f| f.message.clone()).collect();
        let gaps: Vec<String> = findings
            .into_iter()
            .filter(|f| !exceptions::is_excused(&f.message.to_lowercase(), &exceptions_lower))
            .map(|f| f.message)
            .collect();

        let has_gaps = !gaps.is_empty();
        let confidence = if has_gaps {
            total_weight.clamp(0, MAX_CONFIDENCE) as u8
        } else {
            0
        };

        let analysis_summary = if has_gaps {
            format!(
                "Analyzed using pattern matching, timeline analysis, and exception filtering. {} issue(s) identified.",
                gaps.len()
            )
        } else {
            "Analyzed using pattern matching, timeline analysis, and exception filtering. No significant issues found.".to_string()
        };

        GapAnalysis {
            has_gaps,
            gaps,
            all_gaps,
            confidence,
            analysis_summary,
        }
    }

    pub fn analyze_all(&self, records: &[CandidateRecord]) -> Vec<AnalyzedCandidate> {
        records
            .iter()
            .map(|record| AnalyzedCandidate {
                record: record.clone(),
                analysis: self.analyze(record),
            })
            .collect()
    }
}

impl Default for GapAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(education: &str, experience: &str) -> CandidateRecord {
        CandidateRecord {
            id: 1,
            name: "Test".to_string(),
            email: String::new(),
            phone: String::new(),
            education: education.to_string(),
            experience: experience.to_string(),
        }
    }

    fn analyzer() -> GapAnalyzer {
        GapAnalyzer::new().with_reference_year(2024)
    }

    #[test]
    fn clean_resume_reports_zero_confidence() {
        let analysis = analyzer().analyze(&record(
            "BS Computer Science MIT (2014-2018)",
            "Engineer Google (2018-present)",
        ));
        assert!(!analysis.has_gaps);
        assert!(analysis.gaps.is_empty());
        assert_eq!(analysis.confidence, 0);
        assert!(analysis.analysis_summary.ends_with("No significant issues found."));
    }

    #[test]
    fn confidence_counts_suppressed_findings() {
        // Maternity excuses the explicit "gap" mention, but the weight it
        // contributed still feeds the confidence score.
        let subject = record("", "took a gap year, then returned to work (present)");

        let default_run = analyzer().analyze(&subject);
        assert!(!default_run.has_gaps);
        assert_eq!(default_run.confidence, 0);
        assert_eq!(default_run.all_gaps, vec!["Explicit gap mentioned in resume"]);

        let strict_run = analyzer().with_exceptions(Vec::new()).analyze(&subject);
        assert!(strict_run.has_gaps);
        assert_eq!(strict_run.confidence, 25);
        assert_eq!(strict_run.gaps, strict_run.all_gaps);
    }

    #[test]
    fn confidence_is_capped_at_95() {
        let analysis = analyzer().with_exceptions(Vec::new()).analyze(&record(
            "BS 2008",
            "unemployed after a career break, 2012 2016 gap",
        ));
        assert!(analysis.has_gaps);
        assert_eq!(analysis.confidence, 95);
    }

    #[test]
    fn exceptions_never_change_confidence_of_flagged_candidates() {
        // The stale-timeline finding survives every default rule, so the
        // candidate stays flagged and the score is identical either way.
        let subject = record("BS (2010-2014)", "Dev (2014-2018)");

        let lenient = analyzer().analyze(&subject);
        let strict = analyzer().with_exceptions(Vec::new()).analyze(&subject);
        assert!(lenient.has_gaps && strict.has_gaps);
        assert_eq!(lenient.confidence, strict.confidence);
    }

    #[test]
    fn analysis_is_deterministic() {
        let subject = record("MBA (2019-2021)", "Freelance consultant 2021-2023");
        let first = analyzer().analyze(&subject);
        let second = analyzer().analyze(&subject);
        assert_eq!(first, second);
    }

    #[test]
    fn summary_counts_surviving_issues_only() {
        let analysis = analyzer().analyze(&record("BS (2010-2014)", "Dev (2014-2018)"));
        assert_eq!(
            analysis.analysis_summary,
            "Analyzed using pattern matching, timeline analysis, and exception filtering. 1 issue(s) identified."
        );
    }

    #[test]
    fn analyze_all_preserves_input_order() {
        let records = vec![
            record("BS 2018", "Dev 2018-present"),
            CandidateRecord { id: 7, ..record("", "unemployed since 2020") },
        ];
        let analyzed = analyzer().analyze_all(&records);
        assert_eq!(analyzed.len(), 2);
        assert_eq!(analyzed[0].record.id, 1);
        assert_eq!(analyzed[1].record.id, 7);
        assert!(analyzed[1].analysis.has_gaps);
    }
}
