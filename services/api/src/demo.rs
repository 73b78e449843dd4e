use chrono::Local;
use clap::Args;
use std::path::PathBuf;
use talent_ai::error::AppError;
use talent_ai::workflows::screening::{
    apply_decisions, decisions_from_path, summarize, CandidateImporter, GapAnalyzer,
    ScreeningResults,
};

const DEMO_CSV: &str = "name,email,education,experience\n\
John Doe,john@email.com,BS Computer Science MIT (2018-2022),Software Engineer Google (2022-Present)\n\
Jane Smith,jane@email.com,MBA Harvard (2020-2022),Consultant McKinsey (2022-2024) Currently unemployed\n\
Mike Johnson,mike@email.com,BS Engineering (2015-2019),Engineer Tesla (2019-2021) Career break (2021-2023) Developer Amazon (2023-Present)\n\
Sarah Williams,sarah@email.com,MS Data Science (2017-2020),Data Analyst Microsoft (2020-2022) Freelance Consultant (2022-2024)\n\
David Brown,david@email.com,BA Business (2016-2020),Marketing Manager Apple (2020-Present)\n";

#[derive(Args, Debug)]
pub(crate) struct ScreenReportArgs {
    /// Candidate file to screen (.csv, .xlsx or .xls)
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Report destination (defaults to screening-results-<date>.csv)
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
    /// Optional reviewer decisions CSV (candidate_id,outcome,reason)
    #[arg(long)]
    pub(crate) decisions: Option<PathBuf>,
    /// Replace the default acceptable-gap policy (repeatable)
    #[arg(long = "exception")]
    pub(crate) exceptions: Vec<String>,
    /// Pin the stale-timeline anchor year (defaults to the current year)
    #[arg(long)]
    pub(crate) reference_year: Option<i32>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Write the demo report to a file instead of stdout
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
}

pub(crate) fn run_screen_report(args: ScreenReportArgs) -> Result<(), AppError> {
    let ScreenReportArgs {
        input,
        output,
        decisions,
        exceptions,
        reference_year,
    } = args;

    let records = CandidateImporter::from_path(&input)?;

    let mut analyzer = GapAnalyzer::new();
    if !exceptions.is_empty() {
        analyzer = analyzer.with_exceptions(exceptions);
    }
    if let Some(year) = reference_year {
        analyzer = analyzer.with_reference_year(year);
    }

    let analyzed = analyzer.analyze_all(&records);
    let reviewed = match decisions {
        Some(path) => decisions_from_path(path)?,
        None => Vec::new(),
    };
    let results = apply_decisions(&analyzed, &reviewed);

    let output = output.unwrap_or_else(default_report_path);
    std::fs::write(&output, results.to_report())?;

    render_results(&results);
    println!("Report written to {}", output.display());
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    println!("Resume screening demo");

    let records = CandidateImporter::parse_csv(DEMO_CSV)?;
    let analyzed = GapAnalyzer::new().analyze_all(&records);
    let results = apply_decisions(&analyzed, &[]);

    render_results(&results);

    for candidate in results.export_order() {
        if candidate.analysis.has_gaps {
            println!(
                "  #{} {} ({}% confidence): {}",
                candidate.record.id,
                candidate.record.name,
                candidate.analysis.confidence,
                candidate.analysis.gaps.join("; ")
            );
        }
    }

    match args.output {
        Some(path) => {
            std::fs::write(&path, results.to_report())?;
            println!("Report written to {}", path.display());
        }
        None => {
            println!("\n{}", results.to_report());
        }
    }

    Ok(())
}

fn render_results(results: &ScreeningResults) {
    let summary = summarize(results);
    println!(
        "Screened {} candidate(s): {} flagged, {} clean, {} auto-approved, {} approved, {} rejected, {} awaiting review",
        summary.total,
        summary.flagged,
        summary.clean,
        summary.auto_approved,
        summary.approved,
        summary.rejected,
        summary.undecided
    );
    if let Some(confidence) = summary.average_confidence {
        println!("Average confidence across flagged candidates: {confidence}%");
    }
    if let Some(rate) = results.approval_rate() {
        println!("Approval rate across decided candidates: {rate:.0}%");
    }
}

fn default_report_path() -> PathBuf {
    PathBuf::from(format!(
        "screening-results-{}.csv",
        Local::now().format("%Y-%m-%d")
    ))
}
