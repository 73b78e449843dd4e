use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;
use talent_ai::error::AppError;
use talent_ai::workflows::screening::{
    apply_decisions, summarize, summarize_analysis, AnalysisSummary, AnalyzedCandidate,
    CandidateImporter, Decision, GapAnalyzer,
};

#[derive(Debug, Deserialize)]
pub(crate) struct AnalyzeRequest {
    /// Raw delimited candidate text, header row first.
    pub(crate) csv: String,
    /// Replaces the default acceptable-gap policy when present.
    #[serde(default)]
    pub(crate) exceptions: Option<Vec<String>>,
    /// Pins the stale-timeline anchor year (defaults to the current year).
    #[serde(default)]
    pub(crate) reference_year: Option<i32>,
}

#[derive(Debug, Serialize)]
pub(crate) struct AnalyzeResponse {
    pub(crate) summary: AnalysisSummary,
    pub(crate) candidates: Vec<AnalyzedCandidate>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ReportRequest {
    pub(crate) csv: String,
    #[serde(default)]
    pub(crate) exceptions: Option<Vec<String>>,
    /// Reviewer decisions to join onto flagged candidates by id.
    #[serde(default)]
    pub(crate) decisions: Vec<Decision>,
    #[serde(default)]
    pub(crate) reference_year: Option<i32>,
}

pub(crate) fn router() -> axum::Router {
    axum::Router::new()
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/screening/analyze",
            axum::routing::post(analyze_endpoint),
        )
        .route(
            "/api/v1/screening/report",
            axum::routing::post(report_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

fn build_analyzer(exceptions: Option<Vec<String>>, reference_year: Option<i32>) -> GapAnalyzer {
    let mut analyzer = GapAnalyzer::new();
    if let Some(exceptions) = exceptions {
        analyzer = analyzer.with_exceptions(exceptions);
    }
    if let Some(year) = reference_year {
        analyzer = analyzer.with_reference_year(year);
    }
    analyzer
}

pub(crate) async fn analyze_endpoint(
    Json(payload): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let AnalyzeRequest {
        csv,
        exceptions,
        reference_year,
    } = payload;

    let records = CandidateImporter::parse_csv(&csv)?;
    let analyzer = build_analyzer(exceptions, reference_year);
    let candidates = analyzer.analyze_all(&records);
    let summary = summarize_analysis(&candidates);

    Ok(Json(AnalyzeResponse { summary, candidates }))
}

pub(crate) async fn report_endpoint(
    Json(payload): Json<ReportRequest>,
) -> Result<impl IntoResponse, AppError> {
    let ReportRequest {
        csv,
        exceptions,
        decisions,
        reference_year,
    } = payload;

    let records = CandidateImporter::parse_csv(&csv)?;
    let analyzer = build_analyzer(exceptions, reference_year);
    let analyzed = analyzer.analyze_all(&records);
    let results = apply_decisions(&analyzed, &decisions);
    let summary = summarize(&results);

    tracing::debug!(
        total = summary.total,
        flagged = summary.flagged,
        "screening report generated"
    );

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/csv")],
        results.to_report(),
    ))
}
