//! Per-project SEO analysis report

use axum::{
    extract::{Extension, Path, Query, State},
    response::Response,
};
use serde::Deserialize;

use crate::analytics::{AnalysisReport, TimeRange, analysis_report};
use crate::error::AppError;
use crate::middleware::Auth;
use crate::routes::{AppState, render_template};

#[derive(askama::Template)]
#[template(path = "pages/analysis.html")]
struct AnalysisTemplate {
    project_id: String,
    report: AnalysisReport,
}

#[derive(Deserialize)]
pub struct RangeQuery {
    range: Option<String>,
}

/// GET /project/{id}/analysis?range=28days|3months|6months
pub async fn page(
    State(state): State<AppState>,
    Extension(auth): Extension<Auth>,
    Path(project_id): Path<String>,
    Query(query): Query<RangeQuery>,
) -> Result<Response, AppError> {
    let range = query
        .range
        .as_deref()
        .map(TimeRange::parse)
        .unwrap_or_default();

    let analysis = state.api.seo_analysis(&auth.token, &project_id).await?;
    let report = analysis_report(&analysis, range);

    render_template(AnalysisTemplate { project_id, report })
}
