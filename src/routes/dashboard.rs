//! Dashboard: project list with per-project SEO summaries

use axum::{
    extract::{Extension, State},
    response::Response,
};

use crate::analytics::{ProjectSummary, project_summary};
use crate::error::AppError;
use crate::middleware::Auth;
use crate::routes::{AppState, render_template};

#[derive(askama::Template)]
#[template(path = "pages/dashboard.html")]
struct DashboardTemplate {
    role: String,
    summaries: Vec<ProjectSummary>,
}

/// GET /dashboard
///
/// Fetches the project list, then the analysis document per project. A
/// project whose analysis cannot be loaded is skipped rather than failing
/// the whole page, matching the original dashboard's behavior.
pub async fn page(
    State(state): State<AppState>,
    Extension(auth): Extension<Auth>,
) -> Result<Response, AppError> {
    let projects = state.api.projects(&auth.token).await?;

    let mut summaries = Vec::with_capacity(projects.len());
    for project in &projects {
        match state.api.seo_analysis(&auth.token, &project.id).await {
            Ok(analysis) => summaries.push(project_summary(project, &analysis)),
            Err(e) => {
                tracing::warn!(project_id = %project.id, error = %e, "seo analysis unavailable");
            }
        }
    }

    render_template(DashboardTemplate {
        role: auth.role,
        summaries,
    })
}
