//! Profile page

use axum::{
    extract::{Extension, State},
    response::Response,
};

use crate::error::AppError;
use crate::middleware::Auth;
use crate::model::UserProfile;
use crate::routes::{AppState, render_template};

#[derive(askama::Template)]
#[template(path = "pages/profile.html")]
struct ProfileTemplate {
    profile: UserProfile,
}

/// GET /profile
pub async fn page(
    State(state): State<AppState>,
    Extension(auth): Extension<Auth>,
) -> Result<Response, AppError> {
    let profile = state.api.profile(&auth.token).await?;

    render_template(ProfileTemplate { profile })
}
