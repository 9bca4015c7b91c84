//! Login and logout route handlers

use axum::{
    extract::{Extension, Query, State},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::{CookieJar, Form};
use serde::Deserialize;

use crate::auth::{ACCESS_TOKEN, TokenStore};
use crate::client::{ApiError, LoginInput};
use crate::error::AppError;
use crate::middleware::Auth;
use crate::routes::{AppState, render_template};

#[derive(askama::Template)]
#[template(path = "pages/login.html")]
struct LoginPageTemplate {
    error: Option<String>,
    email: Option<String>,
    from: Option<String>,
}

#[derive(Deserialize)]
pub struct PageQuery {
    /// Origin the guard recorded before redirecting here
    from: Option<String>,
}

/// GET / and GET /giris
pub async fn page(Query(query): Query<PageQuery>) -> Result<Response, AppError> {
    render_template(LoginPageTemplate {
        error: None,
        email: None,
        from: query.from,
    })
}

#[derive(Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub name: String,
    pub email: String,
    pub password: String,
    /// Origin echoed back through the form's hidden field
    #[serde(default)]
    pub from: Option<String>,
}

/// Where to land after a successful login.
///
/// Only same-site paths are honored; anything else (absolute URLs,
/// protocol-relative `//host` forms) falls back to the dashboard.
fn post_login_target(from: Option<&str>) -> &str {
    match from {
        Some(path) if path.starts_with('/') && !path.starts_with("//") => path,
        _ => "/dashboard",
    }
}

/// POST /giris
///
/// Delegates authentication to the upstream API. On success the issued
/// access token is stored as the credential cookie and the visitor returns
/// to the origin the guard recorded, or the dashboard.
pub async fn action(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Result<(CookieJar, Response), AppError> {
    let input = LoginInput {
        name: form.name,
        email: form.email.clone(),
        password: form.password,
    };

    match state.api.login(input).await {
        Ok(access_token) => {
            let jar = jar.set(ACCESS_TOKEN, &access_token, state.config.auth.cookie_ttl_days);
            let target = post_login_target(form.from.as_deref());
            tracing::info!(email = %form.email, "login successful");
            Ok((jar, Redirect::to(target).into_response()))
        }
        Err(e) => {
            tracing::warn!(email = %form.email, error = %e, "login failed");
            let error = match e {
                ApiError::Rejected(message) => message,
                ApiError::Transport(_) => {
                    "Sunucuya ulaşılamadı. Lütfen tekrar deneyin.".to_string()
                }
            };
            let page = render_template(LoginPageTemplate {
                error: Some(error),
                email: Some(form.email),
                from: form.from,
            })?;
            Ok((jar, page))
        }
    }
}

/// GET /logout
///
/// Upstream logout is best effort; the credential cookie is deleted either
/// way and the visitor returns to the login page.
pub async fn logout(
    State(state): State<AppState>,
    Extension(auth): Extension<Auth>,
    jar: CookieJar,
) -> (CookieJar, Redirect) {
    if let Err(e) = state.api.logout(&auth.token).await {
        tracing::warn!(error = %e, "upstream logout failed");
    }

    (jar.delete(ACCESS_TOKEN), Redirect::to("/giris"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_login_target_honors_recorded_origin() {
        assert_eq!(
            post_login_target(Some("/project/p1/analysis?range=3months")),
            "/project/p1/analysis?range=3months"
        );
    }

    #[test]
    fn test_post_login_target_defaults_to_dashboard() {
        assert_eq!(post_login_target(None), "/dashboard");
        assert_eq!(post_login_target(Some("")), "/dashboard");
    }

    #[test]
    fn test_post_login_target_rejects_offsite_origins() {
        assert_eq!(post_login_target(Some("https://evil.example/")), "/dashboard");
        assert_eq!(post_login_target(Some("//evil.example/")), "/dashboard");
    }
}
