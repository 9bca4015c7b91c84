//! Registration route handlers

use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::Form;
use serde::Deserialize;

use crate::client::{ApiError, RegisterInput};
use crate::error::AppError;
use crate::routes::{AppState, render_template};

#[derive(askama::Template)]
#[template(path = "pages/register.html")]
struct RegisterPageTemplate {
    error: Option<String>,
    user_name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
}

/// GET /kayit-ol
pub async fn page() -> Result<Response, AppError> {
    render_template(RegisterPageTemplate {
        error: None,
        user_name: None,
        email: None,
        phone: None,
    })
}

#[derive(Deserialize)]
pub struct RegisterForm {
    pub user_name: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub phone: String,
}

/// POST /kayit-ol
///
/// Account creation happens upstream; on success the visitor is sent to the
/// login page, as the original flow did.
pub async fn action(
    State(state): State<AppState>,
    Form(form): Form<RegisterForm>,
) -> Result<Response, AppError> {
    let input = RegisterInput {
        user_name: form.user_name.clone(),
        email: form.email.clone(),
        password: form.password,
        phone: form.phone.clone(),
    };

    match state.api.register(input).await {
        Ok(()) => {
            tracing::info!(email = %form.email, "registration successful");
            Ok(Redirect::to("/giris").into_response())
        }
        Err(e) => {
            tracing::warn!(email = %form.email, error = %e, "registration failed");
            let error = match e {
                ApiError::Rejected(message) => message,
                ApiError::Transport(_) => {
                    "Sunucuya ulaşılamadı. Lütfen tekrar deneyin.".to_string()
                }
            };
            render_template(RegisterPageTemplate {
                error: Some(error),
                user_name: Some(form.user_name),
                email: Some(form.email),
                phone: Some(form.phone),
            })
        }
    }
}

