use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::client::ApiError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("template rendering failed: {0}")]
    Render(#[from] askama::Error),
}

#[derive(Template)]
#[template(path = "pages/error.html")]
struct ErrorPageTemplate {
    status_code: u16,
    title: String,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status_code, title, message) = match self {
            AppError::Api(ApiError::Rejected(msg)) => {
                tracing::warn!(error = %msg, "upstream rejected request");
                (
                    StatusCode::BAD_GATEWAY,
                    "Veri kaynağı isteği reddetti".to_string(),
                    msg,
                )
            }
            AppError::Api(ApiError::Transport(e)) => {
                tracing::error!(error = %e, "upstream unreachable");
                (
                    StatusCode::BAD_GATEWAY,
                    "Veri kaynağına ulaşılamadı".to_string(),
                    "SEO verileri şu anda yüklenemiyor. Lütfen daha sonra tekrar deneyin."
                        .to_string(),
                )
            }
            AppError::Render(e) => {
                tracing::error!(error = %e, "template rendering failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Bir şeyler ters gitti".to_string(),
                    "Sayfa oluşturulamadı. Lütfen daha sonra tekrar deneyin.".to_string(),
                )
            }
        };

        let template = ErrorPageTemplate {
            status_code: status_code.as_u16(),
            title,
            message,
        };

        match template.render() {
            Ok(html) => (status_code, Html(html)).into_response(),
            Err(e) => {
                tracing::error!(error = %e, "error page rendering failed");
                (status_code, "Bir şeyler ters gitti").into_response()
            }
        }
    }
}
