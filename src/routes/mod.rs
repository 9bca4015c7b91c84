use std::sync::Arc;

use askama::Template;
use axum::{
    Router,
    middleware as axum_middleware,
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
};
use tower_http::trace::TraceLayer;

use crate::client::SeoApi;
use crate::config::Config;
use crate::error::AppError;
use crate::middleware::{auth_middleware, guest_middleware};

mod analysis;
mod dashboard;
mod health;
mod login;
mod profile;
mod register;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub api: Arc<dyn SeoApi>,
}

/// Helper to render templates; askama failures surface as `AppError::Render`
pub(crate) fn render_template<T: Template>(t: T) -> Result<Response, AppError> {
    Ok(Html(t.render()?).into_response())
}

/// Catch-all for unknown paths
async fn fallback() -> Redirect {
    Redirect::to("/giris")
}

pub fn router(state: AppState) -> Router {
    // Authenticated area. The guard redirects anyone without a resolvable
    // role to /giris, carrying the attempted origin.
    let protected = Router::new()
        .route("/dashboard", get(dashboard::page))
        .route("/project/{id}/analysis", get(analysis::page))
        .route("/profile", get(profile::page))
        .route("/logout", get(login::logout))
        .route_layer(axum_middleware::from_fn(auth_middleware));

    // Login and register. The guard sends authenticated visitors to the
    // dashboard instead.
    let public = Router::new()
        .route("/", get(login::page))
        .route("/giris", get(login::page).post(login::action))
        .route("/kayit-ol", get(register::page).post(register::action))
        .route_layer(axum_middleware::from_fn(guest_middleware));

    Router::new()
        .route("/health", get(health::health))
        .merge(public)
        .merge(protected)
        .fallback(fallback)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
