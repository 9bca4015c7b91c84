pub mod analytics;
pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod middleware;
pub mod model;
pub mod observability;
pub mod routes;

pub use config::Config;
pub use routes::AppState;

use std::sync::Arc;

use client::SeoApi;

/// Create the app router for a given configuration and upstream client.
///
/// Integration tests build the router through this function with a stub
/// `SeoApi`, so no network is needed to exercise the routes.
pub fn create_app(config: Config, api: Arc<dyn SeoApi>) -> axum::Router {
    routes::router(AppState { config, api })
}
