//! Typed client for the upstream SEO API
//!
//! Handlers depend on the `SeoApi` trait rather than a concrete client, so
//! integration tests run against a stub with no network.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{Project, SeoAnalysis, UserProfile};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The upstream answered but refused the operation (`success: false`)
    #[error("{0}")]
    Rejected(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterInput {
    pub user_name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
}

#[derive(Debug, Deserialize)]
struct AuthResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    access_token: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl AuthResponse {
    fn message(self) -> String {
        self.message
            .unwrap_or_else(|| "İşlem başarısız oldu".to_string())
    }
}

#[async_trait]
pub trait SeoApi: Send + Sync {
    /// Authenticate and return the issued access token.
    async fn login(&self, input: LoginInput) -> Result<String, ApiError>;

    async fn register(&self, input: RegisterInput) -> Result<(), ApiError>;

    async fn logout(&self, token: &str) -> Result<(), ApiError>;

    async fn profile(&self, token: &str) -> Result<UserProfile, ApiError>;

    async fn projects(&self, token: &str) -> Result<Vec<Project>, ApiError>;

    async fn seo_analysis(&self, token: &str, project_id: &str) -> Result<SeoAnalysis, ApiError>;
}

/// reqwest-backed implementation talking to the real API
#[derive(Clone)]
pub struct HttpSeoApi {
    http: reqwest::Client,
    base_url: String,
}

impl HttpSeoApi {
    pub fn new(base_url: &str, timeout_seconds: u64) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    // The upstream expects the nonstandard "Bearer:" prefix
    fn bearer(token: &str) -> String {
        format!("Bearer: {token}")
    }
}

#[async_trait]
impl SeoApi for HttpSeoApi {
    async fn login(&self, input: LoginInput) -> Result<String, ApiError> {
        let response: AuthResponse = self
            .http
            .post(self.url("/v1/api/auth/login"))
            .json(&input)
            .send()
            .await?
            .json()
            .await?;

        if !response.success {
            return Err(ApiError::Rejected(response.message()));
        }

        response
            .access_token
            .ok_or_else(|| ApiError::Rejected("Sunucu erişim anahtarı döndürmedi".to_string()))
    }

    async fn register(&self, input: RegisterInput) -> Result<(), ApiError> {
        let response: AuthResponse = self
            .http
            .post(self.url("/v1/api/auth/register"))
            .json(&input)
            .send()
            .await?
            .json()
            .await?;

        if !response.success {
            return Err(ApiError::Rejected(response.message()));
        }

        Ok(())
    }

    async fn logout(&self, token: &str) -> Result<(), ApiError> {
        let response: AuthResponse = self
            .http
            .get(self.url("/v1/api/auth/logout"))
            .header(reqwest::header::AUTHORIZATION, Self::bearer(token))
            .send()
            .await?
            .json()
            .await?;

        if !response.success {
            return Err(ApiError::Rejected(response.message()));
        }

        Ok(())
    }

    async fn profile(&self, token: &str) -> Result<UserProfile, ApiError> {
        let profile = self
            .http
            .get(self.url("/v1/api/auth/profile"))
            .header(reqwest::header::AUTHORIZATION, Self::bearer(token))
            .send()
            .await?
            .json()
            .await?;

        Ok(profile)
    }

    async fn projects(&self, token: &str) -> Result<Vec<Project>, ApiError> {
        let projects = self
            .http
            .get(self.url("/v1/api/project/project-list"))
            .header(reqwest::header::AUTHORIZATION, Self::bearer(token))
            .send()
            .await?
            .json()
            .await?;

        Ok(projects)
    }

    async fn seo_analysis(&self, token: &str, project_id: &str) -> Result<SeoAnalysis, ApiError> {
        let analysis = self
            .http
            .get(self.url(&format!("/v1/api/project/seo-analysis/{project_id}")))
            .header(reqwest::header::AUTHORIZATION, Self::bearer(token))
            .send()
            .await?
            .json()
            .await?;

        Ok(analysis)
    }
}
