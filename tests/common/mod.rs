//! Shared test setup: stub upstream API, app construction, token minting

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use jsonwebtoken::{EncodingKey, Header, encode};
use serde::Serialize;
use serde_json::json;

use seopanel::Config;
use seopanel::client::{ApiError, LoginInput, RegisterInput, SeoApi};
use seopanel::config::{ApiConfig, AuthConfig, ObservabilityConfig, ServerConfig};
use seopanel::model::{Project, SeoAnalysis, UserProfile};

pub const TEST_SECRET: &[u8] = b"test-secret-key-32-bytes-long!!!";

/// Upstream stub: accepts `password123`, rejects `taken@example.com`
/// registrations, and serves one canned project with analysis data.
pub struct StubSeoApi;

#[async_trait]
impl SeoApi for StubSeoApi {
    async fn login(&self, input: LoginInput) -> Result<String, ApiError> {
        if input.password == "password123" {
            Ok(mint_token("user"))
        } else {
            Err(ApiError::Rejected("Geçersiz e-posta veya şifre".to_string()))
        }
    }

    async fn register(&self, input: RegisterInput) -> Result<(), ApiError> {
        if input.email == "taken@example.com" {
            Err(ApiError::Rejected("E-posta zaten kayıtlı".to_string()))
        } else {
            Ok(())
        }
    }

    async fn logout(&self, _token: &str) -> Result<(), ApiError> {
        Ok(())
    }

    async fn profile(&self, _token: &str) -> Result<UserProfile, ApiError> {
        Ok(serde_json::from_value(json!({
            "name": "Test Kullanıcı",
            "email": "test@example.com",
            "phoneNumber": "5551234567",
            "creatAt": "2024-01-15T09:00:00Z"
        }))
        .unwrap())
    }

    async fn projects(&self, _token: &str) -> Result<Vec<Project>, ApiError> {
        Ok(serde_json::from_value(json!([
            { "_id": "p1", "name": "Örnek Proje", "domain": "ornek.com" }
        ]))
        .unwrap())
    }

    async fn seo_analysis(&self, _token: &str, _project_id: &str) -> Result<SeoAnalysis, ApiError> {
        Ok(sample_analysis())
    }
}

pub fn sample_analysis() -> SeoAnalysis {
    serde_json::from_value(json!({
        "traffic": { "websiteTraffic": 12500, "organicTraffic": 8300 },
        "comparativeTrafficData": {
            "twentyEightDays": {
                "websiteTraffic": { "currentValue": 4200, "differencePercentage": 12.5 },
                "organicTraffic": { "currentValue": 2800, "differencePercentage": -3.2 }
            },
            "threeMonths": {
                "websiteTraffic": { "currentValue": 11000, "differencePercentage": 5.0 },
                "organicTraffic": { "currentValue": 7400, "differencePercentage": 1.1 }
            },
            "sixMonths": {
                "websiteTraffic": { "currentValue": 21000, "differencePercentage": 0.0 },
                "organicTraffic": { "currentValue": 14800, "differencePercentage": 8.9 }
            }
        },
        "competitorsOrganicTraffic": {
            "overallTraffic": 54000,
            "differencePercentage": -6.4,
            "monthlyAverageTrafficData": [
                { "competitor": "rakip.com", "monthlyAverageTraffic": 31000 }
            ]
        },
        "trackedKeywords": [
            { "name": "seo analiz", "traffic": 900 },
            { "name": "anahtar kelime", "traffic": 640 }
        ],
        "risingKeywords": [{ "name": "yapay zeka seo", "monthlyClicks": 1200 }],
        "fallingKeywords": [{ "name": "dizin kaydı", "monthlyClicks": 45 }]
    }))
    .unwrap()
}

#[derive(Serialize)]
struct TestClaims {
    sub: String,
    role: String,
    exp: u64,
}

/// Mint a well-formed HS256 token with the given role claim.
///
/// The guard never verifies the signature, but a real JWT keeps the fixture
/// honest about the wire format.
pub fn mint_token(role: &str) -> String {
    let claims = TestClaims {
        sub: "42".to_string(),
        role: role.to_string(),
        exp: 4102444800, // 2100-01-01
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET),
    )
    .unwrap()
}

pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3001,
        },
        api: ApiConfig {
            base_url: "http://localhost:8080".to_string(),
            timeout_seconds: 10,
        },
        auth: AuthConfig::default(),
        observability: ObservabilityConfig::default(),
    }
}

pub fn test_app() -> axum::Router {
    seopanel::create_app(test_config(), Arc::new(StubSeoApi))
}
