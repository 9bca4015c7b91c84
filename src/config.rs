use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub api: ApiConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Upstream SEO API. All durable state lives behind it; this application
/// keeps no database of its own.
#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    /// Lifetime of the access-token cookie, in days. Expiry is enforced by
    /// the cookie itself; the guard never inspects token-internal claims
    /// beyond the role.
    #[serde(default = "default_cookie_ttl_days")]
    pub cookie_ttl_days: i64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            cookie_ttl_days: default_cookie_ttl_days(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_timeout_seconds() -> u64 {
    10
}

fn default_cookie_ttl_days() -> i64 {
    1
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (SEOPANEL__API__BASE_URL, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("api.base_url", "http://localhost:8080")?
            .set_default("api.timeout_seconds", 10)?
            .set_default("auth.cookie_ttl_days", 1)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Config file is optional
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("SEOPANEL")
                .separator("__")
                .try_parsing(true),
        );

        // Legacy environment variable without prefix
        if let Ok(api_url) = env::var("API_URL") {
            builder = builder.set_override("api.base_url", api_url)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if !self.api.base_url.starts_with("http://") && !self.api.base_url.starts_with("https://") {
            return Err("API base_url must be an http(s) URL".to_string());
        }
        if self.auth.cookie_ttl_days < 1 {
            return Err("Cookie lifetime must be at least 1 day".to_string());
        }
        Ok(())
    }
}
