//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub domain: String,
    pub address: String,
    pub port: u16,
    pub database_url: String,
    pub templates_dir: String,
    pub secret: String,
    pub auth_service_url: String,
    pub gateway_url: String,
    pub gateway_api_key: String,
    pub gateway_timeout_secs: u64,
}

#[derive(Clone, Debug)]
/// Subset of [`ServerConfig`] needed by auth extractors and templates.
pub struct AuthConfig {
    pub secret: String,
    pub auth_service_url: String,
}

impl From<&ServerConfig> for AuthConfig {
    fn from(config: &ServerConfig) -> Self {
        Self {
            secret: config.secret.clone(),
            auth_service_url: config.auth_service_url.clone(),
        }
    }
}
