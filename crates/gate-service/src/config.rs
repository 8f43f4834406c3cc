use std::collections::HashMap;
use std::env;
use thiserror::Error;

/// Service configuration from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP server binds to.
    pub bind_address: String,
    /// Base URL of the auth provider that excluded paths are proxied to.
    pub auth_upstream: String,
    /// Path on the auth upstream that answers session lookups.
    pub session_path: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid AUTH_UPSTREAM url: {0}")]
    InvalidUpstream(String),
}

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8090";
pub const DEFAULT_SESSION_PATH: &str = "/api/auth/session";

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(&env::vars().collect())
    }

    /// Load configuration from a HashMap (for testing)
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let bind_address = vars
            .get("BIND_ADDRESS")
            .cloned()
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());

        let auth_upstream = vars
            .get("AUTH_UPSTREAM")
            .ok_or_else(|| ConfigError::MissingEnvVar("AUTH_UPSTREAM".to_string()))?
            .trim_end_matches('/')
            .to_string();

        if reqwest::Url::parse(&auth_upstream).is_err() {
            return Err(ConfigError::InvalidUpstream(auth_upstream));
        }

        let session_path = vars
            .get("SESSION_PATH")
            .cloned()
            .unwrap_or_else(|| DEFAULT_SESSION_PATH.to_string());

        Ok(Config {
            bind_address,
            auth_upstream,
            session_path,
        })
    }

    /// Full URL of the session-lookup endpoint.
    pub fn session_endpoint(&self) -> String {
        format!("{}{}", self.auth_upstream, self.session_path)
    }
}
