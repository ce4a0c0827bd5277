//! Application configuration loaded from environment variables.

use crate::errors::{ApiError, Result};

#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the REST API server
    pub api_port: u16,
    /// Optional path to a project-catalog JSON file; the built-in demo
    /// catalog is used when unset
    pub catalog_path: Option<String>,
    /// Matching pool assigned to new sessions that don't specify one
    pub default_pool: f64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Config {
            api_port: env_var("API_PORT")
                .unwrap_or_else(|_| "3001".to_string())
                .parse()
                .map_err(|_| ApiError::Config("Invalid API_PORT".to_string()))?,
            catalog_path: env_var("CATALOG_PATH").ok(),
            default_pool: env_var("DEFAULT_POOL")
                .unwrap_or_else(|_| "10000".to_string())
                .parse()
                .map_err(|_| ApiError::Config("Invalid DEFAULT_POOL".to_string()))?,
        })
    }
}

fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| ApiError::Config(format!("Missing env var: {key}")))
}
