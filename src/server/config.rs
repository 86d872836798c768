use std::path::PathBuf;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:5000";
const DEFAULT_UPLOAD_DIR: &str = "uploads";
const DEFAULT_FRONTEND_URL: &str = "http://localhost:3000";
const UNSPLASH_API_URL: &str = "https://api.unsplash.com";

pub struct Config {
    pub database_url: String,
    pub bind_address: String,

    /// Origin allowed by CORS; the React frontend runs on its own port.
    pub frontend_url: String,

    /// Directory receiving uploaded vehicle documents.
    pub upload_dir: PathBuf,

    pub unsplash_api_url: String,
    /// Without a key vehicle images always use the placeholder service.
    pub unsplash_access_key: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_address: env_or("BIND_ADDRESS", DEFAULT_BIND_ADDRESS),
            frontend_url: env_or("FRONTEND_URL", DEFAULT_FRONTEND_URL),
            upload_dir: PathBuf::from(env_or("UPLOAD_DIR", DEFAULT_UPLOAD_DIR)),
            unsplash_api_url: env_or("UNSPLASH_API_URL", UNSPLASH_API_URL),
            unsplash_access_key: std::env::var("UNSPLASH_ACCESS_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
        })
    }
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}
