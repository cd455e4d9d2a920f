use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// Front-end origins allowed by default when ALLOWED_ORIGINS is not set.
const DEFAULT_ALLOWED_ORIGINS: &[&str] = &[
    "https://eventflow-frontend-eta.vercel.app",
    "http://localhost:5173",
    "http://localhost:3000",
];

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub mongo_uri: String,
    pub port: u16,
    pub allowed_origins: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let allowed_origins = match env::var("ALLOWED_ORIGINS") {
            Ok(list) => list
                .split(',')
                .map(|origin| origin.trim().to_string())
                .filter(|origin| !origin.is_empty())
                .collect(),
            Err(_) => DEFAULT_ALLOWED_ORIGINS
                .iter()
                .map(|origin| origin.to_string())
                .collect(),
        };

        Ok(Self {
            mongo_uri: env::var("MONGO_URI").context("MONGO_URI must be set")?,
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            allowed_origins,
        })
    }
}
