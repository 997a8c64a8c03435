use std::path::PathBuf;

use anyhow::{Context, Result};

const DEFAULT_MODEL: &str = "gpt-4.1-mini";
const DEFAULT_BASE_URL: &str = "https://api.openai.com";
const WEBSITE_FILE_NAME: &str = "index.html";

/// Application configuration loaded from environment variables.
/// Constructed once at startup and handed to everything that needs it.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: String,
    pub openai_model: String,
    pub openai_base_url: String,
    pub output_dir: PathBuf,
    pub upload_dir: PathBuf,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            openai_api_key: require_env("OPENAI_API_KEY")?,
            openai_model: env_or("OPENAI_MODEL", DEFAULT_MODEL),
            openai_base_url: env_or("OPENAI_BASE_URL", DEFAULT_BASE_URL),
            output_dir: PathBuf::from(env_or("OUTPUT_DIR", "generated_sites")),
            upload_dir: PathBuf::from(env_or("UPLOAD_DIR", "uploads")),
            port: env_or("PORT", "7860")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }

    /// The single file every website generation overwrites.
    pub fn website_path(&self) -> PathBuf {
        self.output_dir.join(WEBSITE_FILE_NAME)
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
