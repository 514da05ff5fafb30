use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::tracker::DEFAULT_TRIGGER_OFFSET;

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding personal.json, projects.json, skills.json, experience.json.
    pub data_dir: PathBuf,
    /// Directory served as-is for images, resume and other public files.
    pub static_dir: PathBuf,
    pub port: u16,
    pub rust_log: String,
    /// Canonical public URL, emitted as `<link rel="canonical">` when set.
    pub site_url: Option<String>,
    pub trigger_offset: f64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Config {
            data_dir: lookup("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("data")),
            static_dir: lookup("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("public")),
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            site_url: lookup("SITE_URL").filter(|u| !u.trim().is_empty()),
            trigger_offset: match lookup("SCROLL_TRIGGER_OFFSET") {
                Some(raw) => raw
                    .parse::<f64>()
                    .ok()
                    .filter(|v| v.is_finite())
                    .with_context(|| {
                        format!("SCROLL_TRIGGER_OFFSET must be a finite number, got '{raw}'")
                    })?,
                None => DEFAULT_TRIGGER_OFFSET,
            },
        })
    }
}
