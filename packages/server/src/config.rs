use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_SOURCE_URL: &str = "http://books.toscrape.com/index.html";

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Listing page scraped by `/scrape`
    pub source_url: String,
    /// Directory where chart images are published
    pub static_dir: PathBuf,
    /// Directory holding the reference CSV files
    pub reference_dir: PathBuf,
    pub fetch_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Self {
            host: get("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: get("PORT")
                .unwrap_or_else(|| "5000".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            source_url: get("SOURCE_URL").unwrap_or_else(|| DEFAULT_SOURCE_URL.to_string()),
            static_dir: get("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("static")),
            reference_dir: get("REFERENCE_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("ws_csv_files")),
            fetch_timeout: Duration::from_secs(
                get("FETCH_TIMEOUT_SECS")
                    .unwrap_or_else(|| "30".to_string())
                    .parse()
                    .context("FETCH_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_target_books_to_scrape() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.bind_addr(), "0.0.0.0:5000");
        assert_eq!(config.source_url, DEFAULT_SOURCE_URL);
        assert_eq!(config.static_dir, PathBuf::from("static"));
        assert_eq!(config.reference_dir, PathBuf::from("ws_csv_files"));
        assert_eq!(config.fetch_timeout, Duration::from_secs(30));
    }

    #[test]
    fn overrides_are_applied() {
        let config = config_from(&[
            ("PORT", "8080"),
            ("SOURCE_URL", "http://localhost:9000/books.html"),
            ("FETCH_TIMEOUT_SECS", "5"),
        ])
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.source_url, "http://localhost:9000/books.html");
        assert_eq!(config.fetch_timeout, Duration::from_secs(5));
    }

    #[test]
    fn invalid_port_is_rejected() {
        let err = config_from(&[("PORT", "fifty")]).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }
}
