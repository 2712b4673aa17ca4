//! # Configuration Utilities
//!
//! TOML configuration shared by the `stego` CLI and the web server. Every
//! section and field is optional; missing values fall back to the defaults
//! below.
//!
//! ```toml
//! [server]
//! address = "127.0.0.1:3000"
//! static_dir = "frontend/build"
//!
//! [limits]
//! max_message_chars = 1000
//! max_upload_bytes = 5242880
//! accepted_types = ["image/jpeg", "image/png", "image/gif", "image/webp"]
//!
//! [logging]
//! level = "info"
//! ```

use anyhow::{Context, Result};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::fs;

/// Load a TOML configuration file and deserialize it into the specified type.
///
/// # Arguments
/// - `path`: Path to the TOML configuration file
///
/// # Returns
/// - `Ok(T)`: Successfully loaded and parsed configuration
/// - `Err`: File I/O or parsing error
///
/// # Example
/// ```ignore
/// let config: AppConfig = load_config("config/stego.toml")?;
/// ```
pub fn load_config<T>(path: &str) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
{
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read config {}", path))?;
    let config: T =
        toml::from_str(&content).with_context(|| format!("Failed to parse config {}", path))?;
    Ok(config)
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub limits: LimitsConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load from `path`, or use defaults when no path is given.
    pub fn load_or_default(path: Option<&str>) -> Result<Self> {
        match path {
            Some(path) => load_config(path),
            None => Ok(Self::default()),
        }
    }
}

/// HTTP front end settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Listen address (e.g., "127.0.0.1:3000")
    pub address: String,
    /// Directory of static frontend files served at `/`, if any
    pub static_dir: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: "127.0.0.1:3000".to_string(),
            static_dir: None,
        }
    }
}

/// Input limits applied before anything reaches the codec.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Longest accepted message, in characters
    pub max_message_chars: usize,
    /// Largest accepted upload, in bytes
    pub max_upload_bytes: usize,
    /// MIME types accepted for uploaded carrier images
    pub accepted_types: Vec<String>,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_message_chars: 1000,
            max_upload_bytes: 5 * 1024 * 1024,
            accepted_types: ["image/jpeg", "image/png", "image/gif", "image/webp"]
                .iter()
                .map(|t| t.to_string())
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// One of "off", "error", "warn", "info", "debug", "trace"
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Parsed level, falling back to `Info` for unknown names.
    pub fn level_filter(&self) -> LevelFilter {
        self.level.parse().unwrap_or(LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.limits.max_message_chars, 1000);
        assert_eq!(config.limits.max_upload_bytes, 5_242_880);
        assert_eq!(config.server.address, "127.0.0.1:3000");
    }

    #[test]
    fn test_partial_sections() {
        let config: AppConfig = toml::from_str(
            r#"
            [limits]
            max_message_chars = 20

            [logging]
            level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.limits.max_message_chars, 20);
        assert_eq!(config.limits.accepted_types.len(), 4);
        assert_eq!(config.logging.level_filter(), LevelFilter::Debug);
        assert_eq!(config.server, ServerConfig::default());
    }

    #[test]
    fn test_unknown_level_falls_back_to_info() {
        let logging = LoggingConfig {
            level: "chatty".to_string(),
        };
        assert_eq!(logging.level_filter(), LevelFilter::Info);
    }

    #[test]
    fn test_load_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server]\naddress = \"0.0.0.0:8080\"").unwrap();

        let config: AppConfig = load_config(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.server.address, "0.0.0.0:8080");
        assert!(AppConfig::load_or_default(Some("/nonexistent/stego.toml")).is_err());
    }
}
