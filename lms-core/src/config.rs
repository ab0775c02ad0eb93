//! Configuration management

use crate::error::{ErrorContext, LmsError, LmsResult};
use crate::logging::{LogFormat, LoggingConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Top-level configuration for the LMS front end
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LmsConfig {
    pub server: ServerConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
}

/// HTTP listener settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Pretty debug-level logs with source locations, see [`LmsConfig::apply_dev_mode`]
    pub dev_mode: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            dev_mode: false,
        }
    }
}

impl ServerConfig {
    /// Get the server address
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Simulated latency of the mock auth backend
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub sign_in_delay_ms: u64,
    pub sign_up_delay_ms: u64,
    pub reset_delay_ms: u64,
    /// How long the sign-up confirmation stays up before moving to sign-in
    pub sign_up_redirect_secs: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            sign_in_delay_ms: 1500,
            sign_up_delay_ms: 2000,
            reset_delay_ms: 0,
            sign_up_redirect_secs: 2,
        }
    }
}

impl AuthConfig {
    /// Zero-latency settings for tests
    pub fn instant() -> Self {
        Self {
            sign_in_delay_ms: 0,
            sign_up_delay_ms: 0,
            reset_delay_ms: 0,
            sign_up_redirect_secs: 0,
        }
    }

    pub fn sign_in_delay(&self) -> Duration {
        Duration::from_millis(self.sign_in_delay_ms)
    }

    pub fn sign_up_delay(&self) -> Duration {
        Duration::from_millis(self.sign_up_delay_ms)
    }

    pub fn reset_delay(&self) -> Duration {
        Duration::from_millis(self.reset_delay_ms)
    }
}

impl LmsConfig {
    /// Layer defaults, an optional TOML file, and `LMS__*` environment variables.
    ///
    /// `LMS__SERVER__PORT=3000` overrides `server.port`.
    pub fn load(path: Option<&Path>) -> LmsResult<Self> {
        let defaults = config::Config::try_from(&LmsConfig::default())
            .map_err(|e| crate::config_error!("Failed to build default config", "config", e))?;

        let mut builder = config::Config::builder().add_source(defaults);

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let config: LmsConfig = builder
            .add_source(
                config::Environment::with_prefix("LMS")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| LmsError::Config {
                message: format!("Failed to load config: {}", e),
                source: Some(Box::new(e)),
                context: ErrorContext::new("config")
                    .with_operation("load")
                    .with_suggestion("Check TOML syntax and LMS__* variables"),
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Read a TOML file without environment layering
    pub fn from_file<P: AsRef<Path>>(path: P) -> LmsResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| LmsError::Config {
            message: format!("Failed to read config file: {}", e),
            source: Some(Box::new(e)),
            context: ErrorContext::new("config")
                .with_operation("read_file")
                .with_suggestion("Check if the config file exists and is readable"),
        })?;

        let config: LmsConfig = toml::from_str(&content).map_err(|e| LmsError::Config {
            message: format!("Failed to parse config: {}", e),
            source: Some(Box::new(e)),
            context: ErrorContext::new("config")
                .with_operation("parse_toml")
                .with_suggestion("Check TOML syntax in config file"),
        })?;

        config.validate()?;
        Ok(config)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> LmsResult<()> {
        let content = toml::to_string_pretty(self).map_err(|e| LmsError::Config {
            message: format!("Failed to serialize config: {}", e),
            source: Some(Box::new(e)),
            context: ErrorContext::new("config").with_operation("serialize_toml"),
        })?;

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Switch logging to a readable development setup when `server.dev_mode`
    /// is on. A level other than the default `info` is left alone.
    pub fn apply_dev_mode(&mut self) {
        if !self.server.dev_mode {
            return;
        }
        self.logging.format = LogFormat::Pretty;
        self.logging.include_location = true;
        if self.logging.level == "info" {
            self.logging.level = "debug".to_string();
        }
    }

    pub fn validate(&self) -> LmsResult<()> {
        if self.server.host.trim().is_empty() {
            return Err(crate::validation_error!("must not be empty", "server.host", "config"));
        }
        if self.server.port == 0 {
            return Err(crate::validation_error!(
                "must be greater than 0",
                "server.port",
                "config"
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        let config = LmsConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.server.address(), "127.0.0.1:8080");
        assert_eq!(config.auth.sign_in_delay(), Duration::from_millis(1500));
        assert_eq!(config.auth.sign_up_delay(), Duration::from_millis(2000));
    }

    #[test]
    fn test_dev_mode_switches_logging() {
        let mut config = LmsConfig::default();
        config.apply_dev_mode();
        assert_eq!(config.logging.format, LogFormat::Compact);
        assert_eq!(config.logging.level, "info");

        config.server.dev_mode = true;
        config.apply_dev_mode();
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert!(config.logging.include_location);
        assert_eq!(config.logging.level, "debug");

        let mut quiet = LmsConfig::default();
        quiet.server.dev_mode = true;
        quiet.logging.level = "warn".to_string();
        quiet.apply_dev_mode();
        assert_eq!(quiet.logging.level, "warn");
    }

    #[test]
    fn test_zero_port_rejected() {
        let mut config = LmsConfig::default();
        config.server.port = 0;
        assert!(matches!(
            config.validate(),
            Err(LmsError::Validation { ref field, .. }) if field == "server.port"
        ));
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lms.toml");

        let mut config = LmsConfig::default();
        config.server.port = 3000;
        config.auth = AuthConfig::instant();
        config.save_to_file(&path).unwrap();

        let loaded = LmsConfig::from_file(&path).unwrap();
        assert_eq!(loaded.server.port, 3000);
        assert_eq!(loaded.auth.sign_in_delay_ms, 0);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lms.toml");
        std::fs::write(&path, "[server]\nport = 9090\n").unwrap();

        let loaded = LmsConfig::load(Some(&path)).unwrap();
        assert_eq!(loaded.server.port, 9090);
        assert_eq!(loaded.server.host, "127.0.0.1");
        assert_eq!(loaded.auth.sign_up_redirect_secs, 2);
    }
}
