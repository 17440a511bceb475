//! Configuration loading for the schedviz server binary.
//!
//! The canonical configuration lives in `schedviz-config.yaml` next to
//! the binary. This module defines the top-level struct mirroring the
//! YAML structure and a loader that reads the file. When the file is
//! absent, defaults apply, including the conventional `./os_project`
//! executable path.

use std::path::Path;

use schedviz_observer::ServerConfig;
use schedviz_relay::RelayConfig;
use serde::Deserialize;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level harness configuration.
///
/// Mirrors the structure of `schedviz-config.yaml`. All fields have
/// defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    /// Relay pipeline settings (executable path, line pacing).
    #[serde(default)]
    pub relay: RelayConfig,

    /// Server bind settings (host, port).
    #[serde(default)]
    pub server: ServerConfig,
}

impl AppConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_yml::from_str(&contents)?;
        Ok(config)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yml::from_str(yaml)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use std::path::PathBuf;

    #[test]
    fn default_config_is_valid() {
        let config = AppConfig::default();
        assert_eq!(config.relay.executable, PathBuf::from("./os_project"));
        assert_eq!(config.relay.line_delay_ms, 100);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 5000);
    }

    #[test]
    fn parse_full_yaml() {
        let yaml = r#"
relay:
  executable: "./build/sched_sim"
  line_delay_ms: 25

server:
  host: "127.0.0.1"
  port: 8090
"#;

        let config = AppConfig::parse(yaml).unwrap();
        assert_eq!(config.relay.executable, PathBuf::from("./build/sched_sim"));
        assert_eq!(config.relay.line_delay_ms, 25);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8090);
    }

    #[test]
    fn parse_minimal_yaml() {
        let yaml = "server:\n  port: 9000\n";
        let config = AppConfig::parse(yaml).unwrap();

        // Port is overridden
        assert_eq!(config.server.port, 9000);
        // Everything else uses defaults
        assert_eq!(config.relay.executable, PathBuf::from("./os_project"));
        assert_eq!(config.server.host, "0.0.0.0");
    }

    #[test]
    fn parse_empty_yaml() {
        let config = AppConfig::parse("");
        assert!(config.is_ok());
    }
}
