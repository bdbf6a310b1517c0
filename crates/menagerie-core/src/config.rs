//! Configuration loading and typed config structures for the Menagerie
//! server.
//!
//! The canonical configuration lives in `menagerie-config.yaml` at the
//! project root. This module defines strongly-typed structs mirroring the
//! YAML structure and a loader that reads the file. Every field has a
//! compiled-in default, so an absent file (or an empty one) yields a fully
//! working configuration.

use std::path::Path;

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

/// Top-level server configuration.
///
/// Mirrors the structure of `menagerie-config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ServiceConfig {
    /// Network settings for the HTTP server.
    #[serde(default)]
    pub server: ServerSection,

    /// Location of the prebuilt frontend bundle.
    #[serde(default)]
    pub assets: AssetsSection,
}

impl ServiceConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// The `MENAGERIE_PORT` environment variable overrides `server.port`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let mut config: Self = serde_yml::from_str(&contents)?;
        config.server.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_yml::from_str(yaml)?;
        config.server.apply_env_overrides();
        Ok(config)
    }
}

/// Network settings for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerSection {
    /// The host address to bind to.
    #[serde(default = "default_host")]
    pub host: String,

    /// The TCP port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl ServerSection {
    /// Apply environment variable overrides for deploy-time knobs.
    ///
    /// `MENAGERIE_PORT` overrides `port` when set to a valid port number;
    /// an unparsable value is ignored with a warning.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(raw) = std::env::var("MENAGERIE_PORT") {
            match raw.parse::<u16>() {
                Ok(port) => self.port = port,
                Err(_) => {
                    tracing::warn!(value = raw, "ignoring unparsable MENAGERIE_PORT");
                }
            }
        }
    }
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Location of the prebuilt frontend bundle on disk.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AssetsSection {
    /// Directory holding the compiled bundle (HTML, JS, source maps).
    #[serde(default = "default_dist_dir")]
    pub dist_dir: String,

    /// Entry HTML file the root path redirects to.
    #[serde(default = "default_entry")]
    pub entry: String,
}

impl Default for AssetsSection {
    fn default() -> Self {
        Self {
            dist_dir: default_dist_dir(),
            entry: default_entry(),
        }
    }
}

fn default_host() -> String {
    String::from("0.0.0.0")
}

const fn default_port() -> u16 {
    8080
}

fn default_dist_dir() -> String {
    String::from("dist")
}

fn default_entry() -> String {
    String::from("index.html")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = ServiceConfig::parse("{}").unwrap();
        assert_eq!(config, ServiceConfig::default());
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.assets.dist_dir, "dist");
        assert_eq!(config.assets.entry, "index.html");
    }

    #[test]
    fn sections_parse_with_partial_overrides() {
        let yaml = r"
server:
  port: 3000
assets:
  dist_dir: bundle
";
        let config = ServiceConfig::parse(yaml).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.assets.dist_dir, "bundle");
        assert_eq!(config.assets.entry, "index.html");
    }

    #[test]
    fn malformed_yaml_is_an_error() {
        assert!(matches!(
            ServiceConfig::parse("server: ["),
            Err(ConfigError::Yaml { .. })
        ));
    }
}
