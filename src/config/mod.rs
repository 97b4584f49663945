//! Configuration Module - CLI, Environment and TOML Settings
//!
//! The exporter is configured from command-line flags, the
//! `OPENSEARCH_DASHBOARDS_USER` / `OPENSEARCH_DASHBOARDS_PASSWORD`
//! environment variables, and an optional TOML file. Flags win over the
//! file; the file wins over the defaults below.
//!
//! The loaded config is immutable and shared by reference for the life
//! of the process.

pub mod cli;
pub mod loader;

use std::fmt;
use std::time::Duration;

use serde::Deserialize;

pub use cli::Cli;

/// Default upstream base URL.
pub const DEFAULT_URL: &str = "http://localhost:5601";

/// Default exposition port.
pub const DEFAULT_PORT: u16 = 9684;

/// Top-level exporter configuration.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ExporterConfig {
  /// Where and how to reach OpenSearch Dashboards.
  pub upstream: UpstreamConfig,
  /// Exposition server settings.
  pub server: ServerConfig,
  /// Log output settings.
  pub logging: LoggingConfig,
}

/// Upstream `/api/status` connection settings.
#[derive(Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct UpstreamConfig {
  /// Base URL, e.g. `https://10.0.0.8:5601`. No trailing slash.
  pub url: String,
  /// Basic-auth user. Empty means no credentials are sent.
  pub user: String,
  /// Basic-auth password.
  pub password: String,
  /// Request timeout in seconds.
  pub timeout_seconds: u64,
  /// Verify the upstream TLS certificate.
  ///
  /// Off by default: dashboards are commonly deployed behind internal
  /// or self-signed certificates.
  pub verify_tls: bool,
}

impl UpstreamConfig {
  /// Request timeout as a `Duration`.
  pub const fn timeout(&self) -> Duration {
    Duration::from_secs(self.timeout_seconds)
  }

  /// Credentials to forward, if a user is configured.
  pub fn credentials(&self) -> Option<(&str, &str)> {
    (!self.user.is_empty()).then_some((self.user.as_str(), self.password.as_str()))
  }
}

impl Default for UpstreamConfig {
  fn default() -> Self {
    Self {
      url: DEFAULT_URL.to_string(),
      user: String::new(),
      password: String::new(),
      timeout_seconds: 5,
      verify_tls: false,
    }
  }
}

// Password stays out of logs.
impl fmt::Debug for UpstreamConfig {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("UpstreamConfig")
      .field("url", &self.url)
      .field("user", &self.user)
      .field("password", &if self.password.is_empty() { "" } else { "***" })
      .field("timeout_seconds", &self.timeout_seconds)
      .field("verify_tls", &self.verify_tls)
      .finish()
  }
}

/// Exposition server configuration.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ServerConfig {
  /// Listen address.
  pub bind_address: String,
  /// Listen port.
  pub port: u16,
}

impl ServerConfig {
  /// `address:port` string for the listener.
  pub fn socket_addr(&self) -> String {
    format!("{}:{}", self.bind_address, self.port)
  }
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      bind_address: "0.0.0.0".to_string(),
      port: DEFAULT_PORT,
    }
  }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
  /// Human-readable lines.
  #[default]
  Text,
  /// Structured JSON, one object per event.
  Json,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
  /// Filter directive used when `RUST_LOG` is unset.
  pub level: String,
  /// Output format.
  pub format: LogFormat,
}

impl Default for LoggingConfig {
  fn default() -> Self {
    Self {
      level: "info".to_string(),
      format: LogFormat::Text,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_defaults() {
    let config = ExporterConfig::default();
    assert_eq!(config.upstream.url, "http://localhost:5601");
    assert_eq!(config.upstream.timeout(), Duration::from_secs(5));
    assert!(!config.upstream.verify_tls);
    assert_eq!(config.server.socket_addr(), "0.0.0.0:9684");
    assert_eq!(config.logging.format, LogFormat::Text);
  }

  #[test]
  fn test_credentials_require_user() {
    let mut upstream = UpstreamConfig::default();
    assert_eq!(upstream.credentials(), None);

    upstream.user = "admin".to_string();
    upstream.password = "s3cret".to_string();
    assert_eq!(upstream.credentials(), Some(("admin", "s3cret")));
  }

  #[test]
  fn test_debug_redacts_password() {
    let upstream = UpstreamConfig {
      user: "admin".to_string(),
      password: "s3cret".to_string(),
      ..UpstreamConfig::default()
    };
    let rendered = format!("{upstream:?}");
    assert!(rendered.contains("admin"));
    assert!(!rendered.contains("s3cret"));
  }
}
