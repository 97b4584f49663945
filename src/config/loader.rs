//! Configuration Loader - File Loading, Overrides and Validation
//!
//! Builds the final [`ExporterConfig`] from defaults, an optional TOML
//! file and the parsed command line, then validates it with clear
//! error messages.

use std::path::Path;

use anyhow::{Context, Result};
use url::Url;

use super::{Cli, ExporterConfig};

/// Load, merge and validate the configuration for one process.
///
/// # Errors
/// Returns detailed error if:
/// - The config file doesn't exist, can't be read or isn't valid TOML
/// - Validation rules are violated
pub fn load_config(cli: &Cli) -> Result<ExporterConfig> {
  let mut config = match &cli.config {
    Some(path) => load_file(path)?,
    None => ExporterConfig::default(),
  };

  apply_cli(&mut config, cli);
  normalize(&mut config);
  validate_config(&config)?;

  Ok(config)
}

/// Read a TOML config file.
pub fn load_file(path: &Path) -> Result<ExporterConfig> {
  let content = std::fs::read_to_string(path)
    .with_context(|| format!("Failed to read config file: {}", path.display()))?;

  parse_config(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Parse TOML config content. Missing tables and keys take defaults.
pub fn parse_config(content: &str) -> Result<ExporterConfig> {
  Ok(toml::from_str(content)?)
}

/// Command-line flags (and the credential env vars) override the file.
fn apply_cli(config: &mut ExporterConfig, cli: &Cli) {
  if let Some(url) = &cli.url {
    config.upstream.url.clone_from(url);
  }
  if let Some(user) = &cli.user {
    config.upstream.user.clone_from(user);
  }
  if let Some(password) = &cli.password {
    config.upstream.password.clone_from(password);
  }
  if let Some(timeout) = cli.timeout_secs {
    config.upstream.timeout_seconds = timeout;
  }
  if cli.verify_tls {
    config.upstream.verify_tls = true;
  }
  if let Some(port) = cli.port {
    config.server.port = port;
  }
  if let Some(bind) = &cli.bind {
    config.server.bind_address.clone_from(bind);
  }
  if let Some(level) = &cli.log_level {
    config.logging.level.clone_from(level);
  }
  if let Some(format) = cli.log_format {
    config.logging.format = format;
  }
}

/// The status path is appended verbatim, so drop trailing slashes.
fn normalize(config: &mut ExporterConfig) {
  let trimmed = config.upstream.url.trim().trim_end_matches('/').to_string();
  config.upstream.url = trimmed;
}

fn validate_config(config: &ExporterConfig) -> Result<()> {
  let url = Url::parse(&config.upstream.url)
    .with_context(|| format!("Invalid upstream URL: {}", config.upstream.url))?;
  anyhow::ensure!(
    matches!(url.scheme(), "http" | "https"),
    "Upstream URL must use http or https, got {}",
    url.scheme()
  );

  anyhow::ensure!(
    config.upstream.timeout_seconds > 0,
    "Upstream timeout must be positive"
  );
  anyhow::ensure!(config.server.port != 0, "Exporter port must not be 0");
  anyhow::ensure!(
    !config.server.bind_address.is_empty(),
    "Bind address must not be empty"
  );

  Ok(())
}

#[cfg(test)]
mod tests {
  use clap::Parser;

  use super::*;
  use crate::config::LogFormat;

  fn cli(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("exporter").chain(args.iter().copied())).unwrap()
  }

  #[test]
  fn test_load_nonexistent_file() {
    let result = load_file(Path::new("nonexistent.toml"));
    assert!(result.is_err());
  }

  #[test]
  fn test_parse_partial_file_keeps_defaults() {
    let config = parse_config(
      r#"
      [upstream]
      url = "https://dashboards.internal:5601"
      timeout_seconds = 10

      [logging]
      format = "json"
      "#,
    )
    .unwrap();

    assert_eq!(config.upstream.url, "https://dashboards.internal:5601");
    assert_eq!(config.upstream.timeout_seconds, 10);
    assert_eq!(config.server.port, 9684);
    assert_eq!(config.logging.format, LogFormat::Json);
    assert_eq!(config.logging.level, "info");
  }

  #[test]
  fn test_cli_overrides_file_values() {
    let mut config = parse_config("[server]\nport = 1000\n").unwrap();
    apply_cli(&mut config, &cli(&["--port", "8080", "--url", "http://10.0.0.1:5601/"]));
    normalize(&mut config);

    assert_eq!(config.server.port, 8080);
    assert_eq!(config.upstream.url, "http://10.0.0.1:5601");
  }

  #[test]
  fn test_verify_tls_flag_only_enables() {
    let mut config = parse_config("[upstream]\nverify_tls = true\n").unwrap();
    apply_cli(&mut config, &cli(&[]));
    assert!(config.upstream.verify_tls);
  }

  #[test]
  fn test_validation_rejects_bad_values() {
    let mut config = ExporterConfig::default();
    config.upstream.url = "localhost".to_string();
    assert!(validate_config(&config).is_err());

    let mut config = ExporterConfig::default();
    config.upstream.url = "ftp://localhost:5601".to_string();
    assert!(validate_config(&config).is_err());

    let mut config = ExporterConfig::default();
    config.upstream.timeout_seconds = 0;
    assert!(validate_config(&config).is_err());

    let mut config = ExporterConfig::default();
    config.server.port = 0;
    assert!(validate_config(&config).is_err());

    assert!(validate_config(&ExporterConfig::default()).is_ok());
  }
}
