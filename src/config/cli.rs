//! Command-line flags.

use std::path::PathBuf;

use clap::Parser;

use super::LogFormat;

/// Prometheus Exporter for OpenSearch Dashboards
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "opensearch-dashboards-exporter", version, about, long_about = None)]
pub struct Cli {
  /// Optional TOML config file; flags below override its values.
  #[arg(short, long)]
  pub config: Option<PathBuf>,

  /// The OpenSearch address to fetch metrics from. E.g: http(s)://<IP>:5601
  /// [default: http://localhost:5601]
  #[arg(long)]
  pub url: Option<String>,

  /// The port number to the prometheus exporter to use [default: 9684]
  #[arg(short, long)]
  pub port: Option<u16>,

  /// Address the exporter listens on [default: 0.0.0.0]
  #[arg(long)]
  pub bind: Option<String>,

  /// Basic-auth user for the dashboards API
  #[arg(long, env = "OPENSEARCH_DASHBOARDS_USER", hide_env_values = true)]
  pub user: Option<String>,

  /// Basic-auth password for the dashboards API
  #[arg(long, env = "OPENSEARCH_DASHBOARDS_PASSWORD", hide_env_values = true)]
  pub password: Option<String>,

  /// Upstream request timeout in seconds [default: 5]
  #[arg(long)]
  pub timeout_secs: Option<u64>,

  /// Verify the upstream TLS certificate (off by default)
  #[arg(long)]
  pub verify_tls: bool,

  /// Log filter used when RUST_LOG is unset [default: info]
  #[arg(long)]
  pub log_level: Option<String>,

  /// Log output format [default: text]
  #[arg(long, value_enum)]
  pub log_format: Option<LogFormat>,
}
