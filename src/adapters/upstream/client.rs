//! Dashboards Status Client - One GET per Scrape
//!
//! Wraps reqwest to fetch `<base_url>/api/status` with basic auth, an
//! `Accept: application/json` header and a bounded timeout. There is no
//! retry loop: the monitoring system scrapes again on its own schedule.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, error, instrument};

use super::error::FetchError;
use crate::config::UpstreamConfig;
use crate::domain::StatusDocument;
use crate::ports::StatusSource;

/// Status endpoint path appended to the base URL.
pub const API_STATUS_ENDPOINT: &str = "/api/status";

/// HTTP implementation of the [`StatusSource`] port.
pub struct DashboardsClient {
  /// Underlying HTTP client (timeout and TLS policy baked in).
  http: Client,
  /// Full status URL.
  status_url: String,
  /// Basic-auth credentials, if configured.
  credentials: Option<(String, String)>,
  /// Request timeout, kept for error reporting.
  timeout: Duration,
}

impl DashboardsClient {
  /// Create a client for the configured upstream.
  ///
  /// Certificate verification follows `verify_tls`, which is off by
  /// default for self-signed internal deployments.
  pub fn new(config: &UpstreamConfig) -> Result<Self> {
    let http = Client::builder()
      .timeout(config.timeout())
      .danger_accept_invalid_certs(!config.verify_tls)
      .build()
      .context("Failed to build HTTP client")?;

    Ok(Self {
      http,
      status_url: format!("{}{API_STATUS_ENDPOINT}", config.url),
      credentials: config
        .credentials()
        .map(|(user, password)| (user.to_string(), password.to_string())),
      timeout: config.timeout(),
    })
  }

  /// The URL every scrape hits.
  pub fn status_url(&self) -> &str {
    &self.status_url
  }

  /// Perform the request, surfacing every failure as a [`FetchError`].
  pub async fn request_status(&self) -> Result<Value, FetchError> {
    let mut request = self.http.get(&self.status_url).header(ACCEPT, "application/json");
    if let Some((user, password)) = &self.credentials {
      request = request.basic_auth(user, Some(password));
    }

    let response = request
      .send()
      .await
      .map_err(|e| FetchError::from_reqwest(e, self.timeout))?;

    let status = response.status();
    if !status.is_success() {
      let body = response.text().await.unwrap_or_default();
      return Err(FetchError::Status {
        status: status.as_u16(),
        body,
      });
    }

    let body = response
      .text()
      .await
      .map_err(|e| FetchError::from_reqwest(e, self.timeout))?;

    Ok(serde_json::from_str(&body)?)
  }
}

#[async_trait]
impl StatusSource for DashboardsClient {
  #[instrument(skip(self), fields(url = %self.status_url))]
  async fn fetch_status(&self) -> Option<StatusDocument> {
    match self.request_status().await {
      Ok(value) => {
        debug!("Status document received");
        Some(StatusDocument::new(value))
      }
      Err(FetchError::Status { status, body }) => {
        error!(status, body = %body, "Status request rejected by upstream");
        None
      }
      Err(e @ FetchError::Timeout(_)) => {
        error!(error = %e, "Status request timed out");
        None
      }
      Err(e) => {
        error!(
          error = %e,
          "It was not possible to collect the OpenSearch Dashboards metrics"
        );
        None
      }
    }
  }
}
