//! Upstream fetch errors.

use std::time::Duration;

use thiserror::Error;

/// Why a status fetch produced no document.
///
/// Never escapes the fetcher: it exists so the failure can be logged
/// with the right context before the scrape reports the upstream down.
#[derive(Debug, Error)]
pub enum FetchError {
  /// Upstream answered with a non-2xx status.
  #[error("status code {status}, response text {body:?}")]
  Status {
    /// HTTP status code.
    status: u16,
    /// Response body, possibly empty.
    body: String,
  },

  /// No complete response within the configured timeout.
  #[error("request timed out after {0:?}")]
  Timeout(Duration),

  /// Connection refused, DNS, TLS handshake and other transport errors.
  #[error("transport error: {0}")]
  Transport(#[source] reqwest::Error),

  /// The body was not valid JSON.
  #[error("response body is not valid JSON: {0}")]
  Decode(#[from] serde_json::Error),
}

impl FetchError {
  /// Classify a reqwest error, separating timeouts from the rest.
  pub fn from_reqwest(err: reqwest::Error, timeout: Duration) -> Self {
    if err.is_timeout() {
      Self::Timeout(timeout)
    } else {
      Self::Transport(err)
    }
  }
}
