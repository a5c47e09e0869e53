//! Upstream error taxonomy

use thiserror::Error;

/// Errors surfaced by the upstream weather API
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Upstream rejected our API key (HTTP 401)
    #[error("Remote client authentication issue")]
    UpstreamAuth,

    /// Any other non-success upstream status, with the response body
    #[error("Upstream returned {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    /// Transport or decoding failure (connect, timeout, malformed body)
    #[error("Upstream request failed: {0}")]
    Request(#[from] reqwest::Error),
}

impl WeatherError {
    /// True when the failure is an upstream authentication problem
    #[must_use]
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::UpstreamAuth)
    }
}
