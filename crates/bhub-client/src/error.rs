//! API error taxonomy.
//!
//! Transport faults, non-success statuses, and decode failures are
//! distinct error kinds, so callers can route "network down" and "the
//! server changed its schema" differently instead of seeing one generic
//! fault.

use bhub_core::ErrorCategory;
use thiserror::Error;

/// Errors surfaced by the API client and repository.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a usable response.
    #[error("request to {url} failed: {source}")]
    Transport {
        /// Request URL
        url: String,
        /// Underlying client error
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("server returned {status} for {url}")]
    Status {
        /// Request URL
        url: String,
        /// HTTP status code
        status: u16,
    },

    /// The response body did not match the expected schema.
    #[error("failed to decode {endpoint} response: {source}")]
    Decode {
        /// Operation whose response failed to decode
        endpoint: &'static str,
        /// Underlying decode error
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    /// Category for frontend error treatment.
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Transport { .. } => ErrorCategory::Network,
            Self::Status { status: 404, .. } => ErrorCategory::NotFound,
            Self::Status { .. } => ErrorCategory::Operation,
            Self::Decode { .. } => ErrorCategory::Decode,
        }
    }

    /// The HTTP status code, when the server produced one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
