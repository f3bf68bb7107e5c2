//! Error categories shared across the client crates.
//!
//! Each layer defines its own error enum; what they share is the category
//! a failure maps onto, so frontends can pick a consistent UI treatment
//! without matching on layer-specific variants.

use serde::{Deserialize, Serialize};

/// High-level error categories for frontend error handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum ErrorCategory {
    /// User input validation errors (correctable by the user)
    Input,
    /// Configuration errors (correctable by changing settings)
    Config,
    /// Resource not found (transient or permanent)
    NotFound,
    /// Network connectivity errors (often transient)
    Network,
    /// Response body did not match the expected schema
    Decode,
    /// General operation failures (catch-all)
    Operation,
}

impl ErrorCategory {
    /// Whether the user can act to resolve the failure.
    #[must_use]
    pub fn is_user_correctable(self) -> bool {
        matches!(self, Self::Input | Self::Config)
    }

    /// Whether a retry may succeed without any other change.
    #[must_use]
    pub fn is_transient(self) -> bool {
        matches!(self, Self::Network | Self::NotFound)
    }
}
