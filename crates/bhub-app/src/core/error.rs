//! Errors surfaced by intent dispatch.

use bhub_core::ErrorCategory;
use thiserror::Error;

/// Why an intent was rejected.
///
/// Dispatch leaves all state untouched when it returns an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Error))]
pub enum IntentError {
    /// Creation form submitted while a field is blank.
    #[error("group name and description must not be blank")]
    EmptyGroupFields,

    /// Payment confirmation requested with no method selected.
    #[error("no payment method selected")]
    NoPaymentMethodSelected,

    /// Payment confirmed while the confirmation dialog was not showing.
    #[error("payment confirmation was not requested")]
    ConfirmationNotRequested,
}

impl IntentError {
    /// Category for frontend error treatment.
    ///
    /// Every dispatch rejection is a user-input problem.
    #[must_use]
    pub fn category(self) -> ErrorCategory {
        ErrorCategory::Input
    }
}
