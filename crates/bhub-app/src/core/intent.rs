//! User actions as data.
//!
//! Every UI callback of every screen is expressed as an [`Intent`] and
//! routed through [`AppCore::dispatch`](crate::AppCore::dispatch). Shells
//! never mutate state directly.

use serde::{Deserialize, Serialize};

use crate::views::PaymentMethod;

/// Screen identifier for navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum Screen {
    /// Landing screen
    Home,
    /// Browsable list of available groups
    GroupList,
    /// Group creation form
    CreateGroup,
    /// Single group with its member list
    GroupDetails,
}

impl Screen {
    /// The screen reached by one step of back navigation.
    ///
    /// The table is total and fixed; `Home` is its own parent, so back on
    /// the landing screen is a no-op. There is no history stack: details
    /// always back to the list, however they were entered.
    #[must_use]
    pub fn parent(self) -> Screen {
        match self {
            Screen::Home => Screen::Home,
            Screen::GroupList => Screen::Home,
            Screen::CreateGroup => Screen::GroupList,
            Screen::GroupDetails => Screen::GroupList,
        }
    }
}

/// A user action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum Intent {
    // =========================================================================
    // Navigation Intents
    // =========================================================================
    /// Jump directly to a screen
    NavigateTo {
        /// Destination screen
        screen: Screen,
    },

    /// One step of back navigation along the fixed parent table
    NavigateBack,

    /// "Explore" on the home screen
    ExploreGroups,

    /// "Create" affordances on the group list (top bar and FAB)
    StartCreateGroup,

    /// Row tap on the group list
    OpenGroupDetails,

    // =========================================================================
    // Create Group Form Intents
    // =========================================================================
    /// Edit the name field of the creation form
    SetGroupName {
        /// New field content
        name: String,
    },

    /// Edit the description field of the creation form
    SetGroupDescription {
        /// New field content
        description: String,
    },

    /// Submit the creation form
    SubmitCreateGroup,

    // =========================================================================
    // Payment Intents
    // =========================================================================
    /// Pick a payment method
    SelectPaymentMethod {
        /// The chosen method
        method: PaymentMethod,
    },

    /// "Proceed to Payment" — opens the confirmation dialog
    RequestPaymentConfirmation,

    /// Cancel out of the confirmation dialog
    DismissPaymentConfirmation,

    /// Confirm the (simulated) payment
    ConfirmPayment,
}
