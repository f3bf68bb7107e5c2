//! The application core: one state container, one mutation path.

use super::{
    error::IntentError,
    intent::{Intent, Screen},
    navigator::Navigator,
};
use crate::views::ViewState;

/// Top-level application state for the BHub client.
///
/// Holds the navigator and every screen's view state. All mutation goes
/// through [`AppCore::dispatch`]: shells read state, render it, and feed
/// user actions back as [`Intent`]s.
#[derive(Debug, Clone, Default)]
pub struct AppCore {
    navigator: Navigator,
    views: ViewState,
}

impl AppCore {
    /// Fresh core: home screen, sample view content.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The screen currently shown.
    #[must_use]
    pub fn current_screen(&self) -> Screen {
        self.navigator.current()
    }

    /// Read access to all view state.
    #[must_use]
    pub fn views(&self) -> &ViewState {
        &self.views
    }

    /// Apply one user action.
    ///
    /// On error the state is left exactly as it was.
    pub fn dispatch(&mut self, intent: Intent) -> Result<(), IntentError> {
        match intent {
            Intent::NavigateTo { screen } => self.navigator.navigate_to(screen),
            Intent::NavigateBack => self.navigator.navigate_back(),
            Intent::ExploreGroups => self.navigator.navigate_to(Screen::GroupList),
            Intent::StartCreateGroup => self.navigator.navigate_to(Screen::CreateGroup),
            Intent::OpenGroupDetails => self.navigator.navigate_to(Screen::GroupDetails),

            Intent::SetGroupName { name } => self.views.create_group.set_name(name),
            Intent::SetGroupDescription { description } => {
                self.views.create_group.set_description(description);
            }
            Intent::SubmitCreateGroup => {
                if !self.views.create_group.can_submit() {
                    return Err(IntentError::EmptyGroupFields);
                }
                // Creation is not wired to the data layer: submitting resets
                // the form and returns to the list.
                self.views.create_group.reset();
                self.navigator.navigate_back();
            }

            Intent::SelectPaymentMethod { method } => self.views.payment.select(method),
            Intent::RequestPaymentConfirmation => {
                if !self.views.payment.can_proceed() {
                    return Err(IntentError::NoPaymentMethodSelected);
                }
                self.views.payment.request_confirmation();
            }
            Intent::DismissPaymentConfirmation => self.views.payment.dismiss_confirmation(),
            Intent::ConfirmPayment => {
                if !self.views.payment.is_confirming() {
                    return Err(IntentError::ConfirmationNotRequested);
                }
                self.views.payment.confirm();
            }
        }
        Ok(())
    }
}
