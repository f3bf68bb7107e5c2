//! # Payment Flow State
//!
//! A UI stub: the plan and amount are fixed display strings and confirming
//! performs no transaction. The confirmation dialog gates completion.

use serde::{Deserialize, Serialize};

/// Subscription plan shown in the summary.
pub const PLAN_LABEL: &str = "Premium Monthly";

/// Amount shown in the summary and the confirmation prompt.
pub const AMOUNT_LABEL: &str = "$9.99";

/// Available payment methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum PaymentMethod {
    /// Google Pay
    GooglePay,
    /// VNPay
    VnPay,
    /// Visa, Mastercard, or JCB
    CreditCard,
}

impl PaymentMethod {
    /// All methods, in display order.
    pub const ALL: [PaymentMethod; 3] = [Self::GooglePay, Self::VnPay, Self::CreditCard];

    /// Display title.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::GooglePay => "Google Pay",
            Self::VnPay => "VNPay",
            Self::CreditCard => "Credit Card",
        }
    }

    /// Supporting description shown under the title.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::GooglePay => "Fast and secure payment with Google",
            Self::VnPay => "Popular payment gateway in Vietnam",
            Self::CreditCard => "Pay with Visa, Mastercard, or JCB",
        }
    }
}

/// State of the payment screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct PaymentState {
    /// Currently selected method, if any
    pub selected: Option<PaymentMethod>,
    /// Whether the confirmation dialog is showing
    pub confirming: bool,
    /// Whether the simulated payment completed
    pub completed: bool,
}

impl PaymentState {
    /// Pick a method; re-selecting just replaces the choice.
    pub fn select(&mut self, method: PaymentMethod) {
        self.selected = Some(method);
    }

    /// Whether "Proceed to Payment" is enabled.
    #[must_use]
    pub fn can_proceed(&self) -> bool {
        self.selected.is_some()
    }

    /// Whether the confirmation dialog is showing.
    #[must_use]
    pub fn is_confirming(&self) -> bool {
        self.confirming
    }

    /// Open the confirmation dialog.
    pub fn request_confirmation(&mut self) {
        self.confirming = true;
    }

    /// Close the dialog without completing.
    pub fn dismiss_confirmation(&mut self) {
        self.confirming = false;
    }

    /// Complete the flow and close the dialog.
    pub fn confirm(&mut self) {
        self.completed = true;
        self.confirming = false;
    }

    /// Text of the confirmation dialog, when a method is selected.
    #[must_use]
    pub fn confirmation_prompt(&self) -> Option<String> {
        self.selected.map(|method| {
            format!(
                "You are about to make a payment of {AMOUNT_LABEL} using {}. Do you want to proceed?",
                method.title()
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn methods_carry_their_display_strings() {
        assert_eq!(PaymentMethod::GooglePay.title(), "Google Pay");
        assert_eq!(PaymentMethod::VnPay.title(), "VNPay");
        assert_eq!(PaymentMethod::CreditCard.title(), "Credit Card");
        assert_eq!(
            PaymentMethod::VnPay.description(),
            "Popular payment gateway in Vietnam"
        );
        assert_eq!(PaymentMethod::ALL.len(), 3);
    }

    #[test]
    fn dialog_gates_completion() {
        let mut payment = PaymentState::default();
        assert!(!payment.can_proceed());

        payment.select(PaymentMethod::GooglePay);
        assert!(payment.can_proceed());

        payment.request_confirmation();
        payment.dismiss_confirmation();
        assert!(!payment.completed);

        payment.request_confirmation();
        payment.confirm();
        assert!(payment.completed);
        assert!(!payment.is_confirming());
    }

    #[test]
    fn prompt_names_the_selected_method() {
        let mut payment = PaymentState::default();
        assert_eq!(payment.confirmation_prompt(), None);

        payment.select(PaymentMethod::CreditCard);
        assert_eq!(
            payment.confirmation_prompt().unwrap(),
            "You are about to make a payment of $9.99 using Credit Card. Do you want to proceed?"
        );
    }
}
