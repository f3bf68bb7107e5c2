//! # Create Group Form State

use serde::{Deserialize, Serialize};

use crate::workflows::groups::can_submit_group_form;

/// Local form state for the creation screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct CreateGroupState {
    /// Group name field
    pub name: String,
    /// Description field
    pub description: String,
}

impl CreateGroupState {
    /// Replace the name field.
    pub fn set_name(&mut self, name: String) {
        self.name = name;
    }

    /// Replace the description field.
    pub fn set_description(&mut self, description: String) {
        self.description = description;
    }

    /// Whether the submit control is enabled.
    ///
    /// Both fields must contain at least one non-whitespace character.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        can_submit_group_form(&self.name, &self.description)
    }

    /// Clear both fields.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
