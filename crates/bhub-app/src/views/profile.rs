//! # User Profile View State

use bhub_core::JoinedGroup;
use serde::{Deserialize, Serialize};

/// Label of the single action row on the profile screen.
pub const PAYMENT_HISTORY_ACTION: &str = "Payment History";

/// State behind the profile screen: a static header, one action row, and
/// the joined-groups list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct ProfileState {
    /// Display name in the header
    pub display_name: String,
    /// Email shown under the name
    pub email: String,
    /// Groups the user belongs to, in display order
    pub joined_groups: Vec<JoinedGroup>,
}

impl Default for ProfileState {
    fn default() -> Self {
        Self {
            display_name: "John Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            joined_groups: sample_joined_groups(),
        }
    }
}

/// The fixed three-entry joined-groups list the screen renders.
#[must_use]
pub fn sample_joined_groups() -> Vec<JoinedGroup> {
    [
        ("1", "Tech Enthusiasts", "Member"),
        ("2", "Digital Artists", "Admin"),
        ("3", "Startup Network", "Moderator"),
    ]
    .into_iter()
    .map(|(id, name, role)| JoinedGroup {
        id: id.to_string(),
        name: name.to_string(),
        role: role.to_string(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_renders_the_sample_profile() {
        let state = ProfileState::default();
        assert_eq!(state.display_name, "John Doe");
        assert_eq!(state.email, "john.doe@example.com");
        assert_eq!(state.joined_groups.len(), 3);
        assert_eq!(state.joined_groups[1].role, "Admin");
    }
}
