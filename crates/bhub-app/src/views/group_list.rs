//! # Group List View State

use bhub_core::Group;
use serde::{Deserialize, Serialize};

/// State behind the "Available BHubs" screen.
///
/// Rows navigate to the details screen; the top-bar action and the FAB
/// both open the creation form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct GroupListState {
    /// Groups to render, in display order
    pub groups: Vec<Group>,
}

impl Default for GroupListState {
    fn default() -> Self {
        Self {
            groups: sample_groups(),
        }
    }
}

impl GroupListState {
    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// True when there is nothing to render.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// The fixed three-entry sample list the screen renders.
#[must_use]
pub fn sample_groups() -> Vec<Group> {
    vec![
        Group {
            id: "1".to_string(),
            name: "Tech Enthusiasts".to_string(),
            description: "A community for tech lovers to share knowledge and experiences"
                .to_string(),
            member_count: 150,
        },
        Group {
            id: "2".to_string(),
            name: "Digital Artists".to_string(),
            description: "Connect with fellow artists and showcase your work".to_string(),
            member_count: 89,
        },
        Group {
            id: "3".to_string(),
            name: "Startup Network".to_string(),
            description: "Network with entrepreneurs and share startup experiences".to_string(),
            member_count: 234,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_renders_the_three_sample_groups() {
        let state = GroupListState::default();
        assert_eq!(state.len(), 3);
        assert!(!state.is_empty());
        assert_eq!(state.groups[0].name, "Tech Enthusiasts");
        assert_eq!(state.groups[1].member_count, 89);
        assert_eq!(state.groups[2].id, "3");
    }
}
