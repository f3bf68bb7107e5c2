//! # Group Details View State

use bhub_core::{Group, Member};
use serde::{Deserialize, Serialize};

/// State behind the details screen: a header plus the member list.
///
/// The Join affordance is rendered but has no transition wired, matching
/// the original client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct GroupDetailsState {
    /// Header content
    pub group: Group,
    /// Members to render, in display order
    pub members: Vec<Member>,
}

impl Default for GroupDetailsState {
    fn default() -> Self {
        Self {
            group: Group {
                id: "1".to_string(),
                name: "Tech Enthusiasts".to_string(),
                description: "A community for tech lovers to share knowledge and experiences"
                    .to_string(),
                member_count: 150,
            },
            members: sample_members(),
        }
    }
}

/// The fixed five-entry member list the screen renders.
#[must_use]
pub fn sample_members() -> Vec<Member> {
    [
        ("1", "John Doe", "Admin"),
        ("2", "Jane Smith", "Moderator"),
        ("3", "Alice Johnson", "Member"),
        ("4", "Bob Wilson", "Member"),
        ("5", "Carol Brown", "Member"),
    ]
    .into_iter()
    .map(|(id, name, role)| Member {
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
    fn default_renders_the_sample_header_and_members() {
        let state = GroupDetailsState::default();
        assert_eq!(state.group.name, "Tech Enthusiasts");
        assert_eq!(state.group.member_count, 150);
        assert_eq!(state.members.len(), 5);
        assert_eq!(state.members[0].role, "Admin");
        assert_eq!(state.members[4].name, "Carol Brown");
    }
}
