//! Domain records exchanged with the BHub REST API.
//!
//! The wire format is camelCase JSON. Records are immutable values: they
//! are built by a decode (or a sample-data constructor) and replaced, never
//! mutated in place. Unknown fields are ignored on decode, so server-side
//! schema additions do not break older clients.

use serde::{Deserialize, Serialize};

/// A community group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct Group {
    /// Server-assigned identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Short description shown on list cards
    pub description: String,
    /// Number of members, as reported by the server
    pub member_count: u32,
}

/// A member of a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct Member {
    /// Server-assigned identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Role label ("Admin", "Moderator", "Member")
    pub role: String,
}

/// A group the current user belongs to, as shown on the profile screen.
///
/// Deliberately a separate type from [`Group`]: the two share no identity
/// and the profile view carries the user's role instead of a member count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct JoinedGroup {
    /// Server-assigned identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// The user's role in this group
    pub role: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_uses_camel_case_on_the_wire() {
        let group: Group = serde_json::from_str(
            r#"{"id":"7","name":"Chess Club","description":"Openings and endgames","memberCount":12}"#,
        )
        .unwrap();
        assert_eq!(group.member_count, 12);

        let encoded = serde_json::to_string(&group).unwrap();
        assert!(encoded.contains("\"memberCount\":12"));
    }

    #[test]
    fn group_decode_ignores_unknown_fields() {
        let group: Group = serde_json::from_str(
            r#"{"id":"7","name":"Chess Club","description":"d","memberCount":12,"visibility":"public"}"#,
        )
        .unwrap();
        assert_eq!(group.name, "Chess Club");
    }
}
