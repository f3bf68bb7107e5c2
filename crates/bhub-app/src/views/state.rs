//! Aggregate view state.

use serde::{Deserialize, Serialize};

use super::{
    create_group::CreateGroupState, group_details::GroupDetailsState, group_list::GroupListState,
    payment::PaymentState, profile::ProfileState,
};

/// Every screen's state in one container.
///
/// Defaults to the fixed sample content the original client ships with.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct ViewState {
    /// Group list screen
    pub group_list: GroupListState,
    /// Group creation form
    pub create_group: CreateGroupState,
    /// Group details screen
    pub group_details: GroupDetailsState,
    /// Payment flow
    pub payment: PaymentState,
    /// User profile screen
    pub profile: ProfileState,
}
