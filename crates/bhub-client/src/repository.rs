//! Typed repository over the raw API surface.

use std::sync::Arc;

use bhub_core::Group;
use serde::de::DeserializeOwned;

use crate::{api::GroupApi, error::ApiError};

/// Decodes API responses into domain records.
///
/// The underlying [`GroupApi`] returns raw bodies; this layer owns the
/// decode step. Unknown JSON fields are ignored, so server-side schema
/// additions do not break older clients. Decode failures propagate as
/// [`ApiError::Decode`] on every operation except [`join_group`], which
/// keeps the original client's collapsed boolean contract.
///
/// [`join_group`]: GroupRepository::join_group
#[derive(Clone)]
pub struct GroupRepository {
    api: Arc<dyn GroupApi>,
}

impl GroupRepository {
    /// Build a repository over any API implementation.
    pub fn new(api: Arc<dyn GroupApi>) -> Self {
        Self { api }
    }

    /// Fetch all groups, preserving server order.
    pub async fn list_groups(&self) -> Result<Vec<Group>, ApiError> {
        let body = self.api.list_groups().await?;
        decode("list_groups", &body)
    }

    /// Fetch a single group by id.
    pub async fn get_group(&self, id: &str) -> Result<Group, ApiError> {
        let body = self.api.get_group(id).await?;
        decode("get_group", &body)
    }

    /// Create a group and decode the server's created-group response.
    pub async fn create_group(&self, name: &str, description: &str) -> Result<Group, ApiError> {
        let body = self.api.create_group(name, description).await?;
        decode("create_group", &body)
    }

    /// Join a group on behalf of a user.
    ///
    /// Collapses every failure to `false`: callers learn whether the join
    /// went through, not why it failed — "already a member" and "network
    /// down" are indistinguishable here. The discarded error is logged at
    /// warn level. Any non-faulting reply counts as success regardless of
    /// its payload.
    pub async fn join_group(&self, group_id: &str, user_id: &str) -> bool {
        match self.api.join_group(group_id, user_id).await {
            Ok(_) => true,
            Err(error) => {
                tracing::warn!(group_id, user_id, %error, "join request failed");
                false
            }
        }
    }
}

fn decode<T: DeserializeOwned>(endpoint: &'static str, body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|source| ApiError::Decode { endpoint, source })
}
