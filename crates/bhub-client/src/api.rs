//! REST API surface for the BHub service.

use async_trait::async_trait;

use crate::error::ApiError;

/// Result alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// The four BHub REST operations.
///
/// Implementations return the raw textual response body; decoding into
/// typed records is the repository's concern. The trait is object-safe so
/// the repository can hold an `Arc<dyn GroupApi>` and tests can substitute
/// the in-memory implementation for the HTTP one.
#[async_trait]
pub trait GroupApi: Send + Sync {
    /// Fetch the full group list (`GET /bhubs`).
    async fn list_groups(&self) -> ApiResult<String>;

    /// Fetch a single group by id (`GET /bhubs/{id}`).
    ///
    /// The id is passed through unvalidated; the server owns 404 semantics.
    async fn get_group(&self, id: &str) -> ApiResult<String>;

    /// Create a group (`POST /bhubs` with a `{name, description}` body).
    async fn create_group(&self, name: &str, description: &str) -> ApiResult<String>;

    /// Join a group (`POST /bhubs/{group_id}/members` with a `{userId}` body).
    async fn join_group(&self, group_id: &str, user_id: &str) -> ApiResult<String>;
}
