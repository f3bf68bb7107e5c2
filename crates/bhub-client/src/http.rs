//! HTTP implementation of the BHub REST API.

use async_trait::async_trait;
use serde_json::json;

use crate::{
    api::{ApiResult, GroupApi},
    error::ApiError,
};

/// Base URL of a locally running BHub API.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

/// REST client for the BHub service.
///
/// Thin wrapper over [`reqwest::Client`]: each operation issues one request
/// against the configured base URL and returns the raw response body. There
/// is no retry and no bespoke timeout policy; transport failures and
/// non-success statuses surface as [`ApiError`]s.
pub struct HttpGroupApi {
    base_url: String,
    client: reqwest::Client,
}

impl HttpGroupApi {
    /// Create a client against the given base URL (e.g. `http://host/api`).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    async fn get(&self, url: String) -> ApiResult<String> {
        tracing::debug!(%url, "GET");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                url: url.clone(),
                source,
            })?;
        Self::read_body(url, response).await
    }

    async fn post(&self, url: String, body: serde_json::Value) -> ApiResult<String> {
        tracing::debug!(%url, "POST");
        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                url: url.clone(),
                source,
            })?;
        Self::read_body(url, response).await
    }

    async fn read_body(url: String, response: reqwest::Response) -> ApiResult<String> {
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                url,
                status: status.as_u16(),
            });
        }
        response
            .text()
            .await
            .map_err(|source| ApiError::Transport { url, source })
    }
}

impl Default for HttpGroupApi {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait]
impl GroupApi for HttpGroupApi {
    async fn list_groups(&self) -> ApiResult<String> {
        self.get(format!("{}/bhubs", self.base_url)).await
    }

    async fn get_group(&self, id: &str) -> ApiResult<String> {
        self.get(format!("{}/bhubs/{id}", self.base_url)).await
    }

    async fn create_group(&self, name: &str, description: &str) -> ApiResult<String> {
        self.post(
            format!("{}/bhubs", self.base_url),
            json!({ "name": name, "description": description }),
        )
        .await
    }

    async fn join_group(&self, group_id: &str, user_id: &str) -> ApiResult<String> {
        self.post(
            format!("{}/bhubs/{group_id}/members", self.base_url),
            json!({ "userId": user_id }),
        )
        .await
    }
}
