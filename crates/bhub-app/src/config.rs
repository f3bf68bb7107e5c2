//! Application configuration.

use serde::{Deserialize, Serialize};

/// Minimal configuration a shell needs to stand up the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL of the BHub REST API
    pub api_base_url: String,
    /// Local user identity, sent with join requests
    pub user_id: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8080/api".to_string(),
            user_id: uuid::Uuid::new_v4().to_string(),
        }
    }
}

impl AppConfig {
    /// Fixed config for tests.
    #[must_use]
    pub fn test() -> Self {
        Self {
            api_base_url: "http://localhost:8080/api".to_string(),
            user_id: "test-user".to_string(),
        }
    }
}
