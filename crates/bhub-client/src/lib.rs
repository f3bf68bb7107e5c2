//! # BHub Client
//!
//! Data layer for the BHub app: the REST API surface ([`GroupApi`]), its
//! HTTP and in-memory implementations, and the repository that turns raw
//! response bodies into typed records.
//!
//! Platform shells hold a [`GroupRepository`] built over whichever
//! implementation fits the context; the presentation core (`bhub-app`)
//! never touches this crate.

pub mod api;
pub mod error;
pub mod http;
pub mod memory;
pub mod repository;

pub use api::{ApiResult, GroupApi};
pub use error::ApiError;
pub use http::HttpGroupApi;
pub use memory::{MemoryGroupApi, RecordedCall};
pub use repository::GroupRepository;
