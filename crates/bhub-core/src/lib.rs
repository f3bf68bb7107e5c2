//! # BHub Core
//!
//! Shared foundation for the BHub client crates: the domain records the
//! REST API exchanges and the error categories used to route failures to
//! an appropriate UI treatment.
//!
//! Both the data layer (`bhub-client`) and the presentation core
//! (`bhub-app`) depend on this crate; they do not depend on each other.

pub mod errors;
pub mod models;

pub use errors::ErrorCategory;
pub use models::{Group, JoinedGroup, Member};
