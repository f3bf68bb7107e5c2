//! # Core Application Module
//!
//! - [`AppCore`]: the state container and its dispatch loop
//! - [`Intent`]: user actions as data
//! - [`Screen`] / [`Navigator`]: current-screen identity and back rules
//! - [`IntentError`]: why a dispatch was rejected

mod app;
mod error;
mod intent;
mod navigator;

pub use app::AppCore;
pub use error::IntentError;
pub use intent::{Intent, Screen};
pub use navigator::Navigator;
