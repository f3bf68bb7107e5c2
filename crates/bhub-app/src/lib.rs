//! # BHub App Core
//!
//! Portable, headless application core for the BHub client: the shared
//! business logic a platform shell (Android, iOS, desktop) renders.
//!
//! Screens are plain view-state values, user actions are [`Intent`]s, and
//! [`AppCore::dispatch`] is the only mutation path. Rendering and I/O live
//! in the shells; this crate stays pure so navigation and screen logic are
//! testable without a rendering engine attached.
//!
//! The data layer (`bhub-client`) is intentionally not a dependency: the
//! screens here render their fixed sample content, and shells own the
//! composition of the two crates.

pub mod config;
pub mod core;
pub mod ui;
pub mod views;
pub mod workflows;

pub use config::AppConfig;
pub use self::core::{AppCore, Intent, IntentError, Navigator, Screen};
pub use views::ViewState;
