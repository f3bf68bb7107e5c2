//! Portable business logic shared by all frontends.

pub mod groups;
