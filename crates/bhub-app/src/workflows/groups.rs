//! Group form validation.
//!
//! Canonical validation for the creation form. Frontends use this instead
//! of re-implementing their own gating.

/// True when the string has no non-whitespace content.
#[must_use]
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Whether a (name, description) pair is submittable.
#[must_use]
pub fn can_submit_group_form(name: &str, description: &str) -> bool {
    !is_blank(name) && !is_blank(description)
}
