use std::sync::LazyLock;

use regex::Regex;

use crate::domain::{
    entities::{FieldDescriptor, ValidationReport},
    value_objects::{FieldKind, Outcome},
};

// The permissive patterns are kept deliberately: `user@host.tld`-shaped
// emails, and phone values of digits/whitespace/`-+()` at any length.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

static TEL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\d\s\-\+\(\)]+$").expect("tel pattern is valid"));

/// Centralized form validation.
///
/// All per-field rules live here, not scattered across entities. Pure:
/// given the same descriptor this always returns the same outcome; no
/// state, no I/O. Error marking/clearing on the surface is the
/// application layer's job.
pub struct FormValidator;

impl FormValidator {
    /// Validate a single field. Rules in order, first match wins:
    ///
    /// 1. required and trimmed value empty → `MissingRequired`
    /// 2. email kind and value not `x@y.z`-shaped → `FormatInvalid`
    ///    (applies to empty optional emails too)
    /// 3. tel kind, value non-empty, and any character outside
    ///    digits/whitespace/`-+()` → `FormatInvalid`
    /// 4. otherwise → `Valid`
    pub fn validate_field(field: &FieldDescriptor) -> Outcome {
        if field.is_required() && field.raw_value().trim().is_empty() {
            return Outcome::MissingRequired;
        }

        match field.kind() {
            FieldKind::Email => {
                if !EMAIL_PATTERN.is_match(field.raw_value()) {
                    return Outcome::FormatInvalid;
                }
            }
            FieldKind::Tel => {
                if !field.raw_value().is_empty() && !TEL_PATTERN.is_match(field.raw_value()) {
                    return Outcome::FormatInvalid;
                }
            }
            _ => {}
        }

        Outcome::Valid
    }

    /// Validate every field, never short-circuiting.
    ///
    /// All fields are checked even after the first failure so the caller
    /// can mark every invalid field while focusing the first one.
    pub fn validate_form(fields: &[FieldDescriptor]) -> ValidationReport {
        ValidationReport::new(
            fields
                .iter()
                .map(|f| (f.name().clone(), Self::validate_field(f)))
                .collect(),
        )
    }
}
