// ============================================================================
// domain/errors.rs - COMPREHENSIVE ERROR DOMAIN
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (for retry logic)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
///
/// Per-field validation outcomes deliberately do NOT live here; an invalid
/// email is a [`crate::domain::Outcome`], not a `DomainError`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Schema Errors (400-level equivalent)
    // ========================================================================
    #[error("Invalid field name '{name}': {reason}")]
    InvalidFieldName { name: String, reason: String },

    #[error("Duplicate field in schema: {name}")]
    DuplicateField { name: String },

    #[error("Form '{form}' declares no fields")]
    EmptySchema { form: String },

    #[error("No field named '{name}' in form '{form}'")]
    UnknownField { form: String, name: String },

    // ========================================================================
    // Catalog Errors (404-level equivalent)
    // ========================================================================
    #[error("No course titled '{title}'")]
    CourseNotFound { title: String },

    #[error("Unknown course category: '{name}'")]
    UnknownCategory { name: String },

    #[error("Duplicate service code in directory: {code}")]
    DuplicateService { code: String },

    // ========================================================================
    // Constraint Violations
    // ========================================================================
    #[error("Schedule window invalid: {reason}")]
    InvalidScheduleWindow { reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidFieldName { name, reason } => vec![
                format!("Field name '{}' is invalid: {}", name, reason),
                "Use lowercase identifiers without whitespace, e.g. 'email'".into(),
            ],
            Self::UnknownField { form, name } => vec![
                format!("Form '{}' has no field called '{}'", form, name),
                "Check the field name against the form schema".into(),
            ],
            Self::CourseNotFound { title } => vec![
                format!("No course is titled '{}'", title),
                "Try: intake courses".into(),
            ],
            Self::UnknownCategory { name } => vec![
                format!("'{}' is not a course category", name),
                "Categories: nutrition, fitness, wellness, mindset (or 'all')".into(),
            ],
            Self::EmptySchema { form } => vec![
                format!("Form '{}' is empty", form),
                "A form schema needs at least one field".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidFieldName { .. }
            | Self::DuplicateField { .. }
            | Self::EmptySchema { .. }
            | Self::DuplicateService { .. }
            | Self::InvalidScheduleWindow { .. } => ErrorCategory::Validation,
            Self::UnknownField { .. } | Self::CourseNotFound { .. } | Self::UnknownCategory { .. } => {
                ErrorCategory::NotFound
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
