//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Surface access failed (lock poisoned, etc.).
    #[error("Form surface error")]
    SurfaceLockError,

    /// The presentation layer failed to render.
    #[error("Presentation failed: {reason}")]
    PresentationFailed { reason: String },

    /// The schedule provider could not answer.
    #[error("Schedule unavailable: {reason}")]
    ScheduleUnavailable { reason: String },

    /// Port/Adapter not configured.
    #[error("Required adapter not configured: {name}")]
    AdapterNotConfigured { name: &'static str },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::SurfaceLockError => vec![
                "The form surface is locked".into(),
                "Try again in a moment".into(),
            ],
            Self::PresentationFailed { reason } => vec![
                format!("Rendering failed: {}", reason),
                "Check that the output destination is writable".into(),
            ],
            Self::ScheduleUnavailable { reason } => vec![
                format!("Schedule lookup failed: {}", reason),
                "Check the schedule configuration".into(),
            ],
            Self::AdapterNotConfigured { name } => vec![
                format!("Required component not configured: {}", name),
                "This is likely a configuration error".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::SurfaceLockError | Self::PresentationFailed { .. } => ErrorCategory::Internal,
            Self::ScheduleUnavailable { .. } => ErrorCategory::Internal,
            Self::AdapterNotConfigured { .. } => ErrorCategory::Configuration,
        }
    }
}
