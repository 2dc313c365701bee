//! Application layer for Intake.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (BookingService, CatalogService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All validation rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    BookingService,
    CatalogService,
    CourseInfo, // DTO for course metadata
    SubmitOutcome,
};

// Re-export port traits (for adapter implementation)
pub use ports::{DateWindow, FormSurface, Presentation, Scheduler};

pub use error::ApplicationError;
