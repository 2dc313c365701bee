// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Intake.
//!
//! This module contains pure business logic with ZERO external dependencies.
//! All I/O, rendering, and scheduling concerns are handled via ports (traits)
//! defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or terminal calls
//! - **Immutable-by-default entities**: All domain objects are Clone + PartialEq
//! - **Pure validator**: Same descriptor in, same outcome out, every time
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod value_objects;

// The validator is public: it is the domain's main operation.
pub mod validation;

// Re-exports for convenience
pub use entities::{
    booking::{BookingRecord, ValidationReport},
    common::FieldName,
    course::{Course, CourseCatalog},
    field::FieldDescriptor,
    form::{FormSchema, FormSchemaBuilder},
    service::ServiceDirectory,
};

pub use error::{DomainError, ErrorCategory};

pub use validation::FormValidator;

pub use value_objects::{CategoryFilter, CourseCategory, FieldKind, Outcome};
