//! Intake Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Intake
//! booking toolkit, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           intake-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │   (BookingService, CatalogService)      │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)           │
//! │ (Driven: Surface, Presentation, Sched)  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     intake-adapters (Infrastructure)      │
//! │ (MemoryFormSurface, ConsolePresenter..) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)         │
//! │  (FormSchema, FormValidator, Booking)    │
//! │         No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use intake_core::{
//!     application::BookingService,
//!     domain::{FieldDescriptor, FieldKind, FormSchema},
//! };
//!
//! // 1. Describe the form
//! let schema = FormSchema::builder("booking")
//!     .field(FieldDescriptor::new("name", FieldKind::Text).required())
//!     .field(FieldDescriptor::new("email", FieldKind::Email).required())
//!     .build()
//!     .unwrap();
//!
//! // 2. Use the application service (with injected adapters)
//! let service = BookingService::new(surface, presentation, scheduler);
//! let outcome = service.submit().unwrap();
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        BookingService, CatalogService, SubmitOutcome,
        ports::{DateWindow, FormSurface, Presentation, Scheduler},
    };
    pub use crate::domain::{
        BookingRecord, CategoryFilter, Course, CourseCatalog, CourseCategory, FieldDescriptor,
        FieldKind, FieldName, FormSchema, FormSchemaBuilder, FormValidator, Outcome,
        ServiceDirectory, ValidationReport,
    };
    pub use crate::error::{IntakeError, IntakeResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
