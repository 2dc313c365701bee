//! # Intake Adapters
//!
//! Infrastructure implementations of the intake-core ports:
//!
//! - [`MemoryFormSurface`]: thread-safe in-memory form state
//! - [`ConsolePresenter`] / [`RecordingPresenter`]: presentation adapters
//! - [`RollingWindowScheduler`]: booking window and time slots
//! - [`builtin_forms`]: the studio's published schema, services, and courses
//!
//! Adapters depend on intake-core, never the other way around.

pub mod builtin_forms;
pub mod form_surface;
pub mod presentation;
pub mod schedule;

pub use builtin_forms::{booking_form, course_catalog, service_directory};
pub use form_surface::MemoryFormSurface;
pub use presentation::{ConsolePresenter, RecordingPresenter, confirmation_text};
pub use schedule::RollingWindowScheduler;
