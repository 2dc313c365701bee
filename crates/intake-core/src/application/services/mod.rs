//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "submit a booking" or "browse the catalog".

pub mod booking_service;
pub mod catalog_service;

pub use booking_service::{BookingService, SubmitOutcome};
pub use catalog_service::{CatalogService, CourseInfo};
