//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `intake-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `FormSurface`: Field descriptors and their live values
//!   - `Presentation`: Error indicators, focus, confirmation rendering
//!   - `Scheduler`: Selectable date range and time-of-day slots
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{DateWindow, FormSurface, Presentation, Scheduler};
