//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `intake-adapters` crate provides implementations.

use chrono::{NaiveDate, NaiveTime};

use crate::domain::{BookingRecord, FieldDescriptor, FieldName, Outcome};
use crate::error::IntakeResult;

/// Port for the form surface.
///
/// Implemented by:
/// - `intake_adapters::form_surface::MemoryFormSurface` (production + testing)
///
/// ## Design Notes
///
/// - The surface owns the descriptors; the application only reads snapshots
/// - Descriptor order is declaration order (first-error semantics rely on it)
/// - `reset` clears values but keeps the declared schema
pub trait FormSurface: Send + Sync {
    /// Snapshot of every descriptor, in declaration order.
    fn descriptors(&self) -> IntakeResult<Vec<FieldDescriptor>>;

    /// Snapshot of one descriptor by name.
    fn descriptor(&self, name: &str) -> IntakeResult<FieldDescriptor>;

    /// Overwrite one field's raw value.
    fn set_value(&self, name: &str, value: &str) -> IntakeResult<()>;

    /// Clear every field's value (post-submission reset).
    fn reset(&self) -> IntakeResult<()>;
}

/// Port for the presentation layer.
///
/// Implemented by:
/// - `intake_adapters::presentation::ConsolePresenter` (production)
/// - `intake_adapters::presentation::RecordingPresenter` (testing)
///
/// The application tells the presentation WHAT happened (field errored,
/// field recovered, focus here, booking accepted); HOW that is shown is
/// entirely the adapter's business.
pub trait Presentation: Send + Sync {
    /// Mark a field's enclosing group as errored.
    fn mark_error(&self, field: &FieldName, outcome: Outcome) -> IntakeResult<()>;

    /// Clear a field's error mark.
    fn clear_error(&self, field: &FieldName) -> IntakeResult<()>;

    /// Bring a field into view (first-error focus after a failed submit).
    fn focus(&self, field: &FieldName) -> IntakeResult<()>;

    /// Render the confirmation view for an accepted booking.
    fn render_confirmation(&self, record: &BookingRecord) -> IntakeResult<()>;
}

/// Port for the date/time constraint provider (the picker's data source).
///
/// Implemented by:
/// - `intake_adapters::schedule::RollingWindowScheduler` (production)
///
/// The validator never re-checks these constraints; picker output reaches
/// it as plain strings. This port exists so the UI can display what is
/// selectable in the first place.
pub trait Scheduler: Send + Sync {
    /// The selectable date range.
    fn date_window(&self) -> IntakeResult<DateWindow>;

    /// The selectable times of day, in order.
    fn time_slots(&self) -> IntakeResult<Vec<NaiveTime>>;

    /// Whether a specific date falls inside the window.
    fn is_selectable(&self, date: NaiveDate) -> IntakeResult<bool>;
}

/// Inclusive date range offered by the scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub opens: NaiveDate,
    pub closes: NaiveDate,
}

impl DateWindow {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.opens <= date && date <= self.closes
    }
}
