//! Booking Service - main application orchestrator.
//!
//! This service coordinates the booking workflow:
//! 1. Read field descriptors from the form surface
//! 2. Validate (single field or the whole form)
//! 3. Drive the presentation layer (error marks, focus, confirmation)
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).

use tracing::{info, instrument, warn};

use crate::{
    application::ports::{DateWindow, FormSurface, Presentation, Scheduler},
    domain::{BookingRecord, FormValidator, Outcome, ValidationReport},
    error::IntakeResult,
};

/// Result of a submission attempt.
///
/// A rejection is a normal, fully recoverable result: the user corrects
/// the marked fields and submits again. It is deliberately not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Every field validated; the record was handed to presentation and
    /// the surface was reset.
    Accepted(BookingRecord),
    /// At least one field failed; every field's mark was refreshed and the
    /// first invalid field was focused.
    Rejected(ValidationReport),
}

/// Main booking service.
///
/// Orchestrates validation, presentation marking, and submission.
pub struct BookingService {
    surface: Box<dyn FormSurface>,
    presentation: Box<dyn Presentation>,
    scheduler: Box<dyn Scheduler>,
}

impl BookingService {
    /// Create a new booking service with the given adapters.
    pub fn new(
        surface: Box<dyn FormSurface>,
        presentation: Box<dyn Presentation>,
        scheduler: Box<dyn Scheduler>,
    ) -> Self {
        Self {
            surface,
            presentation,
            scheduler,
        }
    }

    /// Overwrite one field's value on the surface.
    pub fn set_field(&self, name: &str, value: &str) -> IntakeResult<()> {
        self.surface.set_value(name, value)
    }

    /// Re-validate a single edited field and refresh its error mark.
    ///
    /// Identical logic to the full pass, applied incrementally. This is
    /// what runs when the user edits a field that previously errored.
    #[instrument(skip(self))]
    pub fn revalidate_field(&self, name: &str) -> IntakeResult<Outcome> {
        let descriptor = self.surface.descriptor(name)?;
        let outcome = FormValidator::validate_field(&descriptor);

        if outcome.is_valid() {
            self.presentation.clear_error(descriptor.name())?;
        } else {
            self.presentation.mark_error(descriptor.name(), outcome)?;
        }

        Ok(outcome)
    }

    /// Validate the whole form and refresh every field's mark.
    ///
    /// Never short-circuits: every field is checked so all invalid fields
    /// get marked in one pass, and the first one is focused.
    #[instrument(skip_all)]
    pub fn validate(&self) -> IntakeResult<ValidationReport> {
        let fields = self.surface.descriptors()?;
        let report = FormValidator::validate_form(&fields);
        self.refresh_marks(&report)?;

        if let Some(first) = report.first_error() {
            self.presentation.focus(first)?;
        }

        Ok(report)
    }

    /// Attempt a submission: one synchronous validation pass, no retries.
    ///
    /// All-valid → construct the [`BookingRecord`], render the confirmation
    /// view, and reset the surface. Otherwise → refresh marks, focus the
    /// first invalid field, and return the report for the caller to render.
    #[instrument(skip_all)]
    pub fn submit(&self) -> IntakeResult<SubmitOutcome> {
        let fields = self.surface.descriptors()?;
        let report = FormValidator::validate_form(&fields);
        self.refresh_marks(&report)?;

        if !report.is_valid() {
            if let Some(first) = report.first_error() {
                self.presentation.focus(first)?;
            }
            warn!(errors = report.error_count(), "Booking rejected");
            return Ok(SubmitOutcome::Rejected(report));
        }

        let record = BookingRecord::from_fields(&fields);
        self.presentation.render_confirmation(&record)?;
        self.surface.reset()?;

        info!(reference = %record.reference(), "Booking accepted");
        Ok(SubmitOutcome::Accepted(record))
    }

    // -------------------------------------------------------------------------
    // Schedule passthroughs (for display; the validator never uses these)
    // -------------------------------------------------------------------------

    /// The selectable date range.
    pub fn date_window(&self) -> IntakeResult<DateWindow> {
        self.scheduler.date_window()
    }

    /// The selectable times of day.
    pub fn time_slots(&self) -> IntakeResult<Vec<chrono::NaiveTime>> {
        self.scheduler.time_slots()
    }

    /// Whether a date is inside the selectable window.
    pub fn is_selectable(&self, date: chrono::NaiveDate) -> IntakeResult<bool> {
        self.scheduler.is_selectable(date)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Mark every invalid field, clear every valid one.
    fn refresh_marks(&self, report: &ValidationReport) -> IntakeResult<()> {
        for (name, outcome) in report.iter() {
            if outcome.is_valid() {
                self.presentation.clear_error(name)?;
            } else {
                self.presentation.mark_error(name, outcome)?;
            }
        }
        Ok(())
    }
}
