//! Console presentation: error indicators and the confirmation view.

use chrono::NaiveDate;
use tracing::instrument;

use intake_core::{
    application::ports::Presentation,
    domain::{BookingRecord, FieldName, Outcome, ServiceDirectory},
    error::IntakeResult,
};

/// Renders presentation events as plain console lines.
///
/// A terminal is append-only, so `clear_error` emits nothing. Error marks
/// go to stderr and the confirmation view goes to stdout, keeping
/// diagnostics separate from results.
pub struct ConsolePresenter {
    directory: ServiceDirectory,
}

impl ConsolePresenter {
    /// Create a presenter with the given service directory.
    pub fn new(directory: ServiceDirectory) -> Self {
        Self { directory }
    }
}

impl Presentation for ConsolePresenter {
    fn mark_error(&self, field: &FieldName, outcome: Outcome) -> IntakeResult<()> {
        eprintln!("  \u{2717} {field}: {}", outcome.message());
        Ok(())
    }

    fn clear_error(&self, _field: &FieldName) -> IntakeResult<()> {
        Ok(())
    }

    fn focus(&self, field: &FieldName) -> IntakeResult<()> {
        eprintln!("  \u{2192} start with '{field}'");
        Ok(())
    }

    #[instrument(skip_all)]
    fn render_confirmation(&self, record: &BookingRecord) -> IntakeResult<()> {
        println!("{}", confirmation_text(record, &self.directory));
        Ok(())
    }
}

/// Build the confirmation view by substituting record values into the
/// fixed template slots.
pub fn confirmation_text(record: &BookingRecord, directory: &ServiceDirectory) -> String {
    let name = record.get("name").unwrap_or("there");
    let email = record.get("email").unwrap_or("-");
    let service = record.get("service").unwrap_or("-");
    let date = record.get("date").unwrap_or("-");
    let time = record.get("time").unwrap_or("-");

    format!(
        "\u{2713} Booking Confirmed!\n\
         Thank you, {name}! Your consultation has been scheduled.\n\
         \n\
         \x20 Service: {service_label}\n\
         \x20 Date:    {long_date}\n\
         \x20 Time:    {time}\n\
         \x20 Email:   {email}\n\
         \n\
         Reference: {reference}\n\
         We've sent a confirmation email to {email}. Our team will contact\n\
         you within 24 hours to confirm your appointment.",
        service_label = directory.label_for(service),
        long_date = long_date(date),
        reference = record.reference(),
    )
}

/// Render an ISO date as e.g. "Sunday, June 1, 2025".
///
/// Unparseable input is shown as-is. The validator treats picker output
/// as plain strings, so the presenter must tolerate anything.
fn long_date(raw: &str) -> String {
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => date.format("%A, %B %-d, %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use intake_core::domain::{FieldDescriptor, FieldKind};

    fn record() -> BookingRecord {
        let fields = vec![
            FieldDescriptor::new("name", FieldKind::Text).with_value("Jane Doe"),
            FieldDescriptor::new("email", FieldKind::Email).with_value("jane@x.com"),
            FieldDescriptor::new("service", FieldKind::Select).with_value("fitness"),
            FieldDescriptor::new("date", FieldKind::Date).with_value("2025-06-01"),
            FieldDescriptor::new("time", FieldKind::Time).with_value("10:00"),
        ];
        BookingRecord::from_fields(&fields)
    }

    fn directory() -> ServiceDirectory {
        ServiceDirectory::new().with_service("fitness", "Fitness Consultation")
    }

    #[test]
    fn confirmation_substitutes_record_values() {
        let text = confirmation_text(&record(), &directory());
        assert!(text.contains("Thank you, Jane Doe!"));
        assert!(text.contains("Service: Fitness Consultation"));
        assert!(text.contains("Time:    10:00"));
        assert!(text.contains("jane@x.com"));
    }

    #[test]
    fn confirmation_renders_long_form_date() {
        let text = confirmation_text(&record(), &directory());
        assert!(text.contains("Sunday, June 1, 2025"));
    }

    #[test]
    fn unknown_service_code_falls_back_to_raw() {
        let text = confirmation_text(&record(), &ServiceDirectory::new());
        assert!(text.contains("Service: fitness"));
    }

    #[test]
    fn unparseable_date_is_shown_verbatim() {
        assert_eq!(long_date("next tuesday"), "next tuesday");
        assert_eq!(long_date("2025-12-25"), "Thursday, December 25, 2025");
    }
}
