//! Service-level tests for intake-core with mocked ports.

use mockall::mock;
use mockall::predicate::eq;

use intake_core::{
    application::{BookingService, SubmitOutcome, ports::*},
    domain::{FieldDescriptor, FieldKind, FieldName, Outcome},
    error::IntakeResult,
};

mock! {
    Surface {}
    impl FormSurface for Surface {
        fn descriptors(&self) -> IntakeResult<Vec<FieldDescriptor>>;
        fn descriptor(&self, name: &str) -> IntakeResult<FieldDescriptor>;
        fn set_value(&self, name: &str, value: &str) -> IntakeResult<()>;
        fn reset(&self) -> IntakeResult<()>;
    }
}

mock! {
    Presenter {}
    impl Presentation for Presenter {
        fn mark_error(&self, field: &FieldName, outcome: Outcome) -> IntakeResult<()>;
        fn clear_error(&self, field: &FieldName) -> IntakeResult<()>;
        fn focus(&self, field: &FieldName) -> IntakeResult<()>;
        fn render_confirmation(&self, record: &intake_core::domain::BookingRecord) -> IntakeResult<()>;
    }
}

mock! {
    Sched {}
    impl Scheduler for Sched {
        fn date_window(&self) -> IntakeResult<DateWindow>;
        fn time_slots(&self) -> IntakeResult<Vec<chrono::NaiveTime>>;
        fn is_selectable(&self, date: chrono::NaiveDate) -> IntakeResult<bool>;
    }
}

fn filled_fields() -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor::new("name", FieldKind::Text)
            .required()
            .with_value("Jane Doe"),
        FieldDescriptor::new("email", FieldKind::Email)
            .required()
            .with_value("jane@x.com"),
        FieldDescriptor::new("service", FieldKind::Select).with_value("fitness"),
        FieldDescriptor::new("date", FieldKind::Date)
            .required()
            .with_value("2025-06-01"),
        FieldDescriptor::new("time", FieldKind::Time)
            .required()
            .with_value("10:00"),
    ]
}

#[test]
fn submit_accepts_valid_form_renders_confirmation_and_resets() {
    let mut surface = MockSurface::new();
    surface
        .expect_descriptors()
        .times(1)
        .returning(|| Ok(filled_fields()));
    surface.expect_reset().times(1).returning(|| Ok(()));

    let mut presenter = MockPresenter::new();
    // Every field is valid, so every mark gets cleared.
    presenter
        .expect_clear_error()
        .times(5)
        .returning(|_| Ok(()));
    presenter.expect_mark_error().never();
    presenter.expect_focus().never();
    presenter
        .expect_render_confirmation()
        .times(1)
        .returning(|_| Ok(()));

    let service = BookingService::new(
        Box::new(surface),
        Box::new(presenter),
        Box::new(MockSched::new()),
    );

    match service.submit().unwrap() {
        SubmitOutcome::Accepted(record) => {
            assert_eq!(record.get("name"), Some("Jane Doe"));
            assert_eq!(record.get("email"), Some("jane@x.com"));
            assert_eq!(record.get("date"), Some("2025-06-01"));
            assert_eq!(record.get("time"), Some("10:00"));
            assert_eq!(record.get("service"), Some("fitness"));
        }
        other => panic!("expected acceptance, got {other:?}"),
    }
}

#[test]
fn submit_rejects_invalid_form_marks_fields_and_focuses_first() {
    let mut surface = MockSurface::new();
    surface.expect_descriptors().times(1).returning(|| {
        let mut fields = filled_fields();
        fields[0].clear_value(); // required name left empty
        fields[1].set_value("not-an-email");
        Ok(fields)
    });
    surface.expect_reset().never();

    let mut presenter = MockPresenter::new();
    presenter
        .expect_mark_error()
        .times(2)
        .returning(|_, _| Ok(()));
    presenter
        .expect_clear_error()
        .times(3)
        .returning(|_| Ok(()));
    presenter
        .expect_focus()
        .withf(|field| field.as_str() == "name")
        .times(1)
        .returning(|_| Ok(()));
    presenter.expect_render_confirmation().never();

    let service = BookingService::new(
        Box::new(surface),
        Box::new(presenter),
        Box::new(MockSched::new()),
    );

    match service.submit().unwrap() {
        SubmitOutcome::Rejected(report) => {
            assert_eq!(report.outcome("name"), Some(Outcome::MissingRequired));
            assert_eq!(report.outcome("email"), Some(Outcome::FormatInvalid));
            assert_eq!(report.first_error().unwrap().as_str(), "name");
        }
        other => panic!("expected rejection, got {other:?}"),
    }
}

#[test]
fn revalidate_field_clears_mark_once_corrected() {
    let mut surface = MockSurface::new();
    surface
        .expect_descriptor()
        .with(eq("email"))
        .times(1)
        .returning(|_| {
            Ok(FieldDescriptor::new("email", FieldKind::Email)
                .required()
                .with_value("jane@x.com"))
        });

    let mut presenter = MockPresenter::new();
    presenter
        .expect_clear_error()
        .withf(|field| field.as_str() == "email")
        .times(1)
        .returning(|_| Ok(()));
    presenter.expect_mark_error().never();

    let service = BookingService::new(
        Box::new(surface),
        Box::new(presenter),
        Box::new(MockSched::new()),
    );

    assert_eq!(service.revalidate_field("email").unwrap(), Outcome::Valid);
}

#[test]
fn revalidate_field_marks_a_still_invalid_field() {
    let mut surface = MockSurface::new();
    surface
        .expect_descriptor()
        .with(eq("email"))
        .times(1)
        .returning(|_| {
            Ok(FieldDescriptor::new("email", FieldKind::Email)
                .required()
                .with_value("still-wrong"))
        });

    let mut presenter = MockPresenter::new();
    presenter
        .expect_mark_error()
        .withf(|field, outcome| field.as_str() == "email" && *outcome == Outcome::FormatInvalid)
        .times(1)
        .returning(|_, _| Ok(()));
    presenter.expect_clear_error().never();

    let service = BookingService::new(
        Box::new(surface),
        Box::new(presenter),
        Box::new(MockSched::new()),
    );

    assert_eq!(
        service.revalidate_field("email").unwrap(),
        Outcome::FormatInvalid
    );
}
