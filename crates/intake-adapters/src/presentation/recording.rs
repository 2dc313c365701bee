//! Recording presentation adapter for tests and dry runs.

use std::sync::{Arc, RwLock};

use intake_core::{
    application::{ApplicationError, ports::Presentation},
    domain::{BookingRecord, FieldName, Outcome},
    error::IntakeResult,
};

#[derive(Default)]
struct Log {
    marks: Vec<(FieldName, Outcome)>,
    clears: Vec<FieldName>,
    focused: Vec<FieldName>,
    confirmations: Vec<BookingRecord>,
}

/// Presentation adapter that records every event instead of rendering it.
///
/// Useful for asserting on presentation behaviour without capturing
/// process output.
#[derive(Clone, Default)]
pub struct RecordingPresenter {
    log: Arc<RwLock<Log>>,
}

impl RecordingPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fields currently marked as erroneous, in mark order.
    pub fn marked(&self) -> Vec<(FieldName, Outcome)> {
        self.log.read().map(|l| l.marks.clone()).unwrap_or_default()
    }

    /// Fields whose marks were cleared, in clear order.
    pub fn cleared(&self) -> Vec<FieldName> {
        self.log
            .read()
            .map(|l| l.clears.clone())
            .unwrap_or_default()
    }

    /// The last field that received focus, if any.
    pub fn last_focused(&self) -> Option<FieldName> {
        self.log
            .read()
            .ok()
            .and_then(|l| l.focused.last().cloned())
    }

    /// All confirmations rendered so far.
    pub fn confirmations(&self) -> Vec<BookingRecord> {
        self.log
            .read()
            .map(|l| l.confirmations.clone())
            .unwrap_or_default()
    }

    fn with_log<T>(&self, f: impl FnOnce(&mut Log) -> T) -> IntakeResult<T> {
        let mut log = self.log.write().map_err(|_| {
            ApplicationError::PresentationFailed {
                reason: "event log lock poisoned".to_string(),
            }
        })?;
        Ok(f(&mut log))
    }
}

impl Presentation for RecordingPresenter {
    fn mark_error(&self, field: &FieldName, outcome: Outcome) -> IntakeResult<()> {
        self.with_log(|log| log.marks.push((field.clone(), outcome)))
    }

    fn clear_error(&self, field: &FieldName) -> IntakeResult<()> {
        self.with_log(|log| log.clears.push(field.clone()))
    }

    fn focus(&self, field: &FieldName) -> IntakeResult<()> {
        self.with_log(|log| log.focused.push(field.clone()))
    }

    fn render_confirmation(&self, record: &BookingRecord) -> IntakeResult<()> {
        self.with_log(|log| log.confirmations.push(record.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_marks_clears_and_focus_in_order() {
        let presenter = RecordingPresenter::new();
        let name = FieldName::from("name");
        let email = FieldName::from("email");

        presenter
            .mark_error(&name, Outcome::MissingRequired)
            .unwrap();
        presenter.mark_error(&email, Outcome::FormatInvalid).unwrap();
        presenter.clear_error(&name).unwrap();
        presenter.focus(&email).unwrap();

        assert_eq!(
            presenter.marked(),
            vec![
                (name.clone(), Outcome::MissingRequired),
                (email.clone(), Outcome::FormatInvalid),
            ]
        );
        assert_eq!(presenter.cleared(), vec![name]);
        assert_eq!(presenter.last_focused(), Some(email));
        assert!(presenter.confirmations().is_empty());
    }
}
