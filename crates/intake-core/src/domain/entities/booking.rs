//! Validation reports and the successful-submission payload.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::common::FieldName;
use crate::domain::entities::field::FieldDescriptor;
use crate::domain::value_objects::Outcome;

/// The full result of one validation pass.
///
/// Exactly one outcome per declared field, in declaration order. A pass
/// recomputes every field it covers, so outcomes are never partially stale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    outcomes: Vec<(FieldName, Outcome)>,
}

impl ValidationReport {
    pub(crate) fn new(outcomes: Vec<(FieldName, Outcome)>) -> Self {
        Self { outcomes }
    }

    /// The outcome recorded for a field, if it was part of the pass.
    pub fn outcome(&self, name: &str) -> Option<Outcome> {
        self.outcomes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, o)| *o)
    }

    /// `true` when every field validated.
    pub fn is_valid(&self) -> bool {
        self.outcomes.iter().all(|(_, o)| o.is_valid())
    }

    /// First non-valid field in declaration order (focus/scroll target).
    pub fn first_error(&self) -> Option<&FieldName> {
        self.outcomes
            .iter()
            .find(|(_, o)| !o.is_valid())
            .map(|(n, _)| n)
    }

    /// Non-valid entries in declaration order.
    pub fn errors(&self) -> impl Iterator<Item = (&FieldName, Outcome)> {
        self.outcomes
            .iter()
            .filter(|(_, o)| !o.is_valid())
            .map(|(n, o)| (n, *o))
    }

    pub fn error_count(&self) -> usize {
        self.outcomes.iter().filter(|(_, o)| !o.is_valid()).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FieldName, Outcome)> {
        self.outcomes.iter().map(|(n, o)| (n, *o))
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}

/// The normalized payload of an accepted submission.
///
/// A flat field-name → raw-value mapping in declaration order. Coded values
/// (e.g. the service select) pass through unresolved; resolving them to
/// display labels is the presentation layer's job. The record exists only
/// between acceptance and confirmation rendering; nothing persists it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRecord {
    reference: Uuid,
    fields: Vec<(FieldName, String)>,
}

impl BookingRecord {
    /// Capture the raw values of an all-valid field set.
    ///
    /// Callers are expected to have validated first; this constructor does
    /// not re-check (the service enforces the iff-valid invariant).
    pub fn from_fields(fields: &[FieldDescriptor]) -> Self {
        Self {
            reference: Uuid::new_v4(),
            fields: fields
                .iter()
                .map(|f| (f.name().clone(), f.raw_value().to_string()))
                .collect(),
        }
    }

    /// Booking reference shown on the confirmation view.
    pub fn reference(&self) -> Uuid {
        self.reference
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FieldName, &str)> {
        self.fields.iter().map(|(n, v)| (n, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
