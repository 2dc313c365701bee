//! Field descriptor: one form input's declared constraints and current value.

use serde::{Deserialize, Serialize};

use crate::domain::entities::common::FieldName;
use crate::domain::value_objects::FieldKind;

/// One named input on the form surface.
///
/// The descriptor is owned by the surface; the validator only ever reads it.
/// `required` and `kind` come from the surface's declared attributes,
/// `raw_value` is whatever string the user (or the picker widget) left in
/// the input; the domain never interprets it beyond the kind's pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    name: FieldName,
    kind: FieldKind,
    required: bool,
    raw_value: String,
}

impl FieldDescriptor {
    /// Create an optional field with an empty value.
    pub fn new(name: impl Into<FieldName>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            required: false,
            raw_value: String::new(),
        }
    }

    /// Mark the field as required (chainable).
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Pre-populate the value (chainable, mostly for tests and fixtures).
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.raw_value = value.into();
        self
    }

    pub fn name(&self) -> &FieldName {
        &self.name
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn raw_value(&self) -> &str {
        &self.raw_value
    }

    /// Overwrite the current value. Surface-side mutation only.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.raw_value = value.into();
    }

    /// Clear the current value (form reset).
    pub fn clear_value(&mut self) {
        self.raw_value.clear();
    }
}
