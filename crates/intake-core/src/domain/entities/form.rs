//! Form schema: the named, ordered collection of field descriptors.

use serde::{Deserialize, Serialize};

use crate::domain::entities::common::FieldName;
use crate::domain::entities::field::FieldDescriptor;
use crate::domain::error::DomainError;

/// A complete form definition plus its current values.
///
/// Field order is declaration order and is significant: the first-error
/// pointer after a failed submission refers to the earliest declared field
/// with a non-valid outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSchema {
    name: String,
    fields: Vec<FieldDescriptor>,
}

impl FormSchema {
    /// Start building a schema.
    pub fn builder(name: impl Into<String>) -> FormSchemaBuilder {
        FormSchemaBuilder {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// All descriptors in declaration order.
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name() == name)
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut FieldDescriptor> {
        self.fields.iter_mut().find(|f| f.name() == name)
    }

    /// Set one field's raw value.
    pub fn set_value(&mut self, name: &str, value: impl Into<String>) -> Result<(), DomainError> {
        let form = self.name.clone();
        match self.field_mut(name) {
            Some(field) => {
                field.set_value(value);
                Ok(())
            }
            None => Err(DomainError::UnknownField {
                form,
                name: name.into(),
            }),
        }
    }

    /// Clear every field's value (post-submission reset).
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.clear_value();
        }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Check structural invariants: at least one field, unique names.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.fields.is_empty() {
            return Err(DomainError::EmptySchema {
                form: self.name.clone(),
            });
        }

        let mut seen: Vec<&FieldName> = Vec::with_capacity(self.fields.len());
        for field in &self.fields {
            if seen.contains(&field.name()) {
                return Err(DomainError::DuplicateField {
                    name: field.name().to_string(),
                });
            }
            seen.push(field.name());
        }

        Ok(())
    }
}

/// Builder for [`FormSchema`]. `build` enforces the structural invariants.
#[derive(Debug)]
pub struct FormSchemaBuilder {
    name: String,
    fields: Vec<FieldDescriptor>,
}

impl FormSchemaBuilder {
    /// Append a field (declaration order is preserved).
    #[must_use]
    pub fn field(mut self, descriptor: FieldDescriptor) -> Self {
        self.fields.push(descriptor);
        self
    }

    pub fn build(self) -> Result<FormSchema, DomainError> {
        let schema = FormSchema {
            name: self.name,
            fields: self.fields,
        };
        schema.validate()?;
        Ok(schema)
    }
}
