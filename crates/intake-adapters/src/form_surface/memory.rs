//! In-memory form surface holding the live schema and values.

use std::sync::{Arc, RwLock};

use intake_core::{
    application::ports::FormSurface,
    domain::{DomainError, FieldDescriptor, FormSchema},
    error::IntakeResult,
};

/// Thread-safe in-memory form surface.
///
/// Holds the declared schema and the current field values; the application
/// layer reads snapshots through the [`FormSurface`] port.
#[derive(Clone)]
pub struct MemoryFormSurface {
    inner: Arc<RwLock<FormSchema>>,
}

impl MemoryFormSurface {
    /// Create a surface over a declared schema.
    pub fn new(schema: FormSchema) -> Self {
        Self {
            inner: Arc::new(RwLock::new(schema)),
        }
    }

    /// The number of declared fields.
    pub fn len(&self) -> usize {
        self.inner.read().map(|s| s.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FormSurface for MemoryFormSurface {
    fn descriptors(&self) -> IntakeResult<Vec<FieldDescriptor>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| intake_core::application::ApplicationError::SurfaceLockError)?;

        Ok(inner.fields().to_vec())
    }

    fn descriptor(&self, name: &str) -> IntakeResult<FieldDescriptor> {
        let inner = self
            .inner
            .read()
            .map_err(|_| intake_core::application::ApplicationError::SurfaceLockError)?;

        inner.field(name).cloned().ok_or_else(|| {
            DomainError::UnknownField {
                form: inner.name().to_string(),
                name: name.to_string(),
            }
            .into()
        })
    }

    fn set_value(&self, name: &str, value: &str) -> IntakeResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| intake_core::application::ApplicationError::SurfaceLockError)?;

        inner.set_value(name, value)?;
        Ok(())
    }

    fn reset(&self) -> IntakeResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| intake_core::application::ApplicationError::SurfaceLockError)?;

        inner.reset();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use intake_core::domain::FieldKind;

    fn surface() -> MemoryFormSurface {
        let schema = FormSchema::builder("test")
            .field(FieldDescriptor::new("name", FieldKind::Text).required())
            .field(FieldDescriptor::new("email", FieldKind::Email).required())
            .build()
            .unwrap();
        MemoryFormSurface::new(schema)
    }

    #[test]
    fn set_value_is_visible_in_snapshots() {
        let s = surface();
        s.set_value("name", "Jane").unwrap();
        assert_eq!(s.descriptor("name").unwrap().raw_value(), "Jane");
    }

    #[test]
    fn unknown_field_is_a_domain_error() {
        let s = surface();
        assert!(s.set_value("nickname", "JD").is_err());
        assert!(s.descriptor("nickname").is_err());
    }

    #[test]
    fn reset_clears_values_but_keeps_schema() {
        let s = surface();
        s.set_value("name", "Jane").unwrap();
        s.reset().unwrap();
        assert_eq!(s.len(), 2);
        assert_eq!(s.descriptor("name").unwrap().raw_value(), "");
    }

    #[test]
    fn descriptors_preserve_declaration_order() {
        let s = surface();
        let names: Vec<String> = s
            .descriptors()
            .unwrap()
            .iter()
            .map(|f| f.name().to_string())
            .collect();
        assert_eq!(names, ["name", "email"]);
    }
}
