//! Service directory: coded service values and their display labels.

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// Maps service codes (the form's select values) to human-readable labels.
///
/// Insertion order is display order. Lookup of an unknown code falls back
/// to the raw code itself. Submission passes codes through unresolved, so
/// a stale form value must never break confirmation rendering.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ServiceDirectory {
    entries: Vec<(String, String)>,
}

impl ServiceDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a service (chainable).
    #[must_use]
    pub fn with_service(mut self, code: impl Into<String>, label: impl Into<String>) -> Self {
        self.entries.push((code.into(), label.into()));
        self
    }

    /// Display label for a code, falling back to the code itself.
    pub fn label_for<'a>(&'a self, code: &'a str) -> &'a str {
        self.entries
            .iter()
            .find(|(c, _)| c == code)
            .map(|(_, label)| label.as_str())
            .unwrap_or(code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.entries.iter().any(|(c, _)| c == code)
    }

    /// `(code, label)` pairs in display order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(c, l)| (c.as_str(), l.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check that no code is registered twice.
    pub fn validate(&self) -> Result<(), DomainError> {
        for (i, (code, _)) in self.entries.iter().enumerate() {
            if self.entries[..i].iter().any(|(c, _)| c == code) {
                return Err(DomainError::DuplicateService { code: code.clone() });
            }
        }
        Ok(())
    }
}
