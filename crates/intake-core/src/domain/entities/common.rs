use super::super::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A form field identifier guaranteed to be well-formed.
///
/// Invariant: non-empty, no whitespace, no '='. Enforced at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldName(String);

impl FieldName {
    /// Create a new field name.
    ///
    /// # Panics
    /// Panics if the name is malformed (use `try_new` for fallible).
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        assert!(
            Self::check(&name).is_ok(),
            "malformed field name: {:?}",
            name
        );
        Self(name)
    }

    /// Fallible constructor.
    pub fn try_new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        Self::check(&name)?;
        Ok(Self(name))
    }

    fn check(name: &str) -> Result<(), DomainError> {
        if name.is_empty() {
            return Err(DomainError::InvalidFieldName {
                name: name.into(),
                reason: "name cannot be empty".into(),
            });
        }
        if name.chars().any(|c| c.is_whitespace() || c == '=') {
            return Err(DomainError::InvalidFieldName {
                name: name.into(),
                reason: "name cannot contain whitespace or '='".into(),
            });
        }
        Ok(())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for FieldName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FieldName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl PartialEq<str> for FieldName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for FieldName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
