//! Domain value objects: FieldKind, Outcome, CourseCategory, CategoryFilter.
//!
//! # Design
//!
//! These are pure value types: `Copy` and compared by value.
//! They hold NO validation logic. The kind-specific pattern checks live in
//! `validation.rs`. This file's only job is to define the types, their
//! string representations, and their `FromStr` parsers.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── FieldKind ─────────────────────────────────────────────────────────────────

/// The declared input type of a form field.
///
/// Mirrors the surface's `type` attribute. Kinds without a format check
/// (`Text`, `Date`, `Time`, `Select`) only participate in the required-field
/// rule; the date/time picker enforces its own range constraints upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    Date,
    Time,
    Select,
}

impl FieldKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Tel => "tel",
            Self::Date => "date",
            Self::Time => "time",
            Self::Select => "select",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "email" => Ok(Self::Email),
            "tel" | "phone" => Ok(Self::Tel),
            "date" => Ok(Self::Date),
            "time" => Ok(Self::Time),
            "select" => Ok(Self::Select),
            other => Err(DomainError::InvalidFieldName {
                name: other.into(),
                reason: "unknown field kind".into(),
            }),
        }
    }
}

// ── Outcome ───────────────────────────────────────────────────────────────────

/// Per-field validation result.
///
/// Exactly one outcome exists per declared field after a validation pass.
/// `MissingRequired` always wins over `FormatInvalid` (rule order).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Valid,
    MissingRequired,
    FormatInvalid,
}

impl Outcome {
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Valid => "valid",
            Self::MissingRequired => "missing-required",
            Self::FormatInvalid => "format-invalid",
        }
    }

    /// Short human message for error marking.
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Valid => "ok",
            Self::MissingRequired => "this field is required",
            Self::FormatInvalid => "value has an invalid format",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── CourseCategory ────────────────────────────────────────────────────────────

/// A course's catalog category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseCategory {
    Nutrition,
    Fitness,
    Wellness,
    Mindset,
}

impl CourseCategory {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Nutrition => "nutrition",
            Self::Fitness => "fitness",
            Self::Wellness => "wellness",
            Self::Mindset => "mindset",
        }
    }

    pub const ALL: [CourseCategory; 4] = [
        Self::Nutrition,
        Self::Fitness,
        Self::Wellness,
        Self::Mindset,
    ];
}

impl fmt::Display for CourseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CourseCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "nutrition" => Ok(Self::Nutrition),
            "fitness" => Ok(Self::Fitness),
            "wellness" => Ok(Self::Wellness),
            "mindset" => Ok(Self::Mindset),
            other => Err(DomainError::UnknownCategory { name: other.into() }),
        }
    }
}

// ── CategoryFilter ────────────────────────────────────────────────────────────

/// Filter selector for the course catalog.
///
/// `All` matches every course (the catalog's "show everything" button);
/// `Only` matches courses in exactly one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(CourseCategory),
}

impl CategoryFilter {
    pub fn matches(&self, category: CourseCategory) -> bool {
        match self {
            Self::All => true,
            Self::Only(c) => *c == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(c) => c.fmt(f),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            CourseCategory::from_str(s).map(Self::Only)
        }
    }
}
