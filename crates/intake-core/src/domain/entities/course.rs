//! Course catalog: the browsable course cards and their category filter.

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;
use crate::domain::value_objects::{CategoryFilter, CourseCategory};

/// One course card.
///
/// Price and duration are display strings, not quantities; the catalog
/// never computes with them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub title: String,
    pub category: CourseCategory,
    pub price: String,
    pub duration: String,
    pub description: String,
}

impl Course {
    pub fn new(
        title: impl Into<String>,
        category: CourseCategory,
        price: impl Into<String>,
        duration: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            category,
            price: price.into(),
            duration: duration.into(),
            description: description.into(),
        }
    }
}

/// The full set of offered courses, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CourseCatalog {
    courses: Vec<Course>,
}

impl CourseCatalog {
    pub fn new(courses: Vec<Course>) -> Self {
        Self { courses }
    }

    /// Courses passing the filter, in display order.
    pub fn filter(&self, filter: CategoryFilter) -> Vec<&Course> {
        self.courses
            .iter()
            .filter(|c| filter.matches(c.category))
            .collect()
    }

    /// Look up a course by title (case-insensitive, detail view).
    pub fn find(&self, title: &str) -> Result<&Course, DomainError> {
        self.courses
            .iter()
            .find(|c| c.title.eq_ignore_ascii_case(title))
            .ok_or_else(|| DomainError::CourseNotFound {
                title: title.into(),
            })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Course> {
        self.courses.iter()
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}
