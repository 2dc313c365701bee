//! Catalog Service - course and service directory queries.
//!
//! Handles catalog browsing, filtering, and detail lookup.
//! Separated from BookingService for single responsibility.

use crate::{
    domain::{CategoryFilter, Course, CourseCatalog, ServiceDirectory},
    error::IntakeResult,
};

/// Information about a course for display purposes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseInfo {
    pub title: String,
    pub category: String,
    pub price: String,
    pub duration: String,
    pub description: String,
}

impl From<&Course> for CourseInfo {
    fn from(course: &Course) -> Self {
        Self {
            title: course.title.clone(),
            category: course.category.to_string(),
            price: course.price.clone(),
            duration: course.duration.clone(),
            description: course.description.clone(),
        }
    }
}

/// Service for catalog operations.
pub struct CatalogService {
    catalog: CourseCatalog,
    directory: ServiceDirectory,
}

impl CatalogService {
    /// Create a new catalog service.
    pub fn new(catalog: CourseCatalog, directory: ServiceDirectory) -> Self {
        Self { catalog, directory }
    }

    /// Courses passing the filter, as display DTOs.
    pub fn list_courses(&self, filter: CategoryFilter) -> Vec<CourseInfo> {
        self.catalog
            .filter(filter)
            .into_iter()
            .map(CourseInfo::from)
            .collect()
    }

    /// Detail view for one course (title lookup is case-insensitive).
    pub fn course_details(&self, title: &str) -> IntakeResult<CourseInfo> {
        Ok(self.catalog.find(title).map(CourseInfo::from)?)
    }

    /// `(code, label)` pairs of the bookable services, in display order.
    pub fn list_services(&self) -> Vec<(String, String)> {
        self.directory
            .entries()
            .map(|(c, l)| (c.to_string(), l.to_string()))
            .collect()
    }

    /// Display label for a service code (falls back to the raw code).
    pub fn service_label(&self, code: &str) -> String {
        self.directory.label_for(code).to_string()
    }
}
