//! Built-in schema, service directory, and course catalog.
//!
//! These mirror what the studio publishes today. Callers that need a
//! different shape build their own [`FormSchema`] and pass it to
//! [`crate::MemoryFormSurface`].

use intake_core::domain::{
    Course, CourseCatalog, CourseCategory, FieldDescriptor, FieldKind, FormSchema,
    ServiceDirectory,
};

/// The consultation booking form.
///
/// Field order matters: validation reports point at the first erroneous
/// field in this order.
pub fn booking_form() -> FormSchema {
    FormSchema::builder("booking")
        .field(FieldDescriptor::new("name", FieldKind::Text).required())
        .field(FieldDescriptor::new("email", FieldKind::Email).required())
        .field(FieldDescriptor::new("phone", FieldKind::Tel))
        .field(FieldDescriptor::new("service", FieldKind::Select).required())
        .field(FieldDescriptor::new("date", FieldKind::Date).required())
        .field(FieldDescriptor::new("time", FieldKind::Time).required())
        .field(FieldDescriptor::new("goals", FieldKind::Text))
        .build()
        .expect("built-in booking form is valid")
}

/// The services offered for one-on-one consultations.
pub fn service_directory() -> ServiceDirectory {
    ServiceDirectory::new()
        .with_service("nutrition", "Nutrition Consultation")
        .with_service("fitness", "Fitness Consultation")
        .with_service("wellness", "Holistic Wellness")
        .with_service("weight", "Weight Management")
        .with_service("general", "General Health Coaching")
}

/// The published group-course catalog.
pub fn course_catalog() -> CourseCatalog {
    CourseCatalog::new(vec![
        Course::new(
            "Foundations of Healthy Eating",
            CourseCategory::Nutrition,
            "$149",
            "6 weeks",
            "Build a sustainable approach to meals with weekly group sessions \
             and a personalised pantry review.",
        ),
        Course::new(
            "Meal Planning Masterclass",
            CourseCategory::Nutrition,
            "$89",
            "4 weeks",
            "Plan a full week of balanced meals in under an hour, with batch \
             cooking strategies that survive busy schedules.",
        ),
        Course::new(
            "Strength Training for Beginners",
            CourseCategory::Fitness,
            "$199",
            "8 weeks",
            "Learn safe, progressive strength work in small coached groups. \
             No gym experience required.",
        ),
        Course::new(
            "Everyday Mobility",
            CourseCategory::Fitness,
            "$119",
            "5 weeks",
            "Short daily routines that restore range of motion and keep desk \
             work from undoing your training.",
        ),
        Course::new(
            "Stress and Sleep Reset",
            CourseCategory::Wellness,
            "$129",
            "4 weeks",
            "Evidence-based routines for winding down, sleeping through, and \
             managing daily stress load.",
        ),
        Course::new(
            "Mindful Habits Workshop",
            CourseCategory::Mindset,
            "$99",
            "3 weeks",
            "Replace all-or-nothing thinking with small, durable habits using \
             guided weekly practice.",
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use intake_core::domain::CategoryFilter;

    #[test]
    fn booking_form_declares_expected_fields_in_order() {
        let form = booking_form();
        let names: Vec<&str> = form.fields().iter().map(|f| f.name().as_str()).collect();
        assert_eq!(
            names,
            ["name", "email", "phone", "service", "date", "time", "goals"]
        );
    }

    #[test]
    fn phone_and_goals_are_optional() {
        let form = booking_form();
        assert!(!form.field("phone").unwrap().is_required());
        assert!(!form.field("goals").unwrap().is_required());
        assert!(form.field("email").unwrap().is_required());
    }

    #[test]
    fn directory_covers_every_bookable_service() {
        let directory = service_directory();
        for code in ["nutrition", "fitness", "wellness", "weight", "general"] {
            assert!(directory.contains(code), "missing service {code}");
        }
    }

    #[test]
    fn directory_labels_match_published_services() {
        let directory = service_directory();
        assert_eq!(directory.label_for("nutrition"), "Nutrition Consultation");
        assert_eq!(directory.label_for("fitness"), "Fitness Consultation");
        assert_eq!(directory.label_for("wellness"), "Holistic Wellness");
        assert_eq!(directory.label_for("weight"), "Weight Management");
        assert_eq!(directory.label_for("general"), "General Health Coaching");
    }

    #[test]
    fn catalog_filters_by_category() {
        let catalog = course_catalog();
        let nutrition = catalog.filter(CategoryFilter::Only(CourseCategory::Nutrition));
        assert_eq!(nutrition.len(), 2);
        assert_eq!(catalog.filter(CategoryFilter::All).len(), catalog.len());
    }

    #[test]
    fn catalog_lookup_is_case_insensitive() {
        let catalog = course_catalog();
        let course = catalog.find("everyday mobility").unwrap();
        assert_eq!(course.category, CourseCategory::Fitness);
    }
}
