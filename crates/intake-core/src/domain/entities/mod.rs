pub mod booking;
pub mod common;
pub mod course;
pub mod field;
pub mod form;
pub mod service;

pub use booking::{BookingRecord, ValidationReport};
pub use common::FieldName;
pub use course::{Course, CourseCatalog};
pub use field::FieldDescriptor;
pub use form::{FormSchema, FormSchemaBuilder};
pub use service::ServiceDirectory;
