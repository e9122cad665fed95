//! Embedded JSON schemas and document validation

pub mod registry;
pub mod validator;

pub use registry::SchemaRegistry;
pub use validator::{SchemaError, SchemaViolations, ValidationError, Validator, Violation};
