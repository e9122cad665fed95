//! GDM: typed JSON:API metadata models
//!
//! Serializable records for data source identifiers and problem-detail
//! status descriptors, with embedded JSON schemas to validate raw documents.

pub mod cli;
pub mod core;
pub mod models;
pub mod schema;
pub mod yaml;

pub use crate::core::{AdditionalProperties, Model, ModelError, ModelKind};
pub use crate::models::{JsonApiDataSourceIdentifierOutWithLinks, StatusType};
