//! CLI command implementations

pub mod completions;
pub mod schema;
pub mod show;
pub mod status;
pub mod validate;
