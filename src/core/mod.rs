//! Core module - fundamental types and utilities

pub mod config;
pub mod kind;
pub mod model;

pub use config::{Config, ConfigError, DocumentFormat};
pub use kind::{KindParseError, ModelKind, DATA_SOURCE_IDENTIFIER_TYPE};
pub use model::{AdditionalProperties, Model, ModelError};
