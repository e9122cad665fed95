//! Model kinds - the document shapes this crate understands

use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Wire value of the `type` member on data source identifier resources
pub const DATA_SOURCE_IDENTIFIER_TYPE: &str = "dataSourceIdentifier";

/// Document kinds with a typed model and an embedded schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ModelKind {
    /// A single `JsonApiDataSourceIdentifierOutWithLinks` resource
    DataSourceIdentifier,
    /// A `JsonApiDataSourceIdentifierOutList` collection envelope
    DataSourceIdentifierList,
    /// A `StatusType` problem-detail status descriptor
    StatusType,
}

impl ModelKind {
    /// All kinds, in display order
    pub fn all() -> &'static [ModelKind] {
        &[
            ModelKind::DataSourceIdentifier,
            ModelKind::DataSourceIdentifierList,
            ModelKind::StatusType,
        ]
    }

    /// Short name used on the command line and in schema file names
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelKind::DataSourceIdentifier => "data-source-identifier",
            ModelKind::DataSourceIdentifierList => "data-source-identifier-list",
            ModelKind::StatusType => "status-type",
        }
    }

    /// Name of the schema in the API description
    pub fn schema_name(&self) -> &'static str {
        match self {
            ModelKind::DataSourceIdentifier => "JsonApiDataSourceIdentifierOutWithLinks",
            ModelKind::DataSourceIdentifierList => "JsonApiDataSourceIdentifierOutList",
            ModelKind::StatusType => "StatusType",
        }
    }

    /// Embedded schema file name
    pub fn schema_file(&self) -> String {
        format!("{}.schema.json", self.as_str())
    }

    /// Guess the kind of an untyped document
    ///
    /// A resource is recognised by its `type` member, a list by a `data`
    /// array, and a status by either of its two declared members. Anything
    /// else (including non-objects) is unknown.
    pub fn detect(value: &Value) -> Option<ModelKind> {
        let obj = value.as_object()?;

        if obj.get("type").and_then(Value::as_str) == Some(DATA_SOURCE_IDENTIFIER_TYPE) {
            return Some(ModelKind::DataSourceIdentifier);
        }

        if obj.get("data").is_some_and(Value::is_array) {
            return Some(ModelKind::DataSourceIdentifierList);
        }

        if obj.contains_key("statusCode") || obj.contains_key("reasonPhrase") {
            return Some(ModelKind::StatusType);
        }

        None
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when a kind name is not recognised
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown model kind '{0}' (expected one of: data-source-identifier, data-source-identifier-list, status-type)")]
pub struct KindParseError(pub String);

impl FromStr for ModelKind {
    type Err = KindParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        match normalized.as_str() {
            "data-source-identifier" | "dsi" | "identifier" => {
                Ok(ModelKind::DataSourceIdentifier)
            }
            "data-source-identifier-list" | "dsi-list" | "list" => {
                Ok(ModelKind::DataSourceIdentifierList)
            }
            "status-type" | "status" => Ok(ModelKind::StatusType),
            _ => Err(KindParseError(s.to_string())),
        }
    }
}
