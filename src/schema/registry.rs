//! Schema registry - embedded JSON schemas

use rust_embed::Embed;
use serde_json::Value;
use std::collections::BTreeMap;

use crate::core::ModelKind;

#[derive(Embed)]
#[folder = "schemas/"]
struct EmbeddedSchemas;

/// Base URI the embedded schemas declare in their `$id`
pub const SCHEMA_BASE_URI: &str = "https://gdm.local/schemas/";

/// Registry of JSON schemas for document validation
pub struct SchemaRegistry {
    schemas: BTreeMap<ModelKind, String>,
}

impl SchemaRegistry {
    /// Create a new schema registry with embedded schemas
    pub fn new() -> Self {
        let mut schemas = BTreeMap::new();

        for kind in ModelKind::all() {
            let filename = kind.schema_file();
            if let Some(file) = EmbeddedSchemas::get(&filename) {
                if let Ok(content) = std::str::from_utf8(&file.data) {
                    schemas.insert(*kind, content.to_string());
                }
            } else {
                tracing::warn!(schema = %filename, "embedded schema missing");
            }
        }

        tracing::debug!(count = schemas.len(), "loaded embedded schemas");
        Self { schemas }
    }

    /// Get the JSON schema text for a kind
    pub fn get(&self, kind: ModelKind) -> Option<&str> {
        self.schemas.get(&kind).map(|s| s.as_str())
    }

    /// Get the JSON schema for a kind as a parsed value
    pub fn get_value(&self, kind: ModelKind) -> Option<Value> {
        self.get(kind).and_then(|s| serde_json::from_str(s).ok())
    }

    /// Check if a schema exists for the given kind
    pub fn has_schema(&self, kind: ModelKind) -> bool {
        self.schemas.contains_key(&kind)
    }

    /// Kinds with a registered schema
    pub fn kinds(&self) -> impl Iterator<Item = ModelKind> + '_ {
        self.schemas.keys().copied()
    }

    /// Absolute URI a schema is addressable under
    pub fn uri(kind: ModelKind) -> String {
        format!("{}{}", SCHEMA_BASE_URI, kind.schema_file())
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_kinds_have_schemas() {
        let registry = SchemaRegistry::new();
        for kind in ModelKind::all() {
            assert!(registry.has_schema(*kind), "missing schema for {}", kind);
        }
        assert_eq!(registry.kinds().count(), ModelKind::all().len());
    }

    #[test]
    fn test_schema_ids_match_uri() {
        let registry = SchemaRegistry::new();
        for kind in ModelKind::all() {
            let schema = registry.get_value(*kind).unwrap();
            assert_eq!(schema["$id"], SchemaRegistry::uri(*kind));
            assert_eq!(schema["title"], kind.schema_name());
        }
    }
}
