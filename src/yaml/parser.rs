//! Document parsing and rendering
//!
//! Input may be JSON or YAML. Files named `*.json` are parsed as strict
//! JSON. Other files that open with `{` or `[` are tried as JSON first and
//! fall back to serde_yml, which also reads flow-style YAML.

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::path::Path;

use crate::core::config::DocumentFormat;
use crate::yaml::diagnostics::{YamlError, YamlSyntaxError};

/// Parse document content into a typed value with nice error messages
pub fn parse_yaml<T: DeserializeOwned + 'static>(content: &str, filename: &str) -> Result<T, YamlError> {
    if is_json_file(filename) {
        return serde_json::from_str(content).map_err(|e| {
            YamlError::Syntax(YamlSyntaxError::from_json_error(&e, content, filename))
        });
    }

    if looks_like_json(content) {
        if let Ok(value) = serde_json::from_str(content) {
            return Ok(value);
        }
    }

    serde_yml::from_str(content).map_err(|e| {
        YamlError::Syntax(YamlSyntaxError::from_serde_error(&e, content, filename))
    })
}

/// Parse document content into an untyped JSON value
pub fn parse_document(content: &str, filename: &str) -> Result<Value, YamlError> {
    parse_yaml(content, filename)
}

/// Parse a document from a file path
pub fn parse_yaml_file<T: DeserializeOwned + 'static>(path: &Path) -> Result<T, YamlError> {
    let content = std::fs::read_to_string(path)?;
    let filename = path.display().to_string();
    tracing::trace!(file = %filename, bytes = content.len(), "parsing document");
    parse_yaml(&content, &filename)
}

/// Render a value in the requested format
pub fn render<T: Serialize>(value: &T, format: DocumentFormat) -> Result<String, YamlError> {
    match format {
        DocumentFormat::Json => serde_json::to_string_pretty(value).map_err(YamlError::RenderJson),
        DocumentFormat::Yaml => serde_yml::to_string(value).map_err(YamlError::RenderYaml),
    }
}

fn is_json_file(filename: &str) -> bool {
    Path::new(filename)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

fn looks_like_json(content: &str) -> bool {
    matches!(content.trim_start().chars().next(), Some('{') | Some('['))
}
