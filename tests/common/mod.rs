//! Shared test helpers for integration tests
//!
//! This module provides common utilities used across all test files.

#![allow(dead_code)]

use assert_cmd::cargo;
use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper to get a gdm command isolated from the user's environment
pub fn gdm() -> Command {
    let mut cmd = Command::new(cargo::cargo_bin!("gdm"));
    cmd.env_remove("GDM_CONFIG").env_remove("RUST_LOG");
    cmd
}

/// Write a file into the temp directory and return its path
pub fn write_doc(tmp: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = tmp.path().join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, content).unwrap();
    path
}

pub const IDENTIFIER_JSON: &str = r#"{
  "id": "demo-pg",
  "type": "dataSourceIdentifier",
  "attributes": {
    "name": "Demo Postgres",
    "schema": "demo",
    "type": "POSTGRESQL"
  },
  "meta": {
    "permissions": ["MANAGE", "USE"]
  },
  "links": {
    "self": "https://analytics.example.com/api/v1/entities/dataSourceIdentifiers/demo-pg"
  },
  "relationships": {
    "owner": {"data": null}
  }
}
"#;

pub const IDENTIFIER_YAML: &str = r#"id: warehouse
type: dataSourceIdentifier
attributes:
  name: Warehouse
  schema: sales
  type: SNOWFLAKE
meta:
  permissions:
    - USE
"#;

pub const LIST_JSON: &str = r#"{
  "data": [
    {
      "id": "demo-pg",
      "type": "dataSourceIdentifier",
      "attributes": {"name": "Demo Postgres", "schema": "demo", "type": "POSTGRESQL"},
      "meta": {"permissions": ["MANAGE"]}
    },
    {
      "id": "lake",
      "type": "dataSourceIdentifier",
      "attributes": {"name": "Lake", "schema": "raw", "type": "DATABRICKS"}
    }
  ],
  "links": {
    "self": "https://analytics.example.com/api/v1/entities/dataSourceIdentifiers?page=0&size=2",
    "next": "https://analytics.example.com/api/v1/entities/dataSourceIdentifiers?page=1&size=2"
  },
  "meta": {"page": {"number": 0, "size": 2, "totalElements": 3, "totalPages": 2}}
}
"#;

pub const STATUS_YAML: &str = "statusCode: 404\nreasonPhrase: Not Found\ntraceId: abc123\n";

/// Helper to create a temp directory holding one valid document of each kind
pub fn setup_documents() -> TempDir {
    let tmp = TempDir::new().unwrap();
    write_doc(&tmp, "identifier.json", IDENTIFIER_JSON);
    write_doc(&tmp, "identifier.yaml", IDENTIFIER_YAML);
    write_doc(&tmp, "list.json", LIST_JSON);
    write_doc(&tmp, "status.yml", STATUS_YAML);
    tmp
}
