//! CLI command tests

mod common;

use common::{gdm, setup_documents, write_doc, IDENTIFIER_JSON, LIST_JSON, STATUS_YAML};
use predicates::prelude::*;
use tempfile::TempDir;

// ============================================================================
// CLI Basic Tests
// ============================================================================

#[test]
fn test_help_displays() {
    gdm()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("JSON:API metadata documents"));
}

#[test]
fn test_version_displays() {
    gdm()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("gdm"));
}

#[test]
fn test_unknown_command_fails() {
    gdm()
        .arg("unknown-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

// ============================================================================
// Validate Command Tests
// ============================================================================

#[test]
fn test_validate_directory_passes() {
    let tmp = setup_documents();

    gdm()
        .args(["validate"])
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Files checked:  4"))
        .stdout(predicate::str::contains("All files passed validation!"));
}

#[test]
fn test_validate_reports_detected_kind() {
    let tmp = setup_documents();

    gdm()
        .arg("validate")
        .arg(tmp.path().join("status.yml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("(status-type)"));
}

#[test]
fn test_validate_wrong_field_type_fails() {
    let tmp = TempDir::new().unwrap();
    let path = write_doc(
        &tmp,
        "bad.json",
        &IDENTIFIER_JSON.replace(r#""schema": "demo""#, r#""schema": 12"#),
    );

    gdm()
        .arg("validate")
        .arg(&path)
        .assert()
        .failure()
        .stdout(predicate::str::contains("1 error(s)"))
        .stdout(predicate::str::contains("/attributes/schema"))
        .stderr(predicate::str::contains("Validation failed: 1 file has errors"));
}

#[test]
fn test_validate_unknown_members_accepted() {
    let tmp = TempDir::new().unwrap();
    let path = write_doc(
        &tmp,
        "status.yaml",
        "statusCode: 409\nreasonPhrase: Conflict\ndetails:\n  - a\n  - 1\nnested:\n  deep: true\n",
    );

    gdm().arg("validate").arg(&path).assert().success();
}

#[test]
fn test_validate_unknown_kind_skipped_unless_strict() {
    let tmp = TempDir::new().unwrap();
    let path = write_doc(&tmp, "other.yaml", "name: not a model\n");

    gdm()
        .arg("validate")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("unknown document kind (skipped)"));

    gdm()
        .args(["validate", "--strict"])
        .arg(&path)
        .assert()
        .failure();
}

#[test]
fn test_validate_strict_from_config() {
    let tmp = TempDir::new().unwrap();
    let path = write_doc(&tmp, "other.yaml", "name: not a model\n");
    let config = write_doc(&tmp, "config.yaml", "strict: true\n");

    gdm()
        .arg("--config")
        .arg(&config)
        .arg("validate")
        .arg(&path)
        .assert()
        .failure();
}

#[test]
fn test_validate_forced_kind() {
    let tmp = TempDir::new().unwrap();
    let path = write_doc(&tmp, "empty.json", "{}");

    gdm()
        .args(["validate", "--kind", "status-type"])
        .arg(&path)
        .assert()
        .success();

    gdm()
        .args(["validate", "--kind", "data-source-identifier"])
        .arg(&path)
        .assert()
        .failure();
}

#[test]
fn test_validate_keep_going_counts_all_failures() {
    let tmp = TempDir::new().unwrap();
    write_doc(&tmp, "a.yaml", "statusCode: one\n");
    write_doc(&tmp, "b.yaml", "statusCode: two\n");

    gdm()
        .args(["validate", "--keep-going", "--summary"])
        .arg(tmp.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("Files failed:   2"))
        .stderr(predicate::str::contains("2 files have errors"));
}

#[test]
fn test_validate_syntax_error_fails() {
    let tmp = TempDir::new().unwrap();
    let path = write_doc(&tmp, "broken.yaml", "statusCode: [404\n");

    gdm().arg("validate").arg(&path).assert().failure();
}

#[test]
fn test_validate_malformed_json_fails() {
    let tmp = TempDir::new().unwrap();
    let trailing = write_doc(&tmp, "trailing.json", r#"{"statusCode": 404,}"#);
    let bare = write_doc(&tmp, "bare.json", "{statusCode: 404}");
    let single = write_doc(&tmp, "single.json", "{'statusCode': 404}");

    gdm()
        .arg("validate")
        .arg(&trailing)
        .assert()
        .failure()
        .stdout(predicate::str::contains("trailing comma"));

    for path in [&bare, &single] {
        gdm().arg("validate").arg(path).assert().failure();
    }
}

#[test]
fn test_validate_flow_yaml_accepted() {
    let tmp = TempDir::new().unwrap();
    let path = write_doc(&tmp, "status.yaml", "{statusCode: 404, reasonPhrase: Not Found}");

    gdm().arg("validate").arg(&path).assert().success();
}

#[test]
fn test_show_integral_float_code() {
    let tmp = TempDir::new().unwrap();
    let path = write_doc(&tmp, "status.json", r#"{"statusCode": 404.0}"#);

    gdm()
        .args(["show", "--format", "json"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""statusCode": 404"#))
        .stdout(predicate::str::contains("404.0").not());
}

#[test]
fn test_validate_missing_file_fails() {
    let tmp = TempDir::new().unwrap();

    gdm()
        .arg("validate")
        .arg(tmp.path().join("missing.json"))
        .assert()
        .failure();
}

// ============================================================================
// Show Command Tests
// ============================================================================

#[test]
fn test_show_yaml_as_json_preserves_extras() {
    let tmp = setup_documents();

    gdm()
        .args(["show", "--format", "json"])
        .arg(tmp.path().join("status.yml"))
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""statusCode": 404"#))
        .stdout(predicate::str::contains(r#""traceId": "abc123""#));
}

#[test]
fn test_show_json_as_yaml() {
    let tmp = setup_documents();

    gdm()
        .args(["show", "-f", "yaml"])
        .arg(tmp.path().join("identifier.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("type: dataSourceIdentifier"))
        .stdout(predicate::str::contains("relationships:"));
}

#[test]
fn test_show_uses_configured_format() {
    let tmp = setup_documents();
    let config = write_doc(&tmp, "cfg/config.yaml", "output_format: yaml\n");

    gdm()
        .env("GDM_CONFIG", &config)
        .arg("show")
        .arg(tmp.path().join("status.yml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("statusCode: 404"));
}

#[test]
fn test_show_list_table() {
    let tmp = TempDir::new().unwrap();
    let path = write_doc(&tmp, "list.json", LIST_JSON);

    gdm()
        .args(["show", "--table"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("demo-pg"))
        .stdout(predicate::str::contains("DATABRICKS"))
        .stdout(predicate::str::contains("manage"))
        .stdout(predicate::str::contains("2 data source(s)"))
        .stdout(predicate::str::contains("more pages available"));
}

#[test]
fn test_show_rejects_wrong_resource_type() {
    let tmp = TempDir::new().unwrap();
    let path = write_doc(
        &tmp,
        "wrong.json",
        &IDENTIFIER_JSON.replace(r#""type": "dataSourceIdentifier""#, r#""type": "dataSource""#),
    );

    gdm()
        .args(["show", "--kind", "data-source-identifier"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid data-source-identifier document"));
}

#[test]
fn test_show_undetectable_kind_fails() {
    let tmp = TempDir::new().unwrap();
    let path = write_doc(&tmp, "plain.yaml", "hello: world\n");

    gdm()
        .arg("show")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("pass --kind"));
}

// ============================================================================
// Status Command Tests
// ============================================================================

#[test]
fn test_status_known_code() {
    gdm()
        .args(["status", "404"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""reasonPhrase": "Not Found""#))
        .stdout(predicate::str::contains(r#""statusCode": 404"#));
}

#[test]
fn test_status_short_with_reason_override() {
    gdm()
        .args(["status", "418", "--reason", "Short and stout", "--short"])
        .assert()
        .success()
        .stdout(predicate::str::contains("418 Short and stout"));
}

#[test]
fn test_status_extra_members() {
    gdm()
        .args(["status", "503", "--set", "retryAfter=30", "--set", "note=later", "-f", "yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("retryAfter: 30"))
        .stdout(predicate::str::contains("note: later"));
}

#[test]
fn test_status_extra_cannot_shadow_declared_field() {
    gdm()
        .args(["status", "500", "--set", "statusCode=1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("declared field"));
}

#[test]
fn test_status_out_of_range_code_fails() {
    gdm().args(["status", "99"]).assert().failure();
}

// ============================================================================
// Schema Command Tests
// ============================================================================

#[test]
fn test_schema_list() {
    gdm()
        .arg("schema")
        .assert()
        .success()
        .stdout(predicate::str::contains("JsonApiDataSourceIdentifierOutWithLinks"))
        .stdout(predicate::str::contains("StatusType"))
        .stdout(predicate::str::contains("3 schema(s)"));
}

#[test]
fn test_schema_print_one() {
    gdm()
        .args(["schema", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""reasonPhrase""#));
}

#[test]
fn test_schema_unknown_kind_fails() {
    gdm().args(["schema", "workspace"]).assert().failure();
}

#[test]
fn test_completions_generate() {
    gdm()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("gdm"));
}

#[test]
fn test_status_fixture_is_valid_yaml() {
    // Guard the shared fixture against accidental edits
    let value: serde_json::Value = serde_yml::from_str(STATUS_YAML).unwrap();
    assert_eq!(value["statusCode"], 404);
}
