use pocdedup::tooling::cli::RunRequest;
use tempfile::TempDir;

use crate::cli::support::{context, json_request, write_poc};

#[test]
fn json_run_summary_has_required_fields() {
    let temp = TempDir::new().unwrap();
    write_poc(temp.path(), "a.yaml", "name: newest\npath: /login\n", 50);
    write_poc(temp.path(), "b.json", r#"{"name": "older", "path": "/login"}"#, 10);
    write_poc(temp.path(), "c.yml", "description: nothing to key on\n", 10);

    let output = context(temp.path()).execute(&json_request()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(parsed.get("records").and_then(|v| v.as_u64()), Some(2));
    let skipped = parsed.get("skipped").and_then(|v| v.as_array()).unwrap();
    assert_eq!(skipped.len(), 1);
    assert!(skipped[0]
        .get("reason")
        .and_then(|v| v.as_str())
        .unwrap()
        .contains("missing path field"));

    let duplicates = parsed.get("duplicates").unwrap();
    assert_eq!(duplicates.get("group_count").and_then(|v| v.as_u64()), Some(1));
    let group = &duplicates["groups"][0];
    assert_eq!(group["identifier"].as_str(), Some("/login"));
    assert_eq!(group["members"][0]["label"].as_str(), Some("newest"));
    assert_eq!(group["members"][1]["label"].as_str(), Some("older"));

    assert!(parsed.get("deleted").and_then(|v| v.as_array()).unwrap().is_empty());
    assert!(parsed.get("export").unwrap().is_null());
}

#[test]
fn json_run_lists_deleted_and_exported_files() {
    let temp = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    write_poc(temp.path(), "new.yaml", "path: /x\n", 50);
    let old = write_poc(temp.path(), "old.yaml", "path: /x\n", 10);

    let request = RunRequest {
        delete: true,
        out: Some(out.path().to_path_buf()),
        ..json_request()
    };
    let output = context(temp.path()).execute(&request).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

    let deleted = parsed["deleted"].as_array().unwrap();
    assert_eq!(deleted.len(), 1);
    assert_eq!(deleted[0].as_str(), old.to_str());

    let files = parsed["export"]["files"].as_array().unwrap();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0]["identifier"].as_str(), Some("/x"));
    assert!(out.path().join("new.yaml").is_file());
}

#[test]
fn unknown_report_format_is_rejected() {
    let temp = TempDir::new().unwrap();
    let request = RunRequest {
        format: Some("yaml".to_string()),
        ..RunRequest::default()
    };
    assert!(context(temp.path()).execute(&request).is_err());
}
