//! Integration tests for CLI commands.

use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn make_unstamped_document() -> serde_json::Value {
    serde_json::json!({
        "medf_version": "0.2.1",
        "id": "cli-test-doc",
        "snapshot": "2026-08-06T00:00:00.000Z",
        "issuer": "cli-tester",
        "blocks": [
            {
                "block_id": "introduction",
                "role": "body",
                "format": "markdown",
                "text": "# CLI Test\n\nSee MEDF: other-doc#methods for details."
            },
            {
                "block_id": "methodology",
                "role": "body",
                "format": "markdown",
                "text": "We measured things."
            }
        ]
    })
}

fn run_cli(args: &[&str]) -> (bool, String, String) {
    let output = Command::new("cargo")
        .args(["run", "--bin", "medf", "--"])
        .args(args)
        .output()
        .expect("Failed to execute CLI");

    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();
    let success = output.status.success();

    (success, stdout, stderr)
}

#[test]
fn test_canonicalize_orders_keys() {
    let temp_dir = TempDir::new().unwrap();
    let input_path = temp_dir.path().join("value.json");
    fs::write(&input_path, r#"{"b": 1, "a": {"nested": 2}}"#).unwrap();

    let (success, stdout, _) = run_cli(&["canonicalize", input_path.to_str().unwrap()]);
    assert!(success);
    assert_eq!(stdout.trim_end(), r#"{"a":{"nested":2},"b":1}"#);
}

#[test]
fn test_stamp_then_verify_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let input_path = temp_dir.path().join("doc.json");
    fs::write(
        &input_path,
        serde_json::to_string(&make_unstamped_document()).unwrap(),
    )
    .unwrap();

    let (success, stamped, _) = run_cli(&["stamp", input_path.to_str().unwrap()]);
    assert!(success);
    assert!(stamped.contains("doc_hash"));

    let stamped_path = temp_dir.path().join("stamped.json");
    fs::write(&stamped_path, stamped.trim_end()).unwrap();

    let (success, stdout, _) = run_cli(&["verify", stamped_path.to_str().unwrap(), "--strict"]);
    assert!(success);
    assert!(stdout.contains("OVERALL: VALID"));

    let (success, stdout, _) = run_cli(&["verify", stamped_path.to_str().unwrap(), "--json"]);
    assert!(success);
    let report: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(report["valid"], serde_json::json!(true));
}

#[test]
fn test_verify_strict_fails_on_tampering() {
    let temp_dir = TempDir::new().unwrap();
    let input_path = temp_dir.path().join("doc.json");
    fs::write(
        &input_path,
        serde_json::to_string(&make_unstamped_document()).unwrap(),
    )
    .unwrap();

    let (success, stamped, _) = run_cli(&["stamp", input_path.to_str().unwrap()]);
    assert!(success);

    let tampered = stamped.trim_end().replace("We measured things.", "We made things up.");
    let tampered_path = temp_dir.path().join("tampered.json");
    fs::write(&tampered_path, tampered).unwrap();

    let (success, stdout, _) = run_cli(&["verify", tampered_path.to_str().unwrap(), "--strict"]);
    assert!(!success);
    assert!(stdout.contains("OVERALL: INVALID"));
    assert!(stdout.contains("MISMATCH"));
}

#[test]
fn test_verify_reports_malformed_input_without_crashing() {
    let temp_dir = TempDir::new().unwrap();
    let input_path = temp_dir.path().join("junk.json");
    fs::write(&input_path, r#"{"id": 42}"#).unwrap();

    let (success, stdout, _) = run_cli(&["verify", input_path.to_str().unwrap()]);
    assert!(success);
    assert!(stdout.contains("malformed document"));
    assert!(stdout.contains("OVERALL: INVALID"));

    let (success, _, _) = run_cli(&["verify", input_path.to_str().unwrap(), "--strict"]);
    assert!(!success);
}

#[test]
fn test_stamp_json_summary() {
    let temp_dir = TempDir::new().unwrap();
    let input_path = temp_dir.path().join("doc.json");
    fs::write(
        &input_path,
        serde_json::to_string(&make_unstamped_document()).unwrap(),
    )
    .unwrap();

    let (success, stdout, _) = run_cli(&["stamp", input_path.to_str().unwrap(), "--json"]);
    assert!(success);
    let summary: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(summary["doc_hash"].as_str().unwrap().len(), 64);
    assert!(summary["ipfs_cid"].as_str().unwrap().starts_with("bafybeig"));
    assert_eq!(summary["document"]["id"], serde_json::json!("cli-test-doc"));
}

#[test]
fn test_cite_extracts_citations() {
    let temp_dir = TempDir::new().unwrap();
    let input_path = temp_dir.path().join("text.md");
    fs::write(
        &input_path,
        "Compare MEDF: doc-a#intro with MEDF: doc-b#conclusion",
    )
    .unwrap();

    let (success, stdout, _) = run_cli(&["cite", input_path.to_str().unwrap()]);
    assert!(success);
    assert!(stdout.contains("doc-a"));
    assert!(stdout.contains("conclusion"));

    let (success, stdout, _) = run_cli(&["cite", input_path.to_str().unwrap(), "--json"]);
    assert!(success);
    let citations: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(citations.as_array().unwrap().len(), 2);
    assert_eq!(citations[0]["document_id"], serde_json::json!("doc-a"));
    assert_eq!(citations[1]["block_id"], serde_json::json!("conclusion"));
}
