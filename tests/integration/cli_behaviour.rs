//! Integration tests for the command-line binary

use super::test_utils::{run_cli, Project};
use serde_json::json;

/// Test that the positional argument selects the project root
#[test]
fn test_explicit_root_argument() {
    let project = Project::new();
    project.file("app/main.py", "");
    let app = project.root().join("app");

    let output = run_cli(project.root(), &["app"]);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let written = std::fs::read_to_string(app.join("projectSummary.json")).unwrap();
    let summary: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(summary["structure"], json!({"main.py": "main"}));
    assert!(!project.output_path().exists());
}

/// Test that the current directory is used when no argument is given
#[test]
fn test_defaults_to_current_directory() {
    let project = Project::new();
    project.file("a.txt", "");

    let output = run_cli(project.root(), &[]);
    assert!(output.status.success());
    assert_eq!(project.output_json()["structure"], json!({"a.txt": "a"}));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Project summary has been generated"));
}

/// Test that a malformed manifest is reported but does not fail the run
#[test]
fn test_malformed_manifest_warns() {
    let project = Project::new();
    project.file("package.json", "not json at all");

    let output = run_cli(project.root(), &[]);
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to parse manifest"), "stderr: {}", stderr);
    assert_eq!(project.output_json()["project"], json!({}));
}

/// Test that a missing manifest is reported as a warning
#[test]
fn test_missing_manifest_warns() {
    let project = Project::new();

    let output = run_cli(project.root(), &[]);
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("No manifest found"), "stderr: {}", stderr);
}

/// Test that an unusable root exits non-zero without writing anything
#[test]
fn test_missing_root_fails() {
    let project = Project::new();

    let output = run_cli(project.root(), &["does-not-exist"]);
    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Cannot resolve project root"), "stderr: {}", stderr);
    assert!(!project.output_path().exists());
}
