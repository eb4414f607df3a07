//! Integration tests for the written summary document

use super::test_utils::Project;
use serde_json::json;

/// Test the output of a project with no manifest and no ignore file
#[test]
fn test_bare_project() {
    let project = Project::new();
    project.file("index.js", "").file("lib/util.js", "");

    let written = project.generate();
    assert_eq!(written.file_name().unwrap(), "projectSummary.json");

    let output = project.output_json();
    let keys: Vec<_> = output.as_object().unwrap().keys().cloned().collect();
    assert_eq!(keys, vec!["project", "structure"]);
    assert_eq!(output["project"], json!({}));
    assert_eq!(
        output["structure"],
        json!({"index.js": "index", "lib": {"util.js": "util"}})
    );
}

/// Test that the manifest is embedded verbatim
#[test]
fn test_manifest_embedded() {
    let project = Project::new();
    project.file(
        "package.json",
        r#"{"name": "demo", "version": "2.1.0", "scripts": {"test": "jest"}}"#,
    );

    project.generate();
    let output = project.output_json();
    assert_eq!(
        output["project"],
        json!({"name": "demo", "version": "2.1.0", "scripts": {"test": "jest"}})
    );
    assert_eq!(output["structure"]["package.json"], "package");
}

/// Test that a malformed manifest degrades to an empty object
#[test]
fn test_malformed_manifest() {
    let project = Project::new();
    project.file("package.json", "{\"name\": ");

    project.generate();
    let output = project.output_json();
    assert_eq!(output["project"], json!({}));
    assert_eq!(output["structure"]["package.json"], "package");
}

/// Test two-space pretty printing and overwrite of a previous file
#[test]
fn test_pretty_printed_and_overwritten() {
    let project = Project::new();
    project
        .file(".projectignore", "projectSummary.json\n")
        .file("projectSummary.json", "stale")
        .file("a.txt", "");

    project.generate();
    let text = project.output_text();
    assert!(!text.contains("stale"));
    assert!(text.starts_with("{\n  \"project\": {},\n  \"structure\": {\n    \""));
    assert!(!text.ends_with('\n'));
}
