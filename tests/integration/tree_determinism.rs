//! Integration tests for output stability across runs

use super::test_utils::Project;

fn sample_project() -> Project {
    let project = Project::new();
    project
        .file("z.txt", "")
        .file("a.txt", "")
        .file("m/inner.rs", "")
        .file("m/inner.rs.metadata", "inner module")
        .file("B.md", "");
    project
}

/// Test that two runs over an unchanged tree write identical files
#[test]
fn test_rerun_is_byte_identical() {
    let project = sample_project();
    project.file(".projectignore", "projectSummary.json\n");

    project.generate();
    let first = project.output_text();
    project.generate();
    let second = project.output_text();

    assert_eq!(first, second);
}

/// Test that a previous summary is picked up as an ordinary file, after which output settles
#[test]
fn test_previous_output_becomes_an_entry() {
    let project = sample_project();

    project.generate();
    let first = project.output_json();
    assert!(first["structure"].get("projectSummary.json").is_none());

    project.generate();
    let second = project.output_text();
    project.generate();
    let third = project.output_text();

    assert_eq!(second, third);
    assert_eq!(project.output_json()["structure"]["projectSummary.json"], "projectSummary");
}

/// Test that entries are listed in name order
#[test]
fn test_entries_listed_in_name_order() {
    let project = sample_project();

    let summary = project.summary();
    let names: Vec<_> = summary.structure.names().collect();
    assert_eq!(names, vec!["B.md", "a.txt", "m", "z.txt"]);
}
