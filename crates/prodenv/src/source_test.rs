// Copyright (c) Contributors to the prodenv project.
// SPDX-License-Identifier: Apache-2.0

use rstest::rstest;

use super::*;

#[rstest]
fn test_parse_sections_and_keys() {
    let text = r#"
# studio software configuration
[maya]
version = 2023.3.0
packages = ["mtoa-2.2", "golaem-4"]

[nuke]
version=12.2
"#;
    let source = ConfigSource::parse(text).expect("Should parse");

    assert_eq!(source.get("maya", "version"), Some("2023.3.0"));
    assert_eq!(source.get("maya", "packages"), Some(r#"["mtoa-2.2", "golaem-4"]"#));
    assert_eq!(source.get("nuke", "version"), Some("12.2"));
    assert_eq!(source.get("nuke", "packages"), None);
}

#[rstest]
fn test_section_names_preserve_order() {
    let text = "[zbrush]\nversion = 1\n[maya]\nversion = 2\n[houdini]\nversion = 3\n";
    let source = ConfigSource::parse(text).expect("Should parse");

    let names: Vec<&str> = source.section_names().collect();
    assert_eq!(names, vec!["zbrush", "maya", "houdini"]);
}

#[rstest]
fn test_sections_are_case_sensitive() {
    let source = ConfigSource::parse("[Maya]\nversion = 1\n").expect("Should parse");

    assert!(source.has_section("Maya"));
    assert!(!source.has_section("maya"));
}

#[rstest]
fn test_duplicate_key_last_wins() {
    let source =
        ConfigSource::parse("[maya]\nversion = 1\nversion = 2\n").expect("Should parse");

    assert_eq!(source.get("maya", "version"), Some("2"));
}

#[rstest]
fn test_comments_and_blank_lines_ignored() {
    let text = "; semicolon comment\n\n# hash comment\n[maya]\n# inner\nversion = 1\n";
    let source = ConfigSource::parse(text).expect("Should parse");

    assert_eq!(source.get("maya", "version"), Some("1"));
}

#[rstest]
fn test_empty_section_is_defined() {
    let source = ConfigSource::parse("[maya]\n").expect("Should parse");

    assert!(source.has_section("maya"));
    assert_eq!(source.get("maya", "version"), None);
}

#[rstest]
#[case("not a config line\n")]
#[case("version = 1\n[maya]\n")]
#[case("[]\n")]
fn test_syntax_errors(#[case] text: &str) {
    let result = ConfigSource::parse(text);
    assert!(matches!(result, Err(crate::Error::InvalidSyntax { .. })));
}

#[rstest]
fn test_syntax_error_reports_line() {
    let err = ConfigSource::parse("[maya]\nversion = 1\ngarbage\n")
        .expect_err("Should fail on garbage line");

    match err {
        crate::Error::InvalidSyntax { line, content, .. } => {
            assert_eq!(line, 3);
            assert_eq!(content, "garbage");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[rstest]
fn test_load_missing_file() {
    let result = ConfigSource::load("/no/such/config.ini");
    assert!(matches!(result, Err(crate::Error::SourceNotFound(_))));
}

#[rstest]
fn test_load_records_source_path() {
    let dir = tempfile::tempdir().expect("Should create temp dir");
    let path = dir.path().join("software.ini");
    std::fs::write(&path, "[maya]\nversion = 2023\n").expect("Should write");

    let source = ConfigSource::load(&path).expect("Should load");
    assert!(source.source_path().is_some());
    assert_eq!(source.get("maya", "version"), Some("2023"));
}

#[rstest]
fn test_set_creates_section() {
    let mut source = ConfigSource::new();
    assert!(source.is_empty());

    source.set("maya", "version", "2024");
    assert!(source.has_section("maya"));
    assert_eq!(source.get("maya", "version"), Some("2024"));
}
