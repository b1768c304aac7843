// Copyright (c) Contributors to the prodenv project.
// SPDX-License-Identifier: Apache-2.0

use rstest::rstest;

use super::*;

fn pkgs(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[rstest]
#[case("mtoa-2.3", "mtoa")]
#[case("golaem-4", "golaem")]
#[case("vfxCore-2.5-beta", "vfxCore")]
#[case("ofxSuperResolution", "ofxSuperResolution")]
fn test_family(#[case] package: &str, #[case] expected: &str) {
    assert_eq!(family(package), expected);
}

#[rstest]
fn test_parse_quoted_list() {
    let packages =
        parse_package_list(r#"["mtoa-2.3", "golaem-4"]"#).expect("Should parse");
    assert_eq!(packages, pkgs(&["mtoa-2.3", "golaem-4"]));
}

#[rstest]
fn test_parse_single_quotes_and_bare_identifiers() {
    let packages =
        parse_package_list("['mtoa-2.3', golaem-4, neatVideo]").expect("Should parse");
    assert_eq!(packages, pkgs(&["mtoa-2.3", "golaem-4", "neatVideo"]));
}

#[rstest]
fn test_parse_empty_list() {
    assert!(parse_package_list("[]").expect("Should parse").is_empty());
    assert!(parse_package_list("  [ ] ").expect("Should parse").is_empty());
}

#[rstest]
fn test_parse_trailing_comma() {
    let packages = parse_package_list(r#"["mtoa-2.3",]"#).expect("Should parse");
    assert_eq!(packages, pkgs(&["mtoa-2.3"]));
}

#[rstest]
#[case::no_brackets("mtoa-2.3")]
#[case::unterminated_quote(r#"["mtoa-2.3]"#)]
#[case::missing_comma(r#"["mtoa-2.3" "golaem-4"]"#)]
#[case::empty_identifier(r#"["", "golaem-4"]"#)]
#[case::expression_not_list("[1 + 2]")]
#[case::nested_list(r#"[["mtoa-2.3"]]"#)]
fn test_parse_rejects_malformed(#[case] raw: &str) {
    assert!(parse_package_list(raw).is_err());
}

#[rstest]
fn test_merge_replaces_matching_family() {
    let base = pkgs(&["vfxCore-2.5", "mtoa-2.2", "golaem-4"]);
    let overrides = pkgs(&["mtoa-2.3"]);

    let merged = merge_packages(&base, &overrides);
    assert_eq!(merged, pkgs(&["vfxCore-2.5", "golaem-4", "mtoa-2.3"]));
}

#[rstest]
fn test_merge_each_override_family_independent() {
    let base = pkgs(&["vfxCore-2.5", "mtoa-2.2", "golaem-4"]);
    let overrides = pkgs(&["mtoa-2.3", "golaem-5"]);

    let merged = merge_packages(&base, &overrides);
    assert_eq!(merged, pkgs(&["vfxCore-2.5", "mtoa-2.3", "golaem-5"]));
}

#[rstest]
fn test_merge_appends_new_families() {
    let base = pkgs(&["vfxCore-2.5"]);
    let overrides = pkgs(&["yeti-4.1"]);

    let merged = merge_packages(&base, &overrides);
    assert_eq!(merged, pkgs(&["vfxCore-2.5", "yeti-4.1"]));
}

#[rstest]
fn test_merge_empty_overrides_is_noop() {
    let base = pkgs(&["vfxCore-2.5", "mtoa-2.2"]);
    assert_eq!(merge_packages(&base, &[]), base);

    let empty: Vec<String> = Vec::new();
    assert!(merge_packages(&empty, &[]).is_empty());
}

#[rstest]
fn test_merge_preserves_survivor_order() {
    let base = pkgs(&["a-1", "b-1", "c-1", "d-1"]);
    let overrides = pkgs(&["b-2"]);

    let merged = merge_packages(&base, &overrides);
    assert_eq!(merged, pkgs(&["a-1", "c-1", "d-1", "b-2"]));
}
