// Copyright (c) Contributors to the prodenv project.
// SPDX-License-Identifier: Apache-2.0

use rstest::rstest;

use super::*;

#[rstest]
fn test_host_convention_matches_platform() {
    let convention = PathConvention::host();
    if cfg!(windows) {
        assert_eq!(convention, PathConvention::Windows);
        assert_eq!(convention.separator(), ';');
    } else {
        assert_eq!(convention, PathConvention::Posix);
        assert_eq!(convention.separator(), ':');
    }
}

#[rstest]
#[case::empty("", &[])]
#[case::single("single", &["single"])]
#[case::unix_pair("/unix/a:/unix/b", &["/unix/a", "/unix/b"])]
#[case::drive_letters(r"C:\a\b:D:\c\d", &[r"C:\a\b", r"D:\c\d"])]
#[case::drive_forward_slash("C:/a:D:/b", &["C:/a", "D:/b"])]
#[case::mixed_unix_and_drive(r"/unix:C:\win", &["/unix", r"C:\win"])]
#[case::empty_fragments_dropped("/a::/b:", &["/a", "/b"])]
fn test_split_posix(#[case] raw: &str, #[case] expected: &[&str]) {
    assert_eq!(PathConvention::Posix.split(raw), expected);
}

#[rstest]
#[case::semicolons(r"C:\a;D:\b", &[r"C:\a", r"D:\b"])]
#[case::drive_colons(r"C:\a:D:\b", &[r"C:\a", r"D:\b"])]
#[case::mixed_separators(r"C:\a;/unix/b:D:\c", &[r"C:\a", "/unix/b", r"D:\c"])]
fn test_split_windows(#[case] raw: &str, #[case] expected: &[&str]) {
    assert_eq!(PathConvention::Windows.split(raw), expected);
}

#[rstest]
fn test_split_identical_across_conventions() {
    // Splitting tolerates both separator styles regardless of convention,
    // so either convention resolves the same template correctly.
    let raw = r"/s/studio/config;C:\shows\config:/p/show/config";
    assert_eq!(
        PathConvention::Posix.split(raw),
        PathConvention::Windows.split(raw)
    );
}

#[rstest]
fn test_mid_filename_colon_is_a_separator() {
    // Accepted ambiguity: a colon that is not a drive prefix separates.
    assert_eq!(
        PathConvention::Posix.split("file:with:colons"),
        vec!["file", "with", "colons"]
    );
}

#[rstest]
fn test_drive_letter_after_separator_only() {
    // A letter mid-path followed by a colon and slash is not a drive prefix.
    assert_eq!(
        PathConvention::Posix.split("/unix/a:/unix/b"),
        vec!["/unix/a", "/unix/b"]
    );
}

#[rstest]
fn test_pathological_input_degrades_to_single_path() {
    // Nothing but separators around one drive-letter path.
    assert_eq!(PathConvention::Posix.split(r";C:\only;"), vec![r"C:\only"]);
    // Only separators: best-effort single path instead of nothing.
    assert_eq!(PathConvention::Posix.split(":;:"), vec![":;:"]);
}
