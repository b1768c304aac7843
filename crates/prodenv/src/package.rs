// Copyright (c) Contributors to the prodenv project.
// SPDX-License-Identifier: Apache-2.0

//! Package identifiers, list-literal decoding, and family-based merging.

use thiserror::Error;

#[cfg(test)]
#[path = "./package_test.rs"]
mod package_test;

/// A `packages` value that does not decode as a list literal.
///
/// Decode failures are recoverable by policy: the catalogs log a warning and
/// substitute an empty list, so this error never crosses the public API.
#[derive(Debug, Error)]
#[error("invalid package list: {0}")]
pub struct PackageListError(String);

/// Family of a package identifier: the substring before the first hyphen,
/// or the whole identifier when there is none.
///
/// `"mtoa-2.3"` and `"mtoa-2.2"` share the family `"mtoa"`; the family, not
/// the full string, is the unit of override comparison.
pub fn family(package: &str) -> &str {
    package.split('-').next().unwrap_or(package)
}

/// Decode a list literal of package identifiers.
///
/// The accepted grammar is deliberately small: `[` and `]` around a
/// comma-separated sequence of identifiers, each either bare
/// (`[A-Za-z0-9._+-]`) or single/double-quoted, with a trailing comma
/// tolerated. Nothing richer than that is a package list.
pub fn parse_package_list(raw: &str) -> std::result::Result<Vec<String>, PackageListError> {
    let inner = raw
        .trim()
        .strip_prefix('[')
        .and_then(|r| r.strip_suffix(']'))
        .ok_or_else(|| PackageListError(format!("expected a [...] list, got {raw:?}")))?;

    let mut packages = Vec::new();
    let mut rest = inner.trim_start();

    while !rest.is_empty() {
        let (package, remainder) = take_identifier(rest)?;
        packages.push(package);

        rest = remainder.trim_start();
        if rest.is_empty() {
            break;
        }
        rest = rest
            .strip_prefix(',')
            .ok_or_else(|| PackageListError(format!("expected ',' before {rest:?}")))?
            .trim_start();
    }

    Ok(packages)
}

fn take_identifier(input: &str) -> std::result::Result<(String, &str), PackageListError> {
    match input.chars().next() {
        Some(quote @ ('"' | '\'')) => {
            let rest = &input[1..];
            let end = rest
                .find(quote)
                .ok_or_else(|| PackageListError(format!("unterminated quote in {input:?}")))?;
            let package = &rest[..end];
            if package.is_empty() {
                return Err(PackageListError("empty package identifier".to_string()));
            }
            Ok((package.to_string(), &rest[end + 1..]))
        }
        Some(_) => {
            let end = input
                .find(|c: char| c == ',' || c.is_whitespace())
                .unwrap_or(input.len());
            let package = &input[..end];
            if !package.chars().all(is_identifier_char) {
                return Err(PackageListError(format!(
                    "invalid package identifier {package:?}"
                )));
            }
            Ok((package.to_string(), &input[end..]))
        }
        None => Err(PackageListError("expected a package identifier".to_string())),
    }
}

fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '+')
}

/// Merge a base package list with an override list.
///
/// Each override identifier replaces every base identifier sharing its
/// family; surviving base identifiers keep their relative order and the
/// overrides are appended last, in the given order. An empty override list
/// returns the base unchanged.
pub fn merge_packages(base: &[String], overrides: &[String]) -> Vec<String> {
    if overrides.is_empty() {
        return base.to_vec();
    }

    let override_families: Vec<&str> = overrides.iter().map(|p| family(p)).collect();

    let mut merged: Vec<String> = base
        .iter()
        .filter(|p| !override_families.contains(&family(p)))
        .cloned()
        .collect();
    merged.extend(overrides.iter().cloned());
    merged
}
