// Copyright (c) Contributors to the prodenv project.
// SPDX-License-Identifier: Apache-2.0

//! Path-list splitting with Windows drive-letter awareness.

#[cfg(test)]
#[path = "./paths_test.rs"]
mod paths_test;

/// Sentinel standing in for a drive-letter colon while splitting.
/// A control character, so it cannot occur in real paths.
const DRIVE_SENTINEL: char = '\u{1}';

/// Path-list delimiter convention, chosen once per resolver.
///
/// Splitting itself tolerates a template author mixing both separator styles
/// in one string; the convention records the host's native separator for
/// anything that has to produce a path list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathConvention {
    /// `:`-separated path lists.
    Posix,
    /// `;`-separated path lists.
    Windows,
}

impl PathConvention {
    /// The convention of the running host.
    pub fn host() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Posix
        }
    }

    /// Native path-list separator for this convention.
    pub fn separator(&self) -> char {
        match self {
            Self::Posix => ':',
            Self::Windows => ';',
        }
    }

    /// Split a raw path list into individual paths.
    ///
    /// Semicolons always separate. Colons separate too, except when they
    /// form a Windows drive-letter prefix (a single letter at the start of a
    /// path followed by `:` and a slash), so `"C:\a:D:\b"` yields two paths
    /// with their drive letters intact. Empty fragments are dropped. A colon
    /// embedded mid-filename that is not a drive prefix still separates;
    /// that ambiguity is accepted rather than guessed at.
    ///
    /// This is pure and total: pathological input degrades to a best-effort
    /// single path rather than failing.
    pub fn split(&self, raw: &str) -> Vec<String> {
        if raw.is_empty() {
            return Vec::new();
        }

        let mut paths: Vec<String> = raw
            .split(';')
            .flat_map(split_on_colons)
            .filter(|p| !p.is_empty())
            .collect();

        // Pathological input: fall back to the whole string as one path.
        if paths.is_empty() {
            paths.push(raw.to_string());
        }

        paths
    }
}

fn split_on_colons(piece: &str) -> Vec<String> {
    mask_drive_colons(piece)
        .split(':')
        .map(|fragment| fragment.replace(DRIVE_SENTINEL, ":"))
        .collect()
}

/// Replace every drive-letter colon with the sentinel so that a plain
/// `split(':')` leaves drive prefixes whole.
///
/// A colon is part of a drive prefix when it follows a single ASCII letter
/// at the start of the string or right after a separator, and is itself
/// followed by a slash or backslash.
fn mask_drive_colons(piece: &str) -> String {
    let chars: Vec<char> = piece.chars().collect();
    let mut masked = String::with_capacity(piece.len());

    for (i, &c) in chars.iter().enumerate() {
        let is_drive_colon = c == ':'
            && i >= 1
            && chars[i - 1].is_ascii_alphabetic()
            && (i == 1 || matches!(chars[i - 2], ':' | ';'))
            && matches!(chars.get(i + 1), Some('\\') | Some('/'));

        masked.push(if is_drive_colon { DRIVE_SENTINEL } else { c });
    }

    masked
}
