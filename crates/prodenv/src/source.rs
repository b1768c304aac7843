// Copyright (c) Contributors to the prodenv project.
// SPDX-License-Identifier: Apache-2.0

//! Parsing and data types for section-keyed configuration sources.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;

#[cfg(test)]
#[path = "./source_test.rs"]
mod source_test;

/// A single configuration source: an ordered set of named sections, each
/// holding string key/value pairs.
///
/// Sources are parsed once and treated as read-only layers afterwards; the
/// only mutable use is the override layer owned by
/// [`crate::LayeredConfigStore`]. Section and key names are case sensitive.
#[derive(Debug, Clone, Default)]
pub struct ConfigSource {
    sections: IndexMap<String, IndexMap<String, String>>,
    source_path: Option<PathBuf>,
}

impl ConfigSource {
    /// Create an empty source (used as the override layer).
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a source from text.
    ///
    /// Accepts `[section]` headers, `key = value` lines, blank lines, and
    /// comments starting with `#` or `;`. Anything else, including key/value
    /// pairs before the first header, is a syntax error. A duplicate key
    /// within one section keeps the last value.
    pub fn parse(text: &str) -> crate::Result<Self> {
        Self::parse_named(text, "<string>")
    }

    /// Load a source from a file path.
    pub fn load<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(crate::Error::SourceNotFound(path.to_path_buf()));
        }

        let text = std::fs::read_to_string(path).map_err(|e| crate::Error::ReadFailed {
            path: path.to_path_buf(),
            error: e,
        })?;

        let mut source = Self::parse_named(&text, &path.display().to_string())?;
        source.source_path = Some(path.to_path_buf());
        Ok(source)
    }

    fn parse_named(text: &str, origin: &str) -> crate::Result<Self> {
        let mut sections: IndexMap<String, IndexMap<String, String>> = IndexMap::new();
        let mut current: Option<String> = None;

        for (index, raw_line) in text.lines().enumerate() {
            let line = raw_line.trim();

            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }

            if let Some(name) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
                let name = name.trim();
                if name.is_empty() {
                    return Err(syntax_error(origin, index, raw_line));
                }
                sections.entry(name.to_string()).or_default();
                current = Some(name.to_string());
                continue;
            }

            if let Some((key, value)) = line.split_once('=') {
                let key = key.trim();
                if key.is_empty() {
                    return Err(syntax_error(origin, index, raw_line));
                }
                let Some(section) = &current else {
                    return Err(syntax_error(origin, index, raw_line));
                };
                sections
                    .entry(section.clone())
                    .or_default()
                    .insert(key.to_string(), value.trim().to_string());
                continue;
            }

            return Err(syntax_error(origin, index, raw_line));
        }

        Ok(Self {
            sections,
            source_path: None,
        })
    }

    /// Path this source was loaded from, if any.
    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    /// Look up a value.
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .get(section)
            .and_then(|s| s.get(key))
            .map(String::as_str)
    }

    /// Check whether a section is defined, even if empty.
    pub fn has_section(&self, section: &str) -> bool {
        self.sections.contains_key(section)
    }

    /// All key/value pairs of a section, in insertion order.
    pub fn section(&self, section: &str) -> Option<&IndexMap<String, String>> {
        self.sections.get(section)
    }

    /// Section names in definition order.
    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    /// Write a value, creating the section if absent.
    ///
    /// Only the override layer is ever mutated this way; loaded base layers
    /// stay untouched after parse.
    pub fn set(&mut self, section: &str, key: &str, value: &str) {
        self.sections
            .entry(section.to_string())
            .or_default()
            .insert(key.to_string(), value.to_string());
    }

    /// True when no sections are defined.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

fn syntax_error(origin: &str, index: usize, raw_line: &str) -> crate::Error {
    crate::Error::InvalidSyntax {
        path: origin.to_string(),
        line: index + 1,
        content: raw_line.trim().to_string(),
    }
}
