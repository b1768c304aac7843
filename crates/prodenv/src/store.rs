// Copyright (c) Contributors to the prodenv project.
// SPDX-License-Identifier: Apache-2.0

//! Layered lookup over loaded configuration sources plus runtime overrides.

use std::path::Path;

use indexmap::IndexMap;

use crate::ConfigSource;

#[cfg(test)]
#[path = "./store_test.rs"]
mod store_test;

/// An ordered stack of configuration layers with a mutable override layer.
///
/// Base layers are applied in load order: a key defined by a later-loaded
/// layer shadows the same key from an earlier one. The override layer always
/// wins over every base layer and can be mutated at runtime without touching
/// loaded sources. Resolution order is therefore:
///
/// override > most recent base layer > ... > first base layer > default
#[derive(Debug, Clone, Default)]
pub struct LayeredConfigStore {
    layers: Vec<ConfigSource>,
    overrides: ConfigSource,
}

impl LayeredConfigStore {
    /// Create a store with no layers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a file and append it as the highest-priority base layer.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> crate::Result<()> {
        let source = ConfigSource::load(path)?;
        self.layers.push(source);
        Ok(())
    }

    /// Append an already-parsed source as the highest-priority base layer.
    pub fn load_source(&mut self, source: ConfigSource) {
        self.layers.push(source);
    }

    /// Number of loaded base layers.
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Write a value into the override layer, creating the section if absent.
    pub fn set_override(&mut self, section: &str, key: &str, value: &str) {
        self.overrides.set(section, key, value);
    }

    /// Reset the override layer; base layers are untouched.
    pub fn clear_overrides(&mut self) {
        self.overrides = ConfigSource::new();
    }

    /// Resolve a key, consulting the override layer first, then base layers
    /// from most to least recently loaded, then the default.
    pub fn resolve(&self, section: &str, key: &str, default: Option<&str>) -> crate::Result<String> {
        if let Some(value) = self.overrides.get(section, key) {
            return Ok(value.to_string());
        }

        for layer in self.layers.iter().rev() {
            if let Some(value) = layer.get(section, key) {
                return Ok(value.to_string());
            }
        }

        if let Some(value) = default {
            return Ok(value.to_string());
        }

        Err(crate::Error::KeyNotFound {
            section: section.to_string(),
            key: key.to_string(),
        })
    }

    /// True when any layer, base or override, defines the section.
    pub fn has_section(&self, section: &str) -> bool {
        self.overrides.has_section(section) || self.layers.iter().any(|l| l.has_section(section))
    }

    /// Union of all layers' key/value pairs for a section.
    ///
    /// Base layers are merged key-for-key in load order, later layers
    /// winning; override layer values win overall.
    pub fn section_keys(&self, section: &str) -> IndexMap<String, String> {
        let mut merged = IndexMap::new();

        for layer in &self.layers {
            if let Some(pairs) = layer.section(section) {
                for (key, value) in pairs {
                    merged.insert(key.clone(), value.clone());
                }
            }
        }

        if let Some(pairs) = self.overrides.section(section) {
            for (key, value) in pairs {
                merged.insert(key.clone(), value.clone());
            }
        }

        merged
    }

    /// Union of section names across all layers, in first-seen order.
    pub fn section_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();

        for layer in self.layers.iter().chain(std::iter::once(&self.overrides)) {
            for name in layer.section_names() {
                if !names.iter().any(|n| n == name) {
                    names.push(name.to_string());
                }
            }
        }

        names
    }
}
