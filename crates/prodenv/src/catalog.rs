// Copyright (c) Contributors to the prodenv project.
// SPDX-License-Identifier: Apache-2.0

//! Software and pipeline views over a layered configuration store.

use indexmap::IndexMap;

use crate::{LayeredConfigStore, RESERVED_SECTIONS, package};

#[cfg(test)]
#[path = "./catalog_test.rs"]
mod catalog_test;

const VERSION_KEY: &str = "version";
const PACKAGES_KEY: &str = "packages";
const ENVIRONMENT_SECTION: &str = "environment";
const COMMON_SECTION: &str = "common";
const EMPTY_LIST: &str = "[]";

/// Per-software configuration: resolved versions and required packages.
///
/// Every non-reserved section of the underlying store denotes one software
/// product and must define at least a `version` key.
#[derive(Debug, Clone)]
pub struct SoftwareCatalog {
    store: LayeredConfigStore,
}

impl SoftwareCatalog {
    pub fn new(store: LayeredConfigStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &LayeredConfigStore {
        &self.store
    }

    /// Mutable store access, for runtime overrides.
    pub fn store_mut(&mut self) -> &mut LayeredConfigStore {
        &mut self.store
    }

    /// Resolved version for a software.
    pub fn version(&self, software_name: &str) -> crate::Result<String> {
        self.validate_software_exists(software_name)?;

        self.store
            .resolve(software_name, VERSION_KEY, None)
            .map_err(|_| crate::Error::VersionNotConfigured(software_name.to_string()))
    }

    /// Declared required packages for a software.
    ///
    /// A missing `packages` key means no requirements; a malformed value is
    /// logged and degrades to no requirements rather than failing.
    pub fn required_packages(&self, software_name: &str) -> crate::Result<Vec<String>> {
        self.validate_software_exists(software_name)?;

        let raw = self
            .store
            .resolve(software_name, PACKAGES_KEY, Some(EMPTY_LIST))
            .unwrap_or_else(|_| EMPTY_LIST.to_string());
        Ok(decode_packages(&raw, software_name))
    }

    /// All configured software names, in section-enumeration order.
    pub fn configured_software(&self) -> Vec<String> {
        self.store
            .section_names()
            .into_iter()
            .filter(|name| !RESERVED_SECTIONS.contains(&name.as_str()))
            .collect()
    }

    fn validate_software_exists(&self, software_name: &str) -> crate::Result<()> {
        if self.store.has_section(software_name) {
            return Ok(());
        }

        Err(crate::Error::SoftwareNotConfigured {
            name: software_name.to_string(),
            similar: self.similar_names(software_name),
        })
    }

    /// Configured names sharing a prefix with the requested one, for the
    /// "did you mean" suggestion.
    fn similar_names(&self, software_name: &str) -> Vec<String> {
        let prefix: String = software_name.to_lowercase().chars().take(3).collect();
        if prefix.is_empty() {
            return Vec::new();
        }

        self.configured_software()
            .into_iter()
            .filter(|name| name.to_lowercase().starts_with(&prefix))
            .collect()
    }
}

/// Pipeline configuration: shared packages and environment variables.
#[derive(Debug, Clone)]
pub struct PipelineCatalog {
    store: LayeredConfigStore,
}

impl PipelineCatalog {
    pub fn new(store: LayeredConfigStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &LayeredConfigStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut LayeredConfigStore {
        &mut self.store
    }

    /// Packages shared by all software.
    pub fn common_packages(&self) -> Vec<String> {
        let raw = self
            .store
            .resolve(COMMON_SECTION, PACKAGES_KEY, Some(EMPTY_LIST))
            .unwrap_or_else(|_| EMPTY_LIST.to_string());
        decode_packages(&raw, COMMON_SECTION)
    }

    /// Pipeline packages specific to one software; a software the pipeline
    /// does not mention simply has none.
    pub fn software_packages(&self, software_name: &str) -> Vec<String> {
        if !self.store.has_section(software_name) {
            return Vec::new();
        }

        let raw = self
            .store
            .resolve(software_name, PACKAGES_KEY, Some(EMPTY_LIST))
            .unwrap_or_else(|_| EMPTY_LIST.to_string());
        decode_packages(&raw, software_name)
    }

    /// Flat environment-variable mapping from the `[environment]` section.
    pub fn environment_variables(&self) -> IndexMap<String, String> {
        if !self.store.has_section(ENVIRONMENT_SECTION) {
            return IndexMap::new();
        }

        self.store.section_keys(ENVIRONMENT_SECTION)
    }
}

fn decode_packages(raw: &str, context: &str) -> Vec<String> {
    match package::parse_package_list(raw) {
        Ok(packages) => packages,
        Err(err) => {
            tracing::warn!("Error parsing packages for {context}: {err}");
            Vec::new()
        }
    }
}
