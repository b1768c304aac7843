// Copyright (c) Contributors to the prodenv project.
// SPDX-License-Identifier: Apache-2.0

//! Production resolution: settings lookup, config-path expansion, and the
//! top-level software/package/environment operations.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use crate::paths::PathConvention;
use crate::{
    LayeredConfigStore, PROD_NAME_TOKEN, PROD_VAR, PipelineCatalog, SETTINGS_ENV_VAR,
    SETTINGS_FILENAME, SoftwareCatalog, package,
};

#[cfg(test)]
#[path = "./resolver_test.rs"]
mod resolver_test;

const ENVIRONMENT_SECTION: &str = "environment";
const SOFTWARE_CONFIG_KEY: &str = "SOFTWARE_CONFIG";
const PIPELINE_CONFIG_KEY: &str = "PIPELINE_CONFIG";

/// A configured software and its resolved version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoftwareEntry {
    pub name: String,
    pub version: String,
}

/// The data handed to the launcher for one software: resolved version and
/// final package list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSoftware {
    pub version: String,
    pub packages: Vec<String>,
}

/// Options controlling resolver construction.
#[derive(Debug, Clone)]
pub struct ResolverOptions {
    /// Explicit settings file location; defaults to [`default_settings_path`].
    pub settings_path: Option<PathBuf>,

    /// Path-list delimiter convention; defaults to the host's.
    pub convention: PathConvention,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            settings_path: None,
            convention: PathConvention::host(),
        }
    }
}

/// Resolver for one named production.
///
/// Construction is atomic: it loads the settings file, expands and splits
/// the configured search paths, and loads every reachable software and
/// pipeline source, or fails entirely. A missing search-path entry is
/// skipped with a warning; a production is expected to function with
/// partial config coverage. Instances are cheap to discard and recreate and
/// share no state with each other.
#[derive(Debug, Clone)]
pub struct ProductionResolver {
    prod_name: String,
    convention: PathConvention,
    software: SoftwareCatalog,
    pipeline: PipelineCatalog,
}

impl ProductionResolver {
    /// Resolve a production using default options.
    pub fn new(prod_name: &str) -> crate::Result<Self> {
        Self::with_options(prod_name, ResolverOptions::default())
    }

    /// Resolve a production with explicit settings location or convention.
    pub fn with_options(prod_name: &str, options: ResolverOptions) -> crate::Result<Self> {
        let settings_path = match options.settings_path {
            Some(path) => path,
            None => default_settings_path()?,
        };

        let paths = load_config_paths(prod_name, &settings_path, options.convention)?;

        let software = SoftwareCatalog::new(load_layers(&paths.software));
        let pipeline = PipelineCatalog::new(load_layers(&paths.pipeline));

        Ok(Self {
            prod_name: prod_name.to_string(),
            convention: options.convention,
            software,
            pipeline,
        })
    }

    pub fn prod_name(&self) -> &str {
        &self.prod_name
    }

    pub fn convention(&self) -> PathConvention {
        self.convention
    }

    pub fn software(&self) -> &SoftwareCatalog {
        &self.software
    }

    pub fn pipeline(&self) -> &PipelineCatalog {
        &self.pipeline
    }

    /// Configured software with resolved versions.
    ///
    /// A software section whose version cannot be resolved is omitted, not
    /// an error; direct lookups still report it.
    pub fn list_software(&self) -> Vec<SoftwareEntry> {
        self.software
            .configured_software()
            .into_iter()
            .filter_map(|name| {
                let version = self.software.version(&name).ok()?;
                Some(SoftwareEntry { name, version })
            })
            .collect()
    }

    /// Compose the final package list for running a software.
    ///
    /// The base list is common pipeline packages, then pipeline packages
    /// specific to the software, then the software's own required packages,
    /// in that fixed order. Caller-supplied extras replace base packages of
    /// the same family and are appended last; no extras leaves the base
    /// list untouched.
    pub fn compose_packages(
        &self,
        software_name: &str,
        extra_packages: &[String],
    ) -> crate::Result<ResolvedSoftware> {
        let version = self.software.version(software_name)?;

        let mut packages = self.pipeline.common_packages();
        packages.extend(self.pipeline.software_packages(software_name));
        packages.extend(self.software.required_packages(software_name)?);

        if !extra_packages.is_empty() {
            packages = package::merge_packages(&packages, extra_packages);
        }

        Ok(ResolvedSoftware { version, packages })
    }

    /// Environment variables for this production.
    ///
    /// Guarantees a `PROD` entry equal to the production name, inserted only
    /// when the configuration does not set one explicitly.
    pub fn environment_variables(&self) -> IndexMap<String, String> {
        let mut variables = self.pipeline.environment_variables();
        if !variables.contains_key(PROD_VAR) {
            variables.insert(PROD_VAR.to_string(), self.prod_name.clone());
        }
        variables
    }
}

/// Default settings file location: the `PROD_SETTINGS` environment variable
/// when set, else `prodenv/prod-settings.ini` under the user config
/// directory.
pub fn default_settings_path() -> crate::Result<PathBuf> {
    if let Ok(path) = std::env::var(SETTINGS_ENV_VAR) {
        return Ok(PathBuf::from(path));
    }

    dirs::config_dir()
        .map(|dir| dir.join("prodenv").join(SETTINGS_FILENAME))
        .ok_or(crate::Error::NoSettingsLocation)
}

/// Names of productions with a config directory under `prods/` beside the
/// settings file.
pub fn available_productions(settings_path: &Path) -> Vec<String> {
    let prods_dir = match settings_path.parent() {
        Some(parent) => parent.join("prods"),
        None => return Vec::new(),
    };

    let Ok(entries) = std::fs::read_dir(&prods_dir) else {
        tracing::debug!(path = %prods_dir.display(), "No productions directory");
        return Vec::new();
    };

    let mut names: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_dir())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .collect();
    names.sort();
    names
}

struct ConfigPaths {
    software: Vec<PathBuf>,
    pipeline: Vec<PathBuf>,
}

fn load_config_paths(
    prod_name: &str,
    settings_path: &Path,
    convention: PathConvention,
) -> crate::Result<ConfigPaths> {
    if !settings_path.exists() {
        return Err(crate::Error::SettingsNotFound(settings_path.to_path_buf()));
    }
    let settings_path = dunce::canonicalize(settings_path)
        .unwrap_or_else(|_| settings_path.to_path_buf());

    let mut settings = LayeredConfigStore::new();
    settings.load(&settings_path)?;

    if !settings.has_section(ENVIRONMENT_SECTION) {
        return Err(crate::Error::SettingsSectionMissing(settings_path));
    }

    let software_raw = settings
        .resolve(ENVIRONMENT_SECTION, SOFTWARE_CONFIG_KEY, Some(""))
        .unwrap_or_default();
    let pipeline_raw = settings
        .resolve(ENVIRONMENT_SECTION, PIPELINE_CONFIG_KEY, Some(""))
        .unwrap_or_default();

    if software_raw.is_empty() {
        return Err(crate::Error::SettingsKeyMissing {
            path: settings_path,
            key: SOFTWARE_CONFIG_KEY.to_string(),
        });
    }
    if pipeline_raw.is_empty() {
        return Err(crate::Error::SettingsKeyMissing {
            path: settings_path,
            key: PIPELINE_CONFIG_KEY.to_string(),
        });
    }

    Ok(ConfigPaths {
        software: expand_paths(&software_raw, prod_name, convention),
        pipeline: expand_paths(&pipeline_raw, prod_name, convention),
    })
}

/// Substitute the production name, split the path list, and expand
/// environment variables in each entry. Undefined variables are left
/// intact rather than failing.
fn expand_paths(raw: &str, prod_name: &str, convention: PathConvention) -> Vec<PathBuf> {
    let substituted = raw.replace(PROD_NAME_TOKEN, prod_name);

    convention
        .split(&substituted)
        .into_iter()
        .map(|path| {
            let expanded =
                shellexpand::env_with_context_no_errors(&path, |var| std::env::var(var).ok());
            PathBuf::from(expanded.into_owned())
        })
        .collect()
}

/// Load every existing path into a fresh store, in order. Missing or
/// unreadable sources are skipped with a warning so partial coverage still
/// resolves.
fn load_layers(paths: &[PathBuf]) -> LayeredConfigStore {
    let mut store = LayeredConfigStore::new();

    for path in paths {
        if !path.exists() {
            tracing::warn!(path = %path.display(), "Config file not found");
            continue;
        }

        match store.load(path) {
            Ok(()) => tracing::debug!(path = %path.display(), "Loaded config"),
            Err(err) => tracing::warn!(path = %path.display(), "Error reading config file: {err}"),
        }
    }

    store
}
