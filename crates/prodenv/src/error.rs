// Copyright (c) Contributors to the prodenv project.
// SPDX-License-Identifier: Apache-2.0

//! Error types for prodenv operations.

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Convenience Result type with prodenv Error.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during prodenv operations.
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    /// Settings file not found at the resolved location
    #[error("Prod settings file not found: {0:?}")]
    #[diagnostic(
        code(prodenv::settings_not_found),
        help("Create the settings file or point PROD_SETTINGS at an existing one")
    )]
    SettingsNotFound(PathBuf),

    /// Settings file has no [environment] section
    #[error("Missing 'environment' section in prod settings file {0:?}")]
    #[diagnostic(code(prodenv::settings_invalid))]
    SettingsSectionMissing(PathBuf),

    /// Settings file is missing a required key
    #[error("Missing '{key}' in prod settings file {path:?}")]
    #[diagnostic(
        code(prodenv::settings_key_missing),
        help("Add '{key}' under the [environment] section of the settings file")
    )]
    SettingsKeyMissing { path: PathBuf, key: String },

    /// No user configuration directory available to locate settings
    #[error("Cannot determine a settings location on this system")]
    #[diagnostic(
        code(prodenv::no_settings_location),
        help("Set the PROD_SETTINGS environment variable to the settings file path")
    )]
    NoSettingsLocation,

    /// Configuration source not found at the given path
    #[error("Configuration file not found: {0:?}")]
    #[diagnostic(code(prodenv::source_not_found))]
    SourceNotFound(PathBuf),

    /// Failed to read a configuration source
    #[error("Failed to read configuration file: {path:?}")]
    #[diagnostic(code(prodenv::read_failed))]
    ReadFailed {
        path: PathBuf,
        #[source]
        error: std::io::Error,
    },

    /// Syntax error in a configuration source
    #[error("Invalid configuration line {line} in {path}: {content:?}")]
    #[diagnostic(
        code(prodenv::invalid_syntax),
        help("Expected a [section] header, a key = value pair, or a comment")
    )]
    InvalidSyntax {
        path: String,
        line: usize,
        content: String,
    },

    /// Lookup failed with no default and no override
    #[error("Configuration key not found: {section}.{key}")]
    #[diagnostic(code(prodenv::key_not_found))]
    KeyNotFound { section: String, key: String },

    /// Requested software has no configuration section
    #[error("Software '{name}' is not configured")]
    #[diagnostic(
        code(prodenv::software_not_configured),
        help("{}", suggestion_message(similar))
    )]
    SoftwareNotConfigured {
        name: String,
        similar: Vec<String>,
    },

    /// Software section exists but carries no version
    #[error("Version for software '{0}' is not configured")]
    #[diagnostic(
        code(prodenv::version_not_configured),
        help("Add a 'version' key to the software's configuration section")
    )]
    VersionNotConfigured(String),

    /// IO error passthrough
    #[error(transparent)]
    #[diagnostic(code(prodenv::io_error))]
    Io(#[from] std::io::Error),
}

fn suggestion_message(similar: &[String]) -> String {
    if similar.is_empty() {
        "Run 'prod show <production>' to list the configured software".to_string()
    } else {
        format!("Did you mean one of: {}?", similar.join(", "))
    }
}
