// Copyright (c) Contributors to the prodenv project.
// SPDX-License-Identifier: Apache-2.0

//! prodenv - Layered Production Environment Resolver
//!
//! This crate provides the core library for resolving production software
//! environments from layered, section-keyed configuration files.
//!
//! # Overview
//!
//! A "production" (a VFX/animation project) overrides studio-wide defaults
//! to pin the software versions, auxiliary packages, and environment
//! variables it needs. prodenv loads the studio and production configuration
//! sources in order, merges them with deterministic override precedence, and
//! composes the final package list and environment mapping that an external
//! launcher turns into a runnable environment.
//!
//! # Example
//!
//! ```ini
//! # software.ini (production layer, loaded after the studio layer)
//! [maya]
//! version = 2023.3.2
//! packages = ["mtoa-2.3", "golaem-4"]
//!
//! [common]
//! packages = ["vfxCore-2.5"]
//!
//! [environment]
//! STUDIO_ROOT = /s/studio
//! ```

pub mod catalog;
pub mod error;
pub mod launcher;
pub mod package;
pub mod paths;
pub mod resolver;
pub mod shell;
pub mod source;
pub mod store;

pub use catalog::{PipelineCatalog, SoftwareCatalog};
pub use error::{Error, Result};
pub use launcher::{LaunchRequest, build_launcher_command};
pub use package::{PackageListError, family, merge_packages, parse_package_list};
pub use paths::PathConvention;
pub use resolver::{
    ProductionResolver, ResolvedSoftware, ResolverOptions, SoftwareEntry, available_productions,
    default_settings_path,
};
pub use shell::generate_startup_script;
pub use source::ConfigSource;
pub use store::LayeredConfigStore;

/// Well-known filename for the outer settings file.
pub const SETTINGS_FILENAME: &str = "prod-settings.ini";

/// Environment variable overriding the settings file location.
pub const SETTINGS_ENV_VAR: &str = "PROD_SETTINGS";

/// Template token substituted with the production name in configured paths.
pub const PROD_NAME_TOKEN: &str = "{PROD_NAME}";

/// Environment variable naming the active production.
pub const PROD_VAR: &str = "PROD";

/// Section names that never denote a software product.
pub const RESERVED_SECTIONS: [&str; 2] = ["common", "environment"];
