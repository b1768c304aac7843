// Copyright (c) Contributors to the prodenv project.
// SPDX-License-Identifier: Apache-2.0

//! Launcher command construction.
//!
//! The external rez-style launcher owns environment materialization and
//! process execution; this module only builds the argv handed to it.

#[cfg(test)]
#[path = "./launcher_test.rs"]
mod launcher_test;

/// Everything the launcher needs to run one software.
#[derive(Debug, Clone, Default)]
pub struct LaunchRequest {
    /// Software name; doubles as the command run inside the environment.
    pub software: String,

    /// Resolved software version.
    pub version: String,

    /// Final composed package list.
    pub packages: Vec<String>,

    /// Enter the environment without running the software.
    pub env_only: bool,

    /// Pass verbosity through to the launcher.
    pub verbose: bool,
}

/// Build the launcher argv: `rez [-v] env <software>-<version> <packages...>
/// [-- <software>]`.
///
/// The main software package goes first so its version pin anchors the
/// environment; `env_only` omits the trailing command, leaving the launcher
/// in interactive mode.
pub fn build_launcher_command(request: &LaunchRequest) -> Vec<String> {
    let mut command = vec!["rez".to_string()];

    if request.verbose {
        command.push("-v".to_string());
    }

    command.push("env".to_string());
    command.push(format!("{}-{}", request.software, request.version));
    command.extend(request.packages.iter().cloned());

    if !request.env_only {
        command.push("--".to_string());
        command.push(request.software.clone());
    }

    command
}
