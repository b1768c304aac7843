// Copyright (c) Contributors to the prodenv project.
// SPDX-License-Identifier: Apache-2.0

//! Implementation of the `prod enter` command.

use std::path::PathBuf;

use clap::Args;
use indexmap::IndexMap;
use miette::Result;
use prodenv::{ProductionResolver, ResolverOptions, generate_startup_script};

/// Enter a production environment in a subshell
#[derive(Debug, Args)]
pub struct CmdEnter {
    /// Production name
    production: String,

    /// Path to the prod settings file
    #[clap(long, env = "PROD_SETTINGS")]
    settings: Option<PathBuf>,

    /// Print the startup script without entering
    #[clap(long)]
    dry_run: bool,
}

impl CmdEnter {
    pub fn run(&mut self) -> Result<i32> {
        let resolver = ProductionResolver::with_options(
            &self.production,
            ResolverOptions {
                settings_path: self.settings.clone(),
                ..ResolverOptions::default()
            },
        )?;

        let variables = resolver.environment_variables();
        let software = resolver.list_software();
        let script = generate_startup_script(resolver.prod_name(), &variables, &software);

        if self.dry_run {
            print!("{script}");
            return Ok(0);
        }

        tracing::info!("Entering production environment '{}'", self.production);
        let code = spawn_subshell(&script, &variables)?;
        tracing::debug!("Exited production environment '{}'", self.production);

        Ok(code)
    }
}

#[cfg(not(windows))]
fn spawn_subshell(script: &str, variables: &IndexMap<String, String>) -> Result<i32> {
    let tmp_dir = tempfile::TempDir::new()
        .map_err(|e| miette::miette!("Failed to create script directory: {e}"))?;
    let script_path = tmp_dir.path().join("prodenv-startup.sh");
    std::fs::write(&script_path, script)
        .map_err(|e| miette::miette!("Failed to write startup script: {e}"))?;

    // The startup script and --rcfile are bash constructs; an interactive
    // $SHELL such as zsh or fish would reject them.
    let status = std::process::Command::new("bash")
        .arg("--rcfile")
        .arg(&script_path)
        .envs(variables)
        .status()
        .map_err(|e| miette::miette!("Failed to start subshell: {e}"))?;

    Ok(status.code().unwrap_or(1))
}

#[cfg(windows)]
fn spawn_subshell(_script: &str, variables: &IndexMap<String, String>) -> Result<i32> {
    // No rcfile mechanism on cmd.exe; apply the environment directly.
    let shell = std::env::var("COMSPEC").unwrap_or_else(|_| "cmd.exe".to_string());

    let status = std::process::Command::new(shell)
        .envs(variables)
        .status()
        .map_err(|e| miette::miette!("Failed to start subshell: {e}"))?;

    Ok(status.code().unwrap_or(1))
}
