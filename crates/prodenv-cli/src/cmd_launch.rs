// Copyright (c) Contributors to the prodenv project.
// SPDX-License-Identifier: Apache-2.0

//! Implementation of the `prod launch` command.

use std::path::PathBuf;
use std::process::Stdio;

use clap::Args;
use miette::Result;
use prodenv::{LaunchRequest, ProductionResolver, ResolverOptions, build_launcher_command};

/// Launch software from a production
#[derive(Debug, Args)]
pub struct CmdLaunch {
    /// Software to launch
    software: String,

    /// Production to launch from; defaults to the active one
    #[clap(short = 'p', long = "prod", env = "PROD")]
    production: String,

    /// Additional packages to include, overriding base packages
    #[clap(long = "packages", num_args = 1..)]
    packages: Vec<String>,

    /// Enter the environment only, without launching the software
    #[clap(long)]
    env_only: bool,

    /// Run the software in the background
    #[clap(long)]
    background: bool,

    /// Print the launcher command without executing
    #[clap(long)]
    dry_run: bool,

    /// Path to the prod settings file
    #[clap(long, env = "PROD_SETTINGS")]
    settings: Option<PathBuf>,
}

impl CmdLaunch {
    pub fn run(&mut self) -> Result<i32> {
        let resolver = ProductionResolver::with_options(
            &self.production,
            ResolverOptions {
                settings_path: self.settings.clone(),
                ..ResolverOptions::default()
            },
        )?;

        let resolved = resolver.compose_packages(&self.software, &self.packages)?;

        let request = LaunchRequest {
            software: self.software.clone(),
            version: resolved.version,
            packages: resolved.packages,
            env_only: self.env_only,
            verbose: tracing::enabled!(tracing::Level::DEBUG),
        };
        let command = build_launcher_command(&request);

        tracing::info!("Executing launcher command: {}", command.join(" "));

        if self.dry_run {
            println!("{}", command.join(" "));
            return Ok(0);
        }

        let variables = resolver.environment_variables();

        let mut parts = command.into_iter();
        let program = parts.next().unwrap_or_else(|| "rez".to_string());
        let mut child = std::process::Command::new(program);
        child.args(parts).envs(&variables);

        if self.background {
            child
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .spawn()
                .map_err(|e| launch_error(&self.software, e))?;
            return Ok(0);
        }

        let status = child.status().map_err(|e| launch_error(&self.software, e))?;

        if !status.success() {
            tracing::error!(
                "Failed to execute {}: launcher exited with {status}",
                self.software
            );
        }

        Ok(status.code().unwrap_or(1))
    }
}

fn launch_error(software: &str, error: std::io::Error) -> miette::Report {
    miette::miette!(
        help = "Make sure the rez launcher is installed and on PATH",
        "Failed to execute {software}: {error}"
    )
}
