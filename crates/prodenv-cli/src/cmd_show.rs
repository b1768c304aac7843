// Copyright (c) Contributors to the prodenv project.
// SPDX-License-Identifier: Apache-2.0

//! Implementation of the `prod show` command.

use std::path::PathBuf;

use clap::Args;
use colored::Colorize;
use miette::Result;
use prodenv::{ProductionResolver, ResolverOptions};

/// Display a production's software and environment
#[derive(Debug, Args)]
pub struct CmdShow {
    /// Production name
    production: String,

    /// Path to the prod settings file
    #[clap(long, env = "PROD_SETTINGS")]
    settings: Option<PathBuf>,

    /// Show configured software only
    #[clap(long)]
    software: bool,

    /// Show environment variables only
    #[clap(long)]
    env: bool,
}

impl CmdShow {
    pub fn run(&mut self) -> Result<i32> {
        let resolver = ProductionResolver::with_options(
            &self.production,
            ResolverOptions {
                settings_path: self.settings.clone(),
                ..ResolverOptions::default()
            },
        )?;

        let show_software = self.software || !self.env;
        let show_env = self.env || !self.software;

        if show_software {
            self.show_software(&resolver);
        }
        if show_software && show_env {
            println!();
        }
        if show_env {
            self.show_environment(&resolver);
        }

        Ok(0)
    }

    fn show_software(&self, resolver: &ProductionResolver) {
        println!("{}", "Configured Software:".bold());
        println!();

        let software = resolver.list_software();
        if software.is_empty() {
            println!("  {}", "(no software configured)".dimmed());
        } else {
            for entry in &software {
                println!(
                    "  {} (version {})",
                    entry.name.cyan(),
                    entry.version.green()
                );
            }
        }

        println!();
        println!("Total: {} software", software.len());
    }

    fn show_environment(&self, resolver: &ProductionResolver) {
        println!("{}", "Environment Variables:".bold());
        println!();

        for (key, value) in resolver.environment_variables() {
            println!("  {} = {}", key.cyan(), value.green());
        }
    }
}
