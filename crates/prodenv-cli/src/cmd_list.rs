// Copyright (c) Contributors to the prodenv project.
// SPDX-License-Identifier: Apache-2.0

//! Implementation of the `prod list` command.

use std::path::PathBuf;

use clap::Args;
use colored::Colorize;
use miette::Result;

/// List available productions
#[derive(Debug, Args)]
pub struct CmdList {
    /// Path to the prod settings file
    #[clap(long, env = "PROD_SETTINGS")]
    settings: Option<PathBuf>,
}

impl CmdList {
    pub fn run(&mut self) -> Result<i32> {
        let settings_path = match &self.settings {
            Some(path) => path.clone(),
            None => prodenv::default_settings_path()?,
        };

        let productions = prodenv::available_productions(&settings_path);

        if productions.is_empty() {
            println!("No productions found");
            return Ok(0);
        }

        println!("{}", "Available productions:".bold());
        for production in &productions {
            println!("  * {}", production.cyan());
        }

        Ok(0)
    }
}
