// Copyright (c) Contributors to the prodenv project.
// SPDX-License-Identifier: Apache-2.0

//! prod - Layered Production Environment Resolver CLI

use clap::{Parser, Subcommand};
use miette::Result;

mod cmd_enter;
mod cmd_launch;
mod cmd_list;
mod cmd_show;

use cmd_enter::CmdEnter;
use cmd_launch::CmdLaunch;
use cmd_list::CmdList;
use cmd_show::CmdShow;

#[derive(Parser)]
#[clap(
    name = "prod",
    about = "Launch software from production environments",
    version,
    long_about = "Resolve a production's layered configuration and launch software in it"
)]
struct Opt {
    #[clap(flatten)]
    logging: Logging,

    #[clap(subcommand)]
    cmd: Command,
}

#[derive(Parser)]
struct Logging {
    /// Increase verbosity (-v, -vv, -vvv)
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[clap(short, long)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Command {
    /// List available productions
    List(CmdList),

    /// Display a production's software and environment
    Show(CmdShow),

    /// Enter a production environment in a subshell
    Enter(CmdEnter),

    /// Launch software from a production
    Launch(CmdLaunch),
}

impl Opt {
    fn run(self) -> Result<i32> {
        // Setup logging
        let log_level = match (self.logging.quiet, self.logging.verbose) {
            (true, _) => tracing::Level::ERROR,
            (false, 0) => tracing::Level::WARN,
            (false, 1) => tracing::Level::INFO,
            (false, 2) => tracing::Level::DEBUG,
            (false, _) => tracing::Level::TRACE,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .init();

        // Dispatch to command
        match self.cmd {
            Command::List(mut cmd) => cmd.run(),
            Command::Show(mut cmd) => cmd.run(),
            Command::Enter(mut cmd) => cmd.run(),
            Command::Launch(mut cmd) => cmd.run(),
        }
    }
}

fn main() -> Result<()> {
    let opt = Opt::parse();
    let code = opt.run()?;
    std::process::exit(code);
}
