// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # Flowforge CLI Entry Point
//!
//! Bootstraps the process and owns its global lifecycle:
//!
//! 1. **Global State Setup**: wires the `tracing` subscriber and the
//!    terminal printer before anything else can log.
//! 2. **Configuration Mapping**: converts parsed `clap` arguments into the
//!    internal `Config` struct the library crates consume.
//! 3. **Command Dispatch**: routes execution to the matching module in
//!    `commands/`.
//! 4. **Error Boundary**: any error propagated out of a subcommand is
//!    caught here, logged, and turned into a non-zero `ExitCode`.

mod commands;
mod terminal;
mod tui;

use std::process::ExitCode;

use flowforge_common::{config::Config, error};

use crate::{
    commands::{CommandLine, Commands, build, generate, sites},
    terminal::{logging, print::Print},
};

#[tokio::main]
async fn main() -> ExitCode {
    let commands = CommandLine::parse_args();
    logging::init(commands.verbosity);

    let cfg = Config::from(&commands);
    let _ = Print::init(&cfg);

    // The full-screen UI owns the whole terminal, so the frame chrome
    // only makes sense around the one-shot commands.
    let framed = !matches!(commands.command, Commands::Build);
    if framed {
        Print::banner();
    }

    let result = match &commands.command {
        Commands::Build => build::build(&cfg).await,
        Commands::Generate { archive, sites, from, to, ip, copy } => {
            generate::generate(archive, sites, from, to, ip, *copy, &cfg)
        }
        Commands::Sites { json } => sites::sites(*json, &cfg),
    };

    let exit_code = match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Critical failure: {e}");
            ExitCode::FAILURE
        }
    };

    if framed {
        Print::end_of_program();
    }

    exit_code
}
