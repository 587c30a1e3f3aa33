// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

//! # Command Line Interface Definitions
//!
//! The single source of truth for the CLI schema. Execution logic for
//! each command lives in its own submodule; the argument and flag
//! definitions are centralized here so the whole surface can be read in
//! one place.
//!
//! The `From<&CommandLine> for Config` impl decouples the external flag
//! surface from the internal application state, keeping the library
//! crates agnostic of `clap`.

pub mod build;
pub mod generate;
pub mod sites;

use clap::{ArgAction, Parser, Subcommand};
use flowforge_common::config::Config;

#[derive(Parser)]
#[command(name = "flowforge")]
#[command(about = "Assembles nfdump queries over archived NetFlow data.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Keep logs and colors but hide the banner line
    #[arg(long = "no-banner", global = true)]
    pub no_banner: bool,

    /// Never touch the system clipboard
    #[arg(long = "no-copy", global = true)]
    pub no_copy: bool,

    /// Reduce UI visual density (-q: no decorations, -qq: bare data only)
    #[arg(short = 'q', long = "quiet", action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Increase logging detail (-v: debug logs)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbosity: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive builder: access gate, then the query form
    #[command(alias = "b")]
    Build,

    /// Render a query command straight from flags
    #[command(alias = "g")]
    Generate {
        /// Archive to query: 'nfsen' (last 30 days) or 's3' (older)
        #[arg(short = 'a', long = "archive", default_value = "nfsen")]
        archive: String,

        /// Site ids in the order they should appear (repeatable, comma separated)
        #[arg(
            short = 's',
            long = "site",
            value_name = "SITE",
            num_args(1..),
            value_delimiter = ',',
            required = true
        )]
        sites: Vec<String>,

        /// Range start, "YYYY-MM-DD[ HH:MM]" (time defaults to 00:00)
        #[arg(long = "from", value_name = "WHEN")]
        from: String,

        /// Range end, "YYYY-MM-DD[ HH:MM]" (time defaults to 23:59)
        #[arg(long = "to", value_name = "WHEN")]
        to: String,

        /// IP address to filter on (dotted quad)
        #[arg(long = "ip", value_name = "ADDR")]
        ip: String,

        /// Also place the command on the clipboard
        #[arg(short = 'c', long = "copy")]
        copy: bool,
    },

    /// List the compiled-in site catalog
    #[command(alias = "s")]
    Sites {
        /// Emit the catalog as JSON
        #[arg(long = "json")]
        json: bool,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

impl From<&CommandLine> for Config {
    fn from(cmd: &CommandLine) -> Self {
        Self {
            no_banner: cmd.no_banner,
            quiet: cmd.quiet,
            no_copy: cmd.no_copy,
        }
    }
}
