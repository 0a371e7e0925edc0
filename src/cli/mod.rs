// envstage: Environment File Staging Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for envstage using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! envstage [global options] <command>
//! setup [--yes | --no] [--dataset NAME]   (default)
//! copy
//! set <KEY> <VALUE> [--file PATH]
//! options [--json]
//! inis
//! version
//! ```

pub mod global;
pub mod setup;


use crate::cli::global::GlobalOptions;
use crate::cli::setup::{OptionsArgs, SetArgs, SetupArgs};
use clap::{Parser, Subcommand};

/// Environment file staging tool
///
/// Copies a project's `.env.local` into a new project directory and
/// optionally switches its dataset.
#[derive(Debug, Parser)]
#[command(
    name = "envstage",
    author,
    version,
    about = "Stages a project's .env.local file",
    long_about = "envstage Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Copies the environment file configured as paths.source into\n\
                  paths.root, then offers to point it at a new dataset.\n\n\
                  Invoking `envstage` without a command runs `setup`. See\n\
                  `envstage <command> --help` for more information about a command.",
    after_help = "CONFIG FILES:\n\n\
                  By default, envstage loads `envstage.toml` from the current\n\
                  directory if it exists. Additional files can be given with --ini\n\
                  and are loaded after it, later files overriding earlier ones.\n\
                  ENVSTAGE_SECTION__KEY environment variables come next, then\n\
                  --set options and the dedicated flags. Use --no-default-inis\n\
                  to skip `envstage.toml`."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all options and their values.
    Options(OptionsArgs),

    /// Lists the config files used.
    Inis,

    /// Copies the environment file, then optionally switches the dataset.
    Setup(SetupArgs),

    /// Copies the environment file only.
    Copy,

    /// Sets a key in the staged environment file.
    Set(SetArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
