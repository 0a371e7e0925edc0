// envstage: Environment File Staging Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Config-related commands for envstage.

use std::io::Write;

use crate::cli::setup::OptionsArgs;
use crate::config::Config;
use crate::error::Result;

/// Display current configuration options.
///
/// # Errors
///
/// Returns an error if the configuration cannot be serialized or written.
pub fn run_options_command<W: Write>(args: &OptionsArgs, config: &Config, out: &mut W) -> Result<()> {
    if args.json {
        serde_json::to_writer_pretty(&mut *out, config)?;
        writeln!(out)?;
    } else {
        for line in config.format_options() {
            writeln!(out, "{line}")?;
        }
    }
    Ok(())
}

/// Display loaded configuration files.
pub fn run_inis_command(config_files: &[String]) {
    if config_files.is_empty() {
        println!("No configuration files loaded");
    } else {
        for line in config_files {
            println!("{line}");
        }
    }
}
