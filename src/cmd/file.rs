// envstage: Environment File Staging Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The `copy` and `set` commands.

use std::io::Write;

use crate::cli::setup::SetArgs;
use crate::cmd::report::{report_copy, report_update};
use crate::config::Config;
use crate::envfile::upsert_file;
use crate::error::Result;
use crate::utility::fs::copy::copy_file_if_exists;

/// Copy `paths.source` to the staged destination.
///
/// # Errors
///
/// Returns an error if the paths are not configured or the copy fails.
pub fn run_copy_command<W: Write>(config: &Config, out: &mut W) -> Result<()> {
    let source = config.paths.source()?;
    let destination = config.paths.destination()?;

    let outcome = copy_file_if_exists(source, &destination, config.global.dry)?;
    report_copy(out, &outcome, config.global.dry)
}

/// Set a key in `--file`, or in the staged destination.
///
/// # Errors
///
/// Returns an error if no file is given and `paths.root` is not configured,
/// if the key or value is invalid, or if the file cannot be rewritten.
pub fn run_set_command<W: Write>(args: &SetArgs, config: &Config, out: &mut W) -> Result<()> {
    let path = match &args.file {
        Some(file) => file.clone(),
        None => config.paths.destination()?,
    };

    let outcome = upsert_file(&path, &args.key, &args.value, config.global.dry)?;
    report_update(out, &outcome, &path, config.global.dry)
}
