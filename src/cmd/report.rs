// envstage: Environment File Staging Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Status lines for copy and update outcomes.

use std::io::Write;
use std::path::Path;

use crate::envfile::UpsertOutcome;
use crate::error::Result;
use crate::utility::fs::copy::CopyOutcome;

/// Writes the status line for a copy.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn report_copy<W: Write>(out: &mut W, outcome: &CopyOutcome, dry: bool) -> Result<()> {
    match outcome {
        CopyOutcome::Copied { destination, bytes } if dry => writeln!(
            out,
            "Would copy environment file to {} ({bytes} bytes).",
            destination.display()
        )?,
        CopyOutcome::Copied { destination, .. } => {
            writeln!(out, "Copied environment file to {}", destination.display())?;
        }
        CopyOutcome::SourceMissing { source } => writeln!(
            out,
            "No existing environment file found at {}. Skipping copy.",
            source.display()
        )?,
        CopyOutcome::SamePath { path } => writeln!(
            out,
            "{} is both source and destination. Skipping copy.",
            path.display()
        )?,
    }
    Ok(())
}

/// Writes the status line for an update of `path`.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn report_update<W: Write>(
    out: &mut W,
    outcome: &UpsertOutcome,
    path: &Path,
    dry: bool,
) -> Result<()> {
    let verb = if dry { "Would update" } else { "Updated" };
    match outcome {
        UpsertOutcome::Replaced { key, lines: 1 } | UpsertOutcome::Appended { key } => {
            writeln!(out, "{verb} `{key}` in {}.", path.display())?;
        }
        UpsertOutcome::Replaced { key, lines } => {
            writeln!(out, "{verb} `{key}` in {} ({lines} lines).", path.display())?;
        }
        UpsertOutcome::TargetMissing { .. } => {
            writeln!(out, "{} not found! Skipping update.", path.display())?;
        }
    }
    Ok(())
}
