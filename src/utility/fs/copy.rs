// envstage: Environment File Staging Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{FsError, Result};

/// What [`copy_file_if_exists`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    /// Source contents were written to `destination`.
    Copied { destination: PathBuf, bytes: u64 },
    /// Nothing to copy.
    SourceMissing { source: PathBuf },
    /// Source and destination are the same file.
    SamePath { path: PathBuf },
}

/// Copies `src` over `dst` when `src` exists.
///
/// Any previous content of `dst` is replaced. A missing source is reported
/// as [`CopyOutcome::SourceMissing`] and leaves `dst` untouched. With `dry`
/// set, the outcome is computed but nothing is written.
///
/// # Example
/// ```no_run
/// use envstage::utility::fs::copy::{copy_file_if_exists, CopyOutcome};
/// use std::path::Path;
///
/// let outcome = copy_file_if_exists(
///     Path::new("/old/project/.env.local"),
///     Path::new("/new/project/.env.local"),
///     false,
/// )?;
/// assert!(matches!(outcome, CopyOutcome::Copied { .. }));
/// # Ok::<(), anyhow::Error>(())
/// ```
///
/// # Errors
///
/// Returns [`FsError::Copy`] if the copy itself fails (permissions, missing
/// destination directory, disk full).
pub fn copy_file_if_exists(src: &Path, dst: &Path, dry: bool) -> Result<CopyOutcome> {
    if !src.exists() {
        debug!(source = %src.display(), "source file missing, skipping copy");
        return Ok(CopyOutcome::SourceMissing {
            source: src.to_path_buf(),
        });
    }

    // fs::copy onto itself truncates the file before reading it
    if is_same_file(src, dst) {
        return Ok(CopyOutcome::SamePath {
            path: dst.to_path_buf(),
        });
    }

    let copy_error = |source| FsError::Copy {
        from: src.to_path_buf(),
        to: dst.to_path_buf(),
        source,
    };

    let bytes = if dry {
        fs::metadata(src).map_err(copy_error)?.len()
    } else {
        fs::copy(src, dst).map_err(copy_error)?
    };

    debug!(
        source = %src.display(),
        destination = %dst.display(),
        bytes,
        dry,
        "copied file"
    );

    Ok(CopyOutcome::Copied {
        destination: dst.to_path_buf(),
        bytes,
    })
}

fn is_same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
