// envstage: Environment File Staging Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::trace;

use crate::error::{FsError, Result};

/// Replaces the contents of `path` with `contents`.
///
/// The data is written to a temporary file next to `path` and renamed over
/// it, so readers see either the old or the new file, never a truncated one.
/// Permissions of an existing `path` carry over to the replacement.
///
/// # Errors
///
/// Returns [`FsError::Write`] if the temporary file cannot be created,
/// written, or renamed into place.
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let write_error = |source| FsError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let permissions = fs::metadata(path).ok().map(|m| m.permissions());

    // Removed automatically on drop if anything below fails
    let mut tmp = NamedTempFile::new_in(dir).map_err(write_error)?;
    tmp.write_all(contents).map_err(write_error)?;
    tmp.as_file().sync_all().map_err(write_error)?;

    if let Some(permissions) = permissions {
        fs::set_permissions(tmp.path(), permissions).map_err(write_error)?;
    }

    trace!(path = %path.display(), temp = %tmp.path().display(), "renaming temp file into place");
    tmp.persist(path).map_err(|e| write_error(e.error))?;

    Ok(())
}
