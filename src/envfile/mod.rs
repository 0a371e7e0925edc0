// envstage: Environment File Staging Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `KEY=VALUE` upserts on line-oriented environment files.
//!
//! ```text
//! upsert_file(path, key, value)
//!   missing path  --> TargetMissing (no write)
//!   read_to_string
//!   apply_upsert  --> every "key=" line replaced, else appended
//!   write_atomic  (skipped when content is unchanged or dry)
//! ```
//!
//! Matching is a plain prefix test on `key=` at the start of the line. No
//! quoting, escaping, `export` prefixes or surrounding whitespace are
//! recognised. Lines that do not match are copied byte for byte, line
//! terminators included.

use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::{EnvFileError, FsError, Result};
use crate::utility::fs::write::write_atomic;

/// Result of applying an upsert to file content in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upserted {
    /// New file content.
    pub content: String,
    /// Number of existing lines that were rewritten (0 means appended).
    pub replaced: usize,
}

/// What [`upsert_file`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// `lines` existing assignments were rewritten.
    Replaced { key: String, lines: usize },
    /// No assignment existed; one was added at the end.
    Appended { key: String },
    /// The file to update does not exist.
    TargetMissing { path: PathBuf },
}

impl UpsertOutcome {
    /// True if the file holds the new assignment (or would, in a dry run).
    #[must_use]
    pub const fn is_applied(&self) -> bool {
        !matches!(self, Self::TargetMissing { .. })
    }
}

/// Checks that `key` can be matched as a `key=` line prefix.
///
/// # Errors
///
/// Returns [`EnvFileError::InvalidKey`] for empty keys and keys containing
/// `=` or whitespace.
pub fn validate_key(key: &str) -> std::result::Result<(), EnvFileError> {
    let reason = if key.is_empty() {
        "keys cannot be empty"
    } else if key.contains('=') {
        "keys cannot contain '='"
    } else if key.chars().any(char::is_whitespace) {
        "keys cannot contain whitespace"
    } else {
        return Ok(());
    };

    Err(EnvFileError::InvalidKey {
        key: key.to_string(),
        reason,
    })
}

/// Checks that `value` fits on a single line.
///
/// # Errors
///
/// Returns [`EnvFileError::InvalidValue`] if `value` contains `\n` or `\r`.
pub fn validate_value(key: &str, value: &str) -> std::result::Result<(), EnvFileError> {
    if value.contains(['\n', '\r']) {
        return Err(EnvFileError::InvalidValue {
            key: key.to_string(),
        });
    }
    Ok(())
}

/// Sets `key` to `value` in `content`.
///
/// Every line starting with `key=` becomes `key=value\n`. When none does,
/// `key=value\n` is appended, preceded by a newline if the content does not
/// already end with one. Applying the same upsert twice yields the same
/// content as applying it once.
#[must_use]
pub fn apply_upsert(content: &str, key: &str, value: &str) -> Upserted {
    let prefix = format!("{key}=");
    let assignment = format!("{key}={value}\n");

    let mut out = String::with_capacity(content.len() + assignment.len() + 1);
    let mut replaced = 0;

    for line in content.split_inclusive('\n') {
        if line.starts_with(&prefix) {
            out.push_str(&assignment);
            replaced += 1;
        } else {
            out.push_str(line);
        }
    }

    if replaced == 0 {
        if !out.is_empty() && !out.ends_with('\n') {
            out.push('\n');
        }
        out.push_str(&assignment);
    }

    Upserted {
        content: out,
        replaced,
    }
}

/// Sets `key` to `value` in the file at `path`.
///
/// A missing file is reported as [`UpsertOutcome::TargetMissing`]. The file
/// is only rewritten when its content changes, and never with `dry` set.
///
/// # Errors
///
/// Returns [`EnvFileError`] for an invalid key or value, and [`FsError`] if
/// the file cannot be read or replaced.
pub fn upsert_file(path: &Path, key: &str, value: &str, dry: bool) -> Result<UpsertOutcome> {
    validate_key(key)?;
    validate_value(key, value)?;

    if !path.exists() {
        debug!(path = %path.display(), "environment file missing, skipping update");
        return Ok(UpsertOutcome::TargetMissing {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path).map_err(|source| FsError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let upserted = apply_upsert(&content, key, value);

    if upserted.replaced > 1 {
        warn!(
            key,
            lines = upserted.replaced,
            path = %path.display(),
            "key assigned on several lines, all of them were rewritten"
        );
    }

    if upserted.content == content {
        debug!(key, path = %path.display(), "already up to date");
    } else if !dry {
        write_atomic(path, upserted.content.as_bytes())?;
    }

    let key = key.to_string();
    Ok(match upserted.replaced {
        0 => UpsertOutcome::Appended { key },
        lines => UpsertOutcome::Replaced { key, lines },
    })
}
