// envstage: Environment File Staging Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!        anyhow::Error (command boundary)
//!                     |
//!   +---------+-------+-------+
//!   v         v       v       v
//! Config   EnvFile  Prompt    Fs
//!
//!   Config  MissingKey, InvalidValue, InvalidOverride
//!   EnvFile InvalidKey, InvalidValue
//!   Prompt  Closed, Io
//!   Fs      Read, Write, Copy
//! ```
//!
//! Non-fatal conditions (missing source, missing target) are not errors;
//! they are reported through the outcome types of the operations.

use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Missing required configuration key.
    #[error("missing required config key '{key}' in section '[{section}]'")]
    MissingKey { section: String, key: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },

    /// A `--set` override that is not of the form `section/key=value`.
    #[error("invalid option '{0}', expected 'section/key=value'")]
    InvalidOverride(String),
}

// --- Environment File Errors ---

/// Errors raised while preparing an environment file update.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EnvFileError {
    /// Key cannot be matched as a `KEY=` line prefix.
    #[error("invalid key '{key}': {reason}")]
    InvalidKey { key: String, reason: &'static str },

    /// Value would break the line structure of the file.
    #[error("invalid value for '{key}': values cannot contain line breaks")]
    InvalidValue { key: String },
}

// --- Prompt Errors ---

/// Interactive input errors.
#[derive(Debug, Error)]
pub enum PromptError {
    /// Input reached end-of-file before an answer was given.
    #[error("input closed while waiting for an answer to '{question}'")]
    Closed { question: String },

    /// I/O error on the console.
    #[error("console I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// --- Filesystem Errors ---

/// Filesystem operation errors.
#[derive(Debug, Error)]
pub enum FsError {
    /// Failed to read a file.
    #[error("failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a file.
    #[error("failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to copy a file.
    #[error("failed to copy '{}' to '{}': {source}", from.display(), to.display())]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FsError {
    /// Path the failed operation was writing to (or reading, for `Read`).
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Read { path, .. } | Self::Write { path, .. } => path,
            Self::Copy { to, .. } => to,
        }
    }
}

#[cfg(test)]
mod tests;
