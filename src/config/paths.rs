// envstage: Environment File Staging Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Path configuration.
//!
//! ```text
//! source                     existing environment file
//! root/                      project being set up
//!   <file_name>              destination (default .env.local)
//! ```
//!
//! `~` and `$VAR` / `${VAR}` are expanded in `source` and `root`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Default name of the staged environment file.
pub const DEFAULT_FILE_NAME: &str = ".env.local";

/// Source and destination of the environment file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    /// Environment file to copy from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<PathBuf>,
    /// Directory the file is copied into.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,
    /// Name of the file inside `root`.
    pub file_name: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            source: None,
            root: None,
            file_name: DEFAULT_FILE_NAME.to_string(),
        }
    }
}

impl PathsConfig {
    /// Expand `source` and `root` and check `file_name`.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::InvalidValue` if a path references an unset
    /// environment variable, is not valid UTF-8, or if `file_name` is not a
    /// plain file name.
    pub fn resolve(&mut self) -> Result<()> {
        if let Some(source) = &self.source {
            self.source = Some(expand_path("source", source)?);
        }
        if let Some(root) = &self.root {
            self.root = Some(expand_path("root", root)?);
        }

        let file_name = Path::new(&self.file_name);
        let is_plain = file_name.file_name().is_some_and(|name| name == file_name.as_os_str());
        if !is_plain {
            return Err(invalid("file_name", format!("'{}' is not a file name", self.file_name)).into());
        }

        Ok(())
    }

    /// Get the source file, returning an error if not set.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::MissingKey` if `source` is not set.
    pub fn source(&self) -> Result<&Path> {
        self.source.as_deref().ok_or_else(|| missing("source").into())
    }

    /// Get the destination directory, returning an error if not set.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::MissingKey` if `root` is not set.
    pub fn root(&self) -> Result<&Path> {
        self.root.as_deref().ok_or_else(|| missing("root").into())
    }

    /// `root/file_name`.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::MissingKey` if `root` is not set.
    pub fn destination(&self) -> Result<PathBuf> {
        Ok(self.root()?.join(&self.file_name))
    }
}

fn expand_path(key: &str, path: &Path) -> std::result::Result<PathBuf, ConfigError> {
    let raw = path
        .to_str()
        .ok_or_else(|| invalid(key, format!("'{}' is not valid UTF-8", path.display())))?;
    let expanded = shellexpand::full(raw).map_err(|e| invalid(key, e.to_string()))?;
    Ok(PathBuf::from(expanded.as_ref()))
}

fn missing(key: &str) -> ConfigError {
    ConfigError::MissingKey {
        section: "paths".to_string(),
        key: key.to_string(),
    }
}

fn invalid(key: &str, message: String) -> ConfigError {
    ConfigError::InvalidValue {
        section: "paths".to_string(),
        key: key.to_string(),
        message,
    }
}
