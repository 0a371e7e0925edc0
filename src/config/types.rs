// envstage: Environment File Staging Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration sections other than `[paths]`.
//!
//! ```text
//! [global]   dry, output_log_level, file_log_level, log_file
//! [dataset]  key, command ("{dataset}" placeholder)
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::ConfigError;
use crate::logging::{LogConfig, LogLevel};

/// Environment key holding the dataset name.
pub const DEFAULT_DATASET_KEY: &str = "NEXT_PUBLIC_SANITY_DATASET";

/// Command the user is told to run after switching datasets.
pub const DEFAULT_DATASET_COMMAND: &str = "sanity dataset create {dataset}";

/// Placeholder substituted in [`DatasetConfig::command`].
pub const DATASET_PLACEHOLDER: &str = "{dataset}";

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Report what would happen without writing any file.
    pub dry: bool,
    /// Log level for console output (0-6).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-6).
    pub file_log_level: LogLevel,
    /// Log file; no file logging when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl GlobalConfig {
    /// Logging setup for these options. An empty `log_file` disables file
    /// logging; event targets are shown on the console from DEBUG up.
    #[must_use]
    pub fn log_config(&self) -> LogConfig {
        let log_file = self
            .log_file
            .as_ref()
            .map(|p| p.display().to_string())
            .filter(|p| !p.is_empty());

        LogConfig::builder()
            .with_console_level(self.output_log_level)
            .with_file_level(self.file_log_level)
            .maybe_with_log_file(log_file)
            .with_show_target(self.output_log_level >= LogLevel::DEBUG)
            .build()
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            dry: false,
            output_log_level: LogLevel::INFO,
            file_log_level: LogLevel::TRACE,
            log_file: None,
        }
    }
}

/// The dataset key and the follow-up command shown after changing it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DatasetConfig {
    /// Key rewritten in the staged environment file.
    pub key: String,
    /// Follow-up command template.
    pub command: String,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            key: DEFAULT_DATASET_KEY.to_string(),
            command: DEFAULT_DATASET_COMMAND.to_string(),
        }
    }
}

impl DatasetConfig {
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if the key could not be matched
    /// in an environment file.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        crate::envfile::validate_key(&self.key).map_err(|e| ConfigError::InvalidValue {
            section: "dataset".to_string(),
            key: "key".to_string(),
            message: e.to_string(),
        })
    }
}
