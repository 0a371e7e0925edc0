// envstage: Environment File Staging Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for envstage.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. envstage.toml (cwd, unless --no-default-inis)
//! 3. --ini FILE (in order)
//! 4. ENVSTAGE_* env vars
//! 5. --set section/key=value, then dedicated CLI flags
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! ENVSTAGE_GLOBAL__DRY=true          → global.dry = true
//! ENVSTAGE_PATHS__ROOT=~/new-site    → paths.root = "~/new-site"
//! ENVSTAGE_DATASET__KEY=SANITY_DS    → dataset.key = "SANITY_DS"
//! ```
//!
//! # Example
//!
//! ```toml
//! [paths]
//! source = "~/Desktop/SLLWeb/social-launch-labs/.env.local"
//! root = "~/Desktop/SLLOptimized"
//!
//! [dataset]
//! key = "NEXT_PUBLIC_SANITY_DATASET"
//! command = "sanity dataset create {dataset}"
//! ```

pub mod loader;
pub mod paths;
pub mod types;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::error::Result;

use loader::ConfigLoader;
use paths::PathsConfig;
use types::{DatasetConfig, GlobalConfig};

/// Default configuration file looked up in the current directory.
pub const DEFAULT_CONFIG_FILE: &str = "envstage.toml";

/// Prefix of environment variables read by the loader.
pub const ENV_PREFIX: &str = "ENVSTAGE";

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Source and destination paths.
    pub paths: PathsConfig,
    /// Dataset key and follow-up command.
    pub dataset: DatasetConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use envstage::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("envstage.toml")
    ///     .with_env_prefix("ENVSTAGE")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Expand paths and validate values.
    ///
    /// # Errors
    ///
    /// Returns an error if path expansion fails or the dataset key is invalid.
    pub fn resolve_and_validate(&mut self) -> Result<()> {
        self.paths.resolve()?;
        self.dataset.validate()?;
        Ok(())
    }

    /// Format configuration options for display, sorted by key.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let fmt = |p: &Option<PathBuf>| {
            p.as_ref()
                .map_or_else(String::new, |p| p.display().to_string())
        };

        let destination = self
            .paths
            .destination()
            .map(|p| p.display().to_string())
            .unwrap_or_default();

        let options: BTreeMap<&str, String> = BTreeMap::from([
            ("global.dry", self.global.dry.to_string()),
            (
                "global.output_log_level",
                self.global.output_log_level.as_u8().to_string(),
            ),
            (
                "global.file_log_level",
                self.global.file_log_level.as_u8().to_string(),
            ),
            ("global.log_file", fmt(&self.global.log_file)),
            ("paths.source", fmt(&self.paths.source)),
            ("paths.root", fmt(&self.paths.root)),
            ("paths.file_name", self.paths.file_name.clone()),
            ("paths.destination", destination),
            ("dataset.key", self.dataset.key.clone()),
            ("dataset.command", self.dataset.command.clone()),
        ]);

        let max_key_len = options.keys().map(|k| k.len()).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }
}
