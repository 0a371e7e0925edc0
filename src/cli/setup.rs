// envstage: Environment File Staging Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments of the `setup`, `set` and `options` commands.
//!
//! ```text
//! setup --yes             answer the dataset question with yes
//! setup --no              answer it with no
//! setup --dataset NAME    answer both questions (implies --yes)
//! ```

use clap::Args;
use std::path::PathBuf;

/// Arguments for the `setup` command.
#[derive(Debug, Clone, Default, Args)]
pub struct SetupArgs {
    /// Switch to a new dataset without asking.
    #[arg(short = 'y', long, conflicts_with = "no")]
    pub yes: bool,

    /// Keep the current dataset without asking.
    #[arg(short = 'n', long)]
    pub no: bool,

    /// Name of the new dataset; implies --yes.
    #[arg(long, value_name = "NAME", conflicts_with = "no")]
    pub dataset: Option<String>,
}

impl SetupArgs {
    /// Preset answer to "use a new dataset?", if the flags give one.
    #[must_use]
    pub const fn preset_confirm(&self) -> Option<bool> {
        if self.yes || self.dataset.is_some() {
            Some(true)
        } else if self.no {
            Some(false)
        } else {
            None
        }
    }
}

/// Arguments for the `set` command.
#[derive(Debug, Clone, Args)]
pub struct SetArgs {
    /// Key to set.
    pub key: String,

    /// New value.
    pub value: String,

    /// File to update instead of the staged environment file.
    #[arg(short = 'f', long, value_name = "FILE")]
    pub file: Option<PathBuf>,
}

/// Arguments for the `options` command.
#[derive(Debug, Clone, Default, Args)]
pub struct OptionsArgs {
    /// Print the configuration as JSON.
    #[arg(long)]
    pub json: bool,
}
