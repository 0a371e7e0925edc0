// envstage: Environment File Staging Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The `setup` command.
//!
//! ```text
//! copy source --> root/file_name
//!        |
//!   "use a new dataset?" --no--------------+
//!        | yes                             |
//!   "dataset name"                         |
//!        |                                 |
//!   upsert dataset.key=<name>              |
//!        |                                 |
//!   print follow-up command                |
//!        +---------------------------------+
//!        v
//!   completion message
//! ```

use bon::Builder;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::cli::setup::SetupArgs;
use crate::cmd::report::{report_copy, report_update};
use crate::config::Config;
use crate::config::types::{DEFAULT_DATASET_COMMAND, DEFAULT_DATASET_KEY, DATASET_PLACEHOLDER};
use crate::envfile::{UpsertOutcome, upsert_file};
use crate::error::Result;
use crate::prompt::{ConsolePrompt, PresetPrompt, Prompt};
use crate::utility::fs::copy::{CopyOutcome, copy_file_if_exists};

/// Yes/no question asked after the copy.
pub const DATASET_QUESTION: &str = "Do you want to use a new Sanity dataset?";

/// Free-text question asked when the answer was yes.
pub const DATASET_NAME_QUESTION: &str = "Enter new dataset name";

/// Everything the setup flow needs, resolved from configuration.
#[derive(Debug, Clone, Builder)]
pub struct SetupPlan {
    #[builder(setters(name = with_source), into)]
    source: PathBuf,
    #[builder(setters(name = with_destination), into)]
    destination: PathBuf,
    #[builder(setters(name = with_key), into, default = DEFAULT_DATASET_KEY.to_string())]
    key: String,
    #[builder(setters(name = with_command), into, default = DEFAULT_DATASET_COMMAND.to_string())]
    command: String,
    #[builder(setters(name = with_dry), default = false)]
    dry: bool,
}

impl SetupPlan {
    /// # Errors
    ///
    /// Returns a `ConfigError::MissingKey` if `paths.source` or `paths.root`
    /// is not configured.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::builder()
            .with_source(config.paths.source()?)
            .with_destination(config.paths.destination()?)
            .with_key(config.dataset.key.as_str())
            .with_command(config.dataset.command.as_str())
            .with_dry(config.global.dry)
            .build())
    }

    /// File the upsert reads. A dry run skips the copy, so the content the
    /// destination would hold is still in `source`; with `dry` set nothing
    /// is written to it.
    fn upsert_target(&self, copy: &CopyOutcome) -> &Path {
        match copy {
            CopyOutcome::Copied { .. } if self.dry => &self.source,
            _ => &self.destination,
        }
    }

    fn follow_up_command(&self, dataset: &str) -> String {
        self.command.replace(DATASET_PLACEHOLDER, dataset)
    }
}

/// What the setup flow did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupReport {
    pub copy: CopyOutcome,
    /// Dataset name entered, if the update branch ran.
    pub dataset: Option<String>,
    pub update: Option<UpsertOutcome>,
}

/// Runs the setup flow, asking questions through `prompt` and writing
/// status lines to `out`.
///
/// # Errors
///
/// Returns an error if the copy or the update fails, if `prompt` cannot
/// produce an answer, or if writing to `out` fails. A missing source or
/// destination file is not an error.
pub fn run_setup<P, W>(plan: &SetupPlan, prompt: &mut P, out: &mut W) -> Result<SetupReport>
where
    P: Prompt,
    W: Write,
{
    let copy = copy_file_if_exists(&plan.source, &plan.destination, plan.dry)?;
    report_copy(out, &copy, plan.dry)?;

    let mut report = SetupReport {
        copy,
        dataset: None,
        update: None,
    };

    if prompt.confirm(DATASET_QUESTION)? {
        let dataset = prompt.ask(DATASET_NAME_QUESTION)?;
        if dataset.is_empty() {
            warn!(key = %plan.key, "empty dataset name");
        }

        let target = plan.upsert_target(&report.copy);
        let update = upsert_file(target, &plan.key, &dataset, plan.dry)?;
        report_update(out, &update, &plan.destination, plan.dry)?;
        if update.is_applied() {
            info!(key = %plan.key, dataset = %dataset, "dataset switched");
        }

        writeln!(out, "\nRun this command to create the new dataset:")?;
        writeln!(out, "   {}", plan.follow_up_command(&dataset))?;

        report.dataset = Some(dataset);
        report.update = Some(update);
    }

    writeln!(
        out,
        "\nSetup complete! {} is ready.",
        plan.destination.display()
    )?;

    Ok(report)
}

/// Run the `setup` command on the console.
///
/// # Errors
///
/// Returns an error if the configuration lacks paths or the flow fails.
pub fn run_setup_command(args: &SetupArgs, config: &Config) -> Result<()> {
    let plan = SetupPlan::from_config(config)?;
    debug!(?plan, "starting setup");

    let mut prompt = PresetPrompt::new(ConsolePrompt::stdio())
        .with_confirm(args.preset_confirm())
        .with_answer(args.dataset.clone());

    let report = run_setup(&plan, &mut prompt, &mut std::io::stdout())?;
    debug!(?report, "setup finished");
    Ok(())
}
