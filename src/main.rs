// envstage: Environment File Staging Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> Command Dispatch
//!   Setup (default) | Copy | Set | Options | Inis | Version
//! ```

use std::io;
use std::process::ExitCode;

use envstage::cli::global::GlobalOptions;
use envstage::cli::setup::SetupArgs;
use envstage::cli::{self, Command};
use envstage::cmd::config::{run_inis_command, run_options_command};
use envstage::cmd::file::{run_copy_command, run_set_command};
use envstage::cmd::setup::run_setup_command;
use envstage::config::loader::ConfigLoader;
use envstage::config::{Config, DEFAULT_CONFIG_FILE, ENV_PREFIX};
use envstage::logging::{LogGuard, init_logging};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = cli::parse();

    let result = match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(())
        }
        Some(Command::Inis) => build_config_loader(&cli.global).map(|loader| {
            run_inis_command(&loader.format_loaded_files());
        }),
        command => load_config(&cli.global).and_then(|config| {
            let _log_guard = start_logging(&config)?;
            dispatch_command(command.as_ref(), &config)
        }),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn dispatch_command(command: Option<&Command>, config: &Config) -> envstage::error::Result<()> {
    match command {
        Some(Command::Setup(args)) => run_setup_command(args, config),
        None => run_setup_command(&SetupArgs::default(), config),
        Some(Command::Copy) => run_copy_command(config, &mut io::stdout()),
        Some(Command::Set(args)) => run_set_command(args, config, &mut io::stdout()),
        Some(Command::Options(args)) => run_options_command(args, config, &mut io::stdout()),
        Some(Command::Version | Command::Inis) => Ok(()),
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn build_config_loader(global: &GlobalOptions) -> envstage::error::Result<ConfigLoader> {
    let mut loader = ConfigLoader::new();
    if !global.no_default_inis {
        loader = loader.add_toml_file_optional(DEFAULT_CONFIG_FILE);
    }
    for ini_path in &global.inis {
        loader = loader.add_toml_file(ini_path);
    }
    loader
        .with_env_prefix(ENV_PREFIX)
        .apply_overrides(&global.to_config_overrides())
}

fn load_config(global: &GlobalOptions) -> envstage::error::Result<Config> {
    build_config_loader(global)?
        .build()
        .map_err(|e| e.context("failed to load config"))
}

fn start_logging(config: &Config) -> envstage::error::Result<LogGuard> {
    init_logging(&config.global.log_config())
}
