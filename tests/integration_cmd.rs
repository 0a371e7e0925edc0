// envstage: Environment File Staging Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for the command handlers.
//!
//! Each test stages a fake old project and a new project in a temp dir.

use std::io::Cursor;
use std::path::{Path, PathBuf};

use envstage::cli::setup::{OptionsArgs, SetArgs};
use envstage::cmd::config::run_options_command;
use envstage::cmd::file::{run_copy_command, run_set_command};
use envstage::cmd::setup::{SetupPlan, run_setup};
use envstage::config::Config;
use envstage::config::loader::ConfigLoader;
use envstage::envfile::UpsertOutcome;
use envstage::error::ConfigError;
use envstage::prompt::ConsolePrompt;
use tempfile::TempDir;

const OLD_ENV: &str = "\
NEXT_PUBLIC_SANITY_PROJECT_ID=abc123
NEXT_PUBLIC_SANITY_DATASET=production
SANITY_API_TOKEN=sk-secret
";

fn stage() -> (TempDir, Config) {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("old")).unwrap();
    std::fs::create_dir_all(dir.path().join("new")).unwrap();
    std::fs::write(dir.path().join("old/.env.local"), OLD_ENV).unwrap();

    let config = ConfigLoader::new()
        .apply_overrides(&[
            format!("paths/source={}", dir.path().join("old/.env.local").display()),
            format!("paths/root={}", dir.path().join("new").display()),
        ])
        .unwrap()
        .build()
        .unwrap();
    (dir, config)
}

fn output(out: Vec<u8>, dir: &Path) -> String {
    String::from_utf8(out)
        .unwrap()
        .replace(&dir.display().to_string(), "<tmp>")
}

// =============================================================================
// Copy Command
// =============================================================================

#[test]
fn cmd_copy_stages_file() {
    let (dir, config) = stage();
    let mut out = Vec::new();

    run_copy_command(&config, &mut out).unwrap();

    assert_eq!(
        std::fs::read_to_string(dir.path().join("new/.env.local")).unwrap(),
        OLD_ENV
    );
    assert_eq!(
        output(out, dir.path()),
        "Copied environment file to <tmp>/new/.env.local\n"
    );
}

#[test]
fn cmd_copy_without_root_fails() {
    let config = Config::parse("[paths]\nsource = \"/tmp/.env.local\"\n").unwrap();

    let err = run_copy_command(&config, &mut Vec::new()).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::MissingKey { key, .. }) if key == "root"
    ));
}

// =============================================================================
// Set Command
// =============================================================================

#[test]
fn cmd_set_updates_staged_file() {
    let (dir, config) = stage();
    run_copy_command(&config, &mut Vec::new()).unwrap();
    let args = SetArgs {
        key: "SANITY_API_TOKEN".to_string(),
        value: "sk-rotated".to_string(),
        file: None,
    };
    let mut out = Vec::new();

    run_set_command(&args, &config, &mut out).unwrap();

    let staged = std::fs::read_to_string(dir.path().join("new/.env.local")).unwrap();
    assert!(staged.ends_with("SANITY_API_TOKEN=sk-rotated\n"));
    assert_eq!(
        output(out, dir.path()),
        "Updated `SANITY_API_TOKEN` in <tmp>/new/.env.local.\n"
    );
}

#[test]
fn cmd_set_explicit_file_needs_no_paths() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join(".env");
    std::fs::write(&file, "A=1\n").unwrap();
    let args = SetArgs {
        key: "B".to_string(),
        value: "2".to_string(),
        file: Some(file.clone()),
    };

    run_set_command(&args, &Config::default(), &mut Vec::new()).unwrap();

    assert_eq!(std::fs::read_to_string(&file).unwrap(), "A=1\nB=2\n");
}

#[test]
fn cmd_set_missing_file_reports_and_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    let args = SetArgs {
        key: "B".to_string(),
        value: "2".to_string(),
        file: Some(dir.path().join("absent.env")),
    };
    let mut out = Vec::new();

    run_set_command(&args, &Config::default(), &mut out).unwrap();

    assert_eq!(
        output(out, dir.path()),
        "<tmp>/absent.env not found! Skipping update.\n"
    );
    assert!(!dir.path().join("absent.env").exists());
}

#[test]
fn cmd_set_rejects_multiline_value() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join(".env");
    std::fs::write(&file, "A=1\n").unwrap();
    let args = SetArgs {
        key: "A".to_string(),
        value: "2\nB=3".to_string(),
        file: Some(file.clone()),
    };

    assert!(run_set_command(&args, &Config::default(), &mut Vec::new()).is_err());
    assert_eq!(std::fs::read_to_string(&file).unwrap(), "A=1\n");
}

// =============================================================================
// Options Command
// =============================================================================

#[test]
fn cmd_options_json() {
    let (_dir, config) = stage();
    let mut out = Vec::new();

    run_options_command(&OptionsArgs { json: true }, &config, &mut out).unwrap();

    let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(json["dataset"]["key"], "NEXT_PUBLIC_SANITY_DATASET");
    assert_eq!(json["global"]["dry"], false);
}

#[test]
fn cmd_options_text_lists_destination() {
    let (dir, config) = stage();
    let mut out = Vec::new();

    run_options_command(&OptionsArgs::default(), &config, &mut out).unwrap();

    let text = output(out, dir.path());
    assert!(text.contains("paths.destination       = <tmp>/new/.env.local\n"));
    assert_eq!(text.lines().count(), 10);
}

// =============================================================================
// Setup Flow
// =============================================================================

#[test]
fn cmd_setup_end_to_end() {
    let (dir, config) = stage();
    let plan = SetupPlan::from_config(&config).unwrap();
    let mut prompt = ConsolePrompt::new(Cursor::new(b"yes\nstaging\n".to_vec()), Vec::new());

    let report = run_setup(&plan, &mut prompt, &mut Vec::new()).unwrap();

    assert_eq!(
        report.update,
        Some(UpsertOutcome::Replaced {
            key: "NEXT_PUBLIC_SANITY_DATASET".to_string(),
            lines: 1
        })
    );
    let staged: PathBuf = dir.path().join("new/.env.local");
    assert_eq!(
        std::fs::read_to_string(staged).unwrap(),
        OLD_ENV.replace("=production", "=staging")
    );
    assert_eq!(
        std::fs::read_to_string(dir.path().join("old/.env.local")).unwrap(),
        OLD_ENV,
        "source must never be modified"
    );
}

#[test]
fn cmd_setup_dry_run_from_config() {
    let (dir, mut config) = stage();
    config.global.dry = true;
    let plan = SetupPlan::from_config(&config).unwrap();
    let mut prompt = ConsolePrompt::new(Cursor::new(b"yes\nstaging\n".to_vec()), Vec::new());

    let report = run_setup(&plan, &mut prompt, &mut Vec::new()).unwrap();

    assert!(!dir.path().join("new/.env.local").exists());
    assert_eq!(
        report.update,
        Some(UpsertOutcome::Replaced {
            key: "NEXT_PUBLIC_SANITY_DATASET".to_string(),
            lines: 1
        }),
        "dry run reports what the real run would do"
    );
    assert_eq!(
        std::fs::read_to_string(dir.path().join("old/.env.local")).unwrap(),
        OLD_ENV
    );
}
