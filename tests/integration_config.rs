// envstage: Environment File Staging Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for configuration loading.
//!
//! Tests the Config module with realistic TOML configurations.

use std::path::PathBuf;

use envstage::config::Config;
use envstage::config::loader::ConfigLoader;
use envstage::error::ConfigError;
use envstage::logging::LogLevel;

// =============================================================================
// Loading from TOML strings
// =============================================================================

#[test]
fn config_parse_empty_uses_defaults() {
    let config = Config::parse("").unwrap();

    assert_eq!(config.paths.file_name, ".env.local");
    assert_eq!(config.dataset.key, "NEXT_PUBLIC_SANITY_DATASET");
    assert!(config.paths.source.is_none());
}

#[test]
fn config_parse_full() {
    let toml = r#"
[global]
dry = true
output_log_level = 4

[paths]
source = "/home/dev/SLLWeb/social-launch-labs/.env.local"
root = "/home/dev/SLLOptimized"

[dataset]
key = "SANITY_STUDIO_DATASET"
command = "npx sanity dataset create {dataset}"
"#;
    let config = Config::parse(toml).unwrap();

    assert!(config.global.dry);
    assert_eq!(config.global.output_log_level, LogLevel::DEBUG);
    assert_eq!(
        config.paths.destination().unwrap(),
        PathBuf::from("/home/dev/SLLOptimized/.env.local")
    );
    assert_eq!(config.dataset.key, "SANITY_STUDIO_DATASET");
}

#[test]
fn config_serializes_to_json() {
    let config = Config::parse("[paths]\nroot = \"/srv/site\"\n").unwrap();
    let json = serde_json::to_value(&config).unwrap();

    assert_eq!(json["paths"]["root"], "/srv/site");
    assert_eq!(json["global"]["output_log_level"], 3);
    assert!(json["paths"].get("source").is_none());
}

// =============================================================================
// Layering
// =============================================================================

#[test]
fn config_cli_overrides_win_over_files() {
    let dir = tempfile::tempdir().unwrap();
    let ini = dir.path().join("envstage.toml");
    std::fs::write(&ini, "[paths]\nroot = \"/from/file\"\nfile_name = \".env\"\n").unwrap();

    let config = ConfigLoader::new()
        .add_toml_file(&ini)
        .apply_overrides(&["paths/root=/from/cli"])
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(config.paths.root, Some(PathBuf::from("/from/cli")));
    assert_eq!(config.paths.file_name, ".env");
}

#[test]
fn config_malformed_override_rejected() {
    let err = ConfigLoader::new()
        .apply_overrides(&["dataset.key=X"])
        .err()
        .expect("override without section separator should fail");

    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::InvalidOverride(entry)) if entry == "dataset.key=X"
    ));
}

#[test]
fn config_missing_required_ini_fails() {
    let dir = tempfile::tempdir().unwrap();
    let result = ConfigLoader::new()
        .add_toml_file(dir.path().join("absent.toml"))
        .build();

    assert!(result.is_err());
}
