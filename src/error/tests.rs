// envstage: Environment File Staging Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::{Path, PathBuf};

use super::{ConfigError, EnvFileError, FsError, PromptError};

#[test]
fn test_config_error_display() {
    let err = ConfigError::MissingKey {
        section: "paths".to_string(),
        key: "source".to_string(),
    };
    insta::assert_snapshot!(err.to_string(), @"missing required config key 'source' in section '[paths]'");
}

#[test]
fn test_env_file_error_display() {
    let err = EnvFileError::InvalidKey {
        key: "A=B".to_string(),
        reason: "keys cannot contain '='",
    };
    insta::assert_snapshot!(err.to_string(), @"invalid key 'A=B': keys cannot contain '='");
}

#[test]
fn test_prompt_error_display() {
    let err = PromptError::Closed {
        question: "Enter new dataset name".to_string(),
    };
    insta::assert_snapshot!(
        err.to_string(),
        @"input closed while waiting for an answer to 'Enter new dataset name'"
    );
}

#[test]
fn test_fs_error_path() {
    let err = FsError::Copy {
        from: PathBuf::from("/a/.env.local"),
        to: PathBuf::from("/b/.env.local"),
        source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
    };
    assert_eq!(err.path(), Path::new("/b/.env.local"));
    assert!(err.to_string().starts_with("failed to copy '/a/.env.local' to '/b/.env.local'"));
}
