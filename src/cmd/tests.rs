// envstage: Environment File Staging Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::{Path, PathBuf};

use super::report::{report_copy, report_update};
use crate::envfile::UpsertOutcome;
use crate::utility::fs::copy::CopyOutcome;

fn copy_line(outcome: &CopyOutcome, dry: bool) -> String {
    let mut out = Vec::new();
    report_copy(&mut out, outcome, dry).unwrap();
    String::from_utf8(out).unwrap()
}

fn update_line(outcome: &UpsertOutcome, dry: bool) -> String {
    let mut out = Vec::new();
    report_update(&mut out, outcome, Path::new("/srv/site/.env.local"), dry).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_report_copy() {
    let copied = CopyOutcome::Copied {
        destination: PathBuf::from("/srv/site/.env.local"),
        bytes: 42,
    };

    assert_eq!(
        copy_line(&copied, false),
        "Copied environment file to /srv/site/.env.local\n"
    );
    assert_eq!(
        copy_line(&copied, true),
        "Would copy environment file to /srv/site/.env.local (42 bytes).\n"
    );
    assert_eq!(
        copy_line(
            &CopyOutcome::SamePath {
                path: PathBuf::from("/srv/site/.env.local")
            },
            false
        ),
        "/srv/site/.env.local is both source and destination. Skipping copy.\n"
    );
}

#[test]
fn test_report_update() {
    let key = "NEXT_PUBLIC_SANITY_DATASET".to_string();

    assert_eq!(
        update_line(&UpsertOutcome::Appended { key: key.clone() }, true),
        "Would update `NEXT_PUBLIC_SANITY_DATASET` in /srv/site/.env.local.\n"
    );
    assert_eq!(
        update_line(&UpsertOutcome::Replaced { key, lines: 2 }, false),
        "Updated `NEXT_PUBLIC_SANITY_DATASET` in /srv/site/.env.local (2 lines).\n"
    );
}
