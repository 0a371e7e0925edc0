// envstage: Environment File Staging Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Blocking filesystem helpers.
//!
//! ```text
//! copy:  copy_file_if_exists()  missing source is an outcome, not an error
//! write: write_atomic()         temp file in target dir --> rename
//! ```

pub mod copy;
pub mod write;
