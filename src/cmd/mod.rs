// envstage: Environment File Staging Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   setup, file (copy, set), config (options, inis)
//! report: status lines shared by setup and file
//! ```

pub mod config;
pub mod file;
pub mod report;
pub mod setup;

#[cfg(test)]
mod tests;
