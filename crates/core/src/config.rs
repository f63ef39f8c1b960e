// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Invocation configuration built once from the argument vector.

/// Flags recognized ahead of the target program. Built by the CLI's
/// argument classifier and immutable for the rest of the run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InvocationConfig {
    /// Discard the child's standard output (`-i` / `--ignore-output`).
    pub ignore_output: bool,
    /// Report as a one-line JSON record in microseconds
    /// (`-n` / `--non-interactive`).
    pub non_interactive: bool,
}

/// Which report the formatter renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportMode {
    /// Multi-line human report, seconds.
    Human,
    /// One-line JSON record, microseconds, no trailing newline.
    Json,
}

impl InvocationConfig {
    pub fn report_mode(&self) -> ReportMode {
        if self.non_interactive {
            ReportMode::Json
        } else {
            ReportMode::Human
        }
    }
}
