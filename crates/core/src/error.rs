// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error taxonomy for the measurement pipeline.
//!
//! Every variant here is fatal to the run: a half-redirected stdout or a
//! failed wait makes the measurement window meaningless, so there is no
//! retry or partial-result path. The target program's own launch failure
//! (not found / not executable) is deliberately *not* an error — it flows
//! through [`crate::exec`] as a normal child exit with code 127 or 126.

/// Fatal failures of the measurement pipeline itself.
#[derive(Debug, thiserror::Error)]
pub enum TimerError {
    /// A descriptor operation during redirect setup or restore failed.
    #[error("{op}: {source}")]
    Setup {
        op: &'static str,
        source: std::io::Error,
    },

    /// The child process could not be created at all.
    #[error("failed to spawn `{command}`: {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },

    /// Waiting for the child failed.
    #[error("wait: {source}")]
    Wait { source: std::io::Error },

    /// Reading the children's resource accounting failed.
    #[error("getrusage: {source}")]
    Rusage { source: nix::Error },
}
