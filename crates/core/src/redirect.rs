// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Standard-output redirection to /dev/null for `--ignore-output`.
//!
//! Redirection must run to completion before the executor records its
//! start instant: the dup/open/dup2 overhead would otherwise land inside
//! the measured window. The child inherits the process file table, so
//! swapping fd 1 here is all that is needed to silence it.

use std::fs::OpenOptions;
use std::io;
use std::os::fd::{AsFd, AsRawFd, OwnedFd};

use crate::error::TimerError;

/// Saved duplicate of the original stdout descriptor, held while fd 1
/// points at /dev/null.
#[derive(Debug)]
pub struct RedirectGuard {
    saved: OwnedFd,
}

impl RedirectGuard {
    /// Duplicate the current stdout, then point fd 1 at /dev/null.
    ///
    /// The temporary /dev/null descriptor is closed before returning;
    /// only the saved copy of the original stdout stays open.
    pub fn redirect() -> Result<Self, TimerError> {
        let stdout = io::stdout();
        let saved = stdout
            .as_fd()
            .try_clone_to_owned()
            .map_err(|source| TimerError::Setup { op: "dup", source })?;

        let devnull = OpenOptions::new()
            .write(true)
            .open("/dev/null")
            .map_err(|source| TimerError::Setup { op: "open", source })?;

        nix::unistd::dup2(devnull.as_raw_fd(), stdout.as_raw_fd()).map_err(|errno| {
            TimerError::Setup {
                op: "dup2",
                source: io::Error::from(errno),
            }
        })?;
        // devnull drops here, closing the temporary descriptor

        tracing::debug!(saved_fd = saved.as_raw_fd(), "stdout redirected to /dev/null");
        Ok(Self { saved })
    }

    /// Point fd 1 back at the saved descriptor and release the copy.
    pub fn restore(self) -> Result<(), TimerError> {
        nix::unistd::dup2(self.saved.as_raw_fd(), io::stdout().as_raw_fd()).map_err(|errno| {
            TimerError::Setup {
                op: "dup2",
                source: io::Error::from(errno),
            }
        })?;
        tracing::debug!("stdout restored");
        Ok(())
        // self.saved drops here, closing the copy
    }
}
