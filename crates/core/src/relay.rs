// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Exit relay: reproduce the child's termination as our own.
//!
//! A signal death is relayed by resetting that signal's disposition to
//! the platform default and raising it against ourselves, so a waiting
//! shell observes a true signal death rather than a synthesized
//! 128+signal exit code.

// The disposition reset is the one place the crate needs an unsafe call:
// `nix::sys::signal::signal` is unsafe because it can install arbitrary
// handlers. We only ever install `SigDfl`.
#![allow(unsafe_code)]

use std::process;

use nix::sys::signal::{raise, signal, SigHandler, Signal};

use crate::exec::Outcome;

/// Terminate the process, reproducing `outcome`.
///
/// For `Exited` the child's code becomes ours. For `Signaled` the signal
/// is re-raised with default disposition; if it does not terminate us
/// (delivery failed, or the signal's default action is to be ignored)
/// we fall back to a generic failure exit. `Abnormal` exits with a
/// generic failure code; the warning was already printed alongside the
/// report.
pub fn exit_with(outcome: Outcome) -> ! {
    match outcome {
        Outcome::Exited(code) => process::exit(code),
        Outcome::Signaled(signo) => {
            match Signal::try_from(signo) {
                Ok(sig) => {
                    // SIGKILL and SIGSTOP dispositions are immutably
                    // default: the kernel rejects any attempt to set
                    // them, so skip the reset and raise directly.
                    if !matches!(sig, Signal::SIGKILL | Signal::SIGSTOP) {
                        // SAFETY: SigDfl installs no callback, it only
                        // restores the platform default disposition.
                        if let Err(errno) = unsafe { signal(sig, SigHandler::SigDfl) } {
                            eprintln!("signal: {errno}");
                        }
                    }
                    let _ = raise(sig);
                }
                // Outside the portable signal set (e.g. real-time
                // signals): nothing to raise, report before falling back.
                Err(_) => eprintln!("cannot relay signal {signo}"),
            }
            process::exit(1)
        }
        Outcome::Abnormal => process::exit(1),
    }
}
