// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Timed child-process execution.
//!
//! Spawns the target argv as the run's single child, blocks in `wait` for
//! the whole of its lifetime, and reads the children-scoped rusage
//! accounting immediately after the wait returns. Because exactly one
//! child is ever created per run, `RUSAGE_CHILDREN` is attributable to
//! that child alone.

use std::ffi::{OsStr, OsString};
use std::io;
use std::os::unix::process::ExitStatusExt;
use std::process::{Command, ExitStatus};
use std::time::{Duration, Instant};

use nix::sys::resource::{getrusage, UsageWho};

use crate::error::TimerError;

#[cfg(test)]
#[path = "exec_tests.rs"]
mod tests;

/// How the child ended. Downstream code never inspects raw wait-status
/// bits; this is the only classification of the child's termination.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Normal exit with the given code.
    Exited(i32),
    /// Killed by the given signal.
    Signaled(i32),
    /// Terminated, but neither a normal exit nor a signal death.
    Abnormal,
}

/// CPU time and peak memory the child consumed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Usage {
    pub user: Duration,
    pub system: Duration,
    /// Peak resident set size in kilobytes, as reported by the kernel.
    pub max_rss_kb: i64,
}

/// Everything one run of the child produced.
#[derive(Clone, Copy, Debug)]
pub struct Measurement {
    /// Wall-clock span from just before process creation to just after
    /// the wait returned.
    pub elapsed: Duration,
    pub usage: Usage,
    pub outcome: Outcome,
}

/// Run `argv` as a child process and measure it.
///
/// A launch failure is not a pipeline error: an unresolvable command
/// reports itself on stderr and becomes `Exited(127)`, an unexecutable
/// one `Exited(126)`, matching shell conventions. Only process-creation
/// failures of any other kind, and wait failures, are fatal.
pub fn run(argv: &[OsString]) -> Result<Measurement, TimerError> {
    let (program, args) = argv
        .split_first()
        .map(|(p, rest)| (p.as_os_str(), rest))
        .unwrap_or((OsStr::new(""), &[]));

    let start = Instant::now();

    let status = match Command::new(program).args(args).spawn() {
        Ok(mut child) => {
            tracing::debug!(program = %program.to_string_lossy(), pid = child.id(), "spawned");
            Ok(child
                .wait()
                .map_err(|source| TimerError::Wait { source })?)
        }
        Err(err) => match launch_exit_code(&err) {
            Some(code) => {
                eprintln!("{}: {}", program.to_string_lossy(), err);
                Err(code)
            }
            None => {
                return Err(TimerError::Spawn {
                    command: program.to_string_lossy().into_owned(),
                    source: err,
                });
            }
        },
    };

    let elapsed = start.elapsed();

    let rusage = getrusage(UsageWho::RUSAGE_CHILDREN)
        .map_err(|source| TimerError::Rusage { source })?;
    let usage = Usage {
        user: timeval_duration(rusage.user_time()),
        system: timeval_duration(rusage.system_time()),
        max_rss_kb: rusage.max_rss(),
    };

    let outcome = match status {
        Ok(status) => classify(status),
        // The launch failure stands in for the child exiting 127/126.
        Err(code) => Outcome::Exited(code),
    };

    tracing::debug!(?outcome, elapsed_us = elapsed.as_micros() as u64, "child terminated");

    Ok(Measurement {
        elapsed,
        usage,
        outcome,
    })
}

/// Shell-convention exit code for a spawn error that means the target
/// itself could not be launched, or `None` for a genuine tool failure.
fn launch_exit_code(err: &io::Error) -> Option<i32> {
    match err.kind() {
        io::ErrorKind::NotFound => Some(127),
        io::ErrorKind::PermissionDenied => Some(126),
        _ => None,
    }
}

fn classify(status: ExitStatus) -> Outcome {
    if let Some(signal) = status.signal() {
        Outcome::Signaled(signal)
    } else if let Some(code) = status.code() {
        Outcome::Exited(code)
    } else {
        Outcome::Abnormal
    }
}

#[allow(clippy::cast_sign_loss)]
fn timeval_duration(tv: nix::sys::time::TimeVal) -> Duration {
    Duration::new(tv.tv_sec() as u64, tv.tv_usec() as u32 * 1000)
}
