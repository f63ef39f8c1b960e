// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Argument classification.
//!
//! Flags are recognized only ahead of the first non-flag token; from
//! that token onward the whole tail is the target argv, taken verbatim
//! (so the target program's own `-i` or `-n` are never interpreted).
//! Short flags combine, making `-in` and `-ni` spellings of `-i -n`.

use std::ffi::OsString;

use clap::Parser;
use timer_core::InvocationConfig;

#[cfg(test)]
#[path = "args_tests.rs"]
mod tests;

/// Time a program and report its elapsed, user, system and CPU time,
/// and peak resident memory.
#[derive(Debug, Parser)]
#[command(
    name = "timer",
    version,
    override_usage = "timer [options] <program_to_time> [program_arguments...]",
    long_about = "Outputs total elapsed, user, system and CPU (system+user) times, and the\n\
                  percentage of time spent in CPU, plus peak resident memory.\n\
                  \n\
                  Time units are seconds in interactive (default) mode, and microseconds in\n\
                  non-interactive mode. The report is written to stderr, and the exit status\n\
                  mirrors the timed program's own termination, including death by signal."
)]
pub struct Cli {
    /// Redirect the timed program's standard output to /dev/null
    #[arg(short = 'i', long = "ignore-output")]
    pub ignore_output: bool,

    /// Output the timing data in JSON format and microseconds.
    /// The format is { "elapsed": <v>, "user": <v>, "sys": <v>, "mem_max": <v> }
    /// with no trailing newline; CPU time and CPU% are omitted as derivable.
    #[arg(short = 'n', long = "non-interactive", verbatim_doc_comment)]
    pub non_interactive: bool,

    /// Program to time, followed by its arguments
    #[arg(
        value_name = "program_to_time",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub command: Vec<OsString>,
}

impl Cli {
    /// Split into the immutable invocation config and the target argv.
    pub fn into_parts(self) -> (InvocationConfig, Vec<OsString>) {
        (
            InvocationConfig {
                ignore_output: self.ignore_output,
                non_interactive: self.non_interactive,
            },
            self.command,
        )
    }
}
