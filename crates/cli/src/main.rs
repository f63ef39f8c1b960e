// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `timer` — time a program and report elapsed, CPU and peak-memory use.
//!
//! Pipeline: classify arguments, optionally swap stdout for /dev/null,
//! run the child inside the measurement window, render the report to
//! stderr, restore stdout, and relay the child's termination.

mod args;

use std::convert::Infallible;
use std::process;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use timer_core::{exec, relay, report, Outcome, RedirectGuard};

fn main() {
    match try_main() {
        Ok(never) => match never {},
        Err(err) => {
            eprintln!("timer: {err}");
            process::exit(1);
        }
    }
}

fn try_main() -> Result<Infallible> {
    let cli = args::Cli::parse();
    init_tracing();

    let (config, target) = cli.into_parts();
    if target.is_empty() {
        args::Cli::command().print_help()?;
        process::exit(0);
    }

    // Redirection must finish before the executor records its start
    // instant, so its overhead stays outside the measured window.
    let guard = if config.ignore_output {
        Some(RedirectGuard::redirect()?)
    } else {
        None
    };

    let measurement = exec::run(&target)?;

    if measurement.outcome == Outcome::Abnormal {
        eprintln!("Command terminated abnormally.");
    }
    match config.report_mode() {
        timer_core::ReportMode::Json => eprint!("{}", report::render_json(&measurement)),
        timer_core::ReportMode::Human => eprint!("{}", report::render_human(&measurement)),
    }

    if let Some(guard) = guard {
        guard.restore()?;
    }

    relay::exit_with(measurement.outcome)
}

fn init_tracing() {
    // Off unless RUST_LOG asks for it; events go to stderr but never
    // interleave with the report in the default configuration.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}
