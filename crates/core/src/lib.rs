// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! timer-core: measurement pipeline for the `timer` CLI tool.
//!
//! Runs a target program as a single child process, brackets it with a
//! monotonic measurement window, collects the child's CPU and peak-memory
//! accounting, and reproduces its termination condition as the parent's own.

pub mod config;
pub mod error;
pub mod exec;
pub mod redirect;
pub mod relay;
pub mod report;

pub use config::{InvocationConfig, ReportMode};
pub use error::TimerError;
pub use exec::{Measurement, Outcome, Usage};
pub use redirect::RedirectGuard;
