// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Report rendering for both output modes.
//!
//! The CLI writes either rendering to stderr so the timing data stays
//! visible even when the child's own output (or its /dev/null stand-in)
//! occupies stdout.

use std::time::Duration;

use crate::exec::Measurement;

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;

const MICROS_PER_SEC: f64 = 1e6;

/// One-line JSON record in integer microseconds (memory in KB).
///
/// Field order is fixed and there is no trailing newline. CPU time and
/// CPU percentage are omitted: both are derivable from the fields given.
pub fn render_json(m: &Measurement) -> String {
    format!(
        "{{ \"elapsed\": {}, \"user\": {}, \"sys\": {}, \"mem_max\": {} }}",
        m.elapsed.as_micros(),
        m.usage.user.as_micros(),
        m.usage.system.as_micros(),
        m.usage.max_rss_kb,
    )
}

/// Five-line human report in seconds, each value rounded to three
/// decimal places.
///
/// The CPU percentage divides by the elapsed time without a zero guard;
/// for a child that terminates instantaneously the rendered value is
/// `inf` or `NaN` rather than a crash. Accepted edge case.
pub fn render_human(m: &Measurement) -> String {
    let elapsed = secs(m.elapsed);
    let user = secs(m.usage.user);
    let sys = secs(m.usage.system);
    let cpu = user + sys;
    let cpu_percent = 100.0 * cpu / elapsed;

    format!(
        "CPU:     {:.3} s ({:.3} %) \n\
         user:    {:.3} s\n\
         sys:     {:.3} s\n\
         elapsed: {:.3} s\n\
         mem_max: {} KB\n",
        round3(cpu),
        round3(cpu_percent),
        round3(user),
        round3(sys),
        round3(elapsed),
        m.usage.max_rss_kb,
    )
}

fn secs(d: Duration) -> f64 {
    d.as_micros() as f64 / MICROS_PER_SEC
}

/// Round to three decimal places, half away from zero.
fn round3(v: f64) -> f64 {
    (v * 1000.0).round() / 1000.0
}
