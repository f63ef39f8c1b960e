//! Shared helpers for the timer CLI specs.

use assert_cmd::Command;

/// A fresh command for the built `timer` binary.
pub fn timer() -> Command {
    Command::cargo_bin("timer").unwrap_or_else(|err| panic!("timer binary not built: {err}"))
}

/// Run `timer -n` against a target and parse the stderr JSON record.
pub fn json_report(target: &[&str]) -> serde_json::Value {
    let output = timer()
        .arg("-n")
        .args(target)
        .output()
        .unwrap_or_else(|err| panic!("failed to run timer: {err}"));
    let stderr = String::from_utf8_lossy(&output.stderr);
    serde_json::from_str(&stderr)
        .unwrap_or_else(|err| panic!("stderr is not a JSON record ({err}): {stderr:?}"))
}
