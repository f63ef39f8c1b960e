//! Report format specs for both output modes.

use crate::prelude::*;

#[test]
fn non_interactive_record_has_four_numeric_fields_and_no_newline() {
    let output = timer().args(["-n", "--", "true"]).output().unwrap();
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.ends_with('\n'), "trailing newline: {stderr:?}");

    let value: serde_json::Value = serde_json::from_str(&stderr).unwrap();
    let record = value.as_object().unwrap();
    assert_eq!(record.len(), 4);
    for field in ["elapsed", "user", "sys", "mem_max"] {
        assert!(record[field].as_i64().is_some(), "field {field}: {stderr:?}");
    }

    // field order is part of the contract
    let elapsed_pos = stderr.find("\"elapsed\"").unwrap();
    let user_pos = stderr.find("\"user\"").unwrap();
    let sys_pos = stderr.find("\"sys\"").unwrap();
    let mem_pos = stderr.find("\"mem_max\"").unwrap();
    assert!(elapsed_pos < user_pos && user_pos < sys_pos && sys_pos < mem_pos);
}

#[test]
fn interactive_report_has_the_five_expected_lines() {
    let output = timer().args(["true"]).output().unwrap();
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    let lines: Vec<&str> = stderr.lines().collect();
    assert_eq!(lines.len(), 5, "stderr: {stderr:?}");
    assert!(lines[0].starts_with("CPU:     "), "line: {:?}", lines[0]);
    assert!(lines[0].ends_with(" %) "), "line: {:?}", lines[0]);
    assert!(lines[1].starts_with("user:    "), "line: {:?}", lines[1]);
    assert!(lines[1].ends_with(" s"), "line: {:?}", lines[1]);
    assert!(lines[2].starts_with("sys:     "), "line: {:?}", lines[2]);
    assert!(lines[3].starts_with("elapsed: "), "line: {:?}", lines[3]);
    assert!(lines[4].starts_with("mem_max: "), "line: {:?}", lines[4]);
    assert!(lines[4].ends_with(" KB"), "line: {:?}", lines[4]);
}

#[test]
fn seconds_render_with_exactly_three_decimals() {
    let output = timer().args(["sh", "-c", "sleep 1"]).output().unwrap();
    let stderr = String::from_utf8_lossy(&output.stderr);

    let elapsed_line = stderr
        .lines()
        .find(|l| l.starts_with("elapsed: "))
        .unwrap_or_else(|| panic!("no elapsed line: {stderr:?}"));
    let value = elapsed_line
        .trim_start_matches("elapsed: ")
        .trim_end_matches(" s");
    let (whole, frac) = value.split_once('.').unwrap();
    assert!(!whole.is_empty());
    assert_eq!(frac.len(), 3, "value: {value:?}");
}

/// Single-threaded child: its CPU time cannot meaningfully exceed the
/// wall-clock window (generous slack for scheduler accounting noise).
#[test]
fn elapsed_covers_user_plus_system() {
    let busy = "i=0; while [ $i -lt 50000 ]; do i=$((i+1)); done";
    let report = json_report(&["sh", "-c", busy]);

    let elapsed = report["elapsed"].as_u64().unwrap();
    let user = report["user"].as_u64().unwrap();
    let sys = report["sys"].as_u64().unwrap();
    assert!(
        elapsed + 50_000 >= user + sys,
        "elapsed {elapsed}us vs user {user}us + sys {sys}us"
    );
    assert!(report["mem_max"].as_u64().unwrap() > 0);
}

/// An instantaneous child must not crash the formatter even though the
/// CPU-percentage computation divides by the elapsed time.
#[test]
fn near_zero_elapsed_still_reports() {
    let output = timer().args(["true"]).output().unwrap();
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.lines().count(), 5, "stderr: {stderr:?}");
}
