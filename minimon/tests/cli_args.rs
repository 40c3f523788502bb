//! CLI tests for minimon: help text and the headless JSON stream.
use assert_cmd::prelude::*;
use std::process::Command;

#[test]
fn test_help_mentions_flags() {
    let output = Command::cargo_bin("minimon")
        .expect("binary exists")
        .arg("--help")
        .output()
        .expect("run minimon --help");
    assert!(output.status.success());
    let text = String::from_utf8_lossy(&output.stderr);
    assert!(
        text.contains("Usage:") && text.contains("--json") && text.contains("--count"),
        "help text missing expected flags\n{text}"
    );
}

#[test]
fn test_unknown_argument_fails() {
    Command::cargo_bin("minimon")
        .expect("binary exists")
        .arg("--bogus")
        .assert()
        .failure();
}

#[test]
fn test_json_mode_emits_one_report_per_tick() {
    let output = Command::cargo_bin("minimon")
        .expect("binary exists")
        .args(["--json", "--count", "2"])
        .output()
        .expect("run minimon --json");
    assert!(output.status.success(), "minimon --json failed: {output:?}");

    let stdout = String::from_utf8_lossy(&output.stdout);
    let reports: Vec<serde_json::Value> = stdout
        .lines()
        .map(|l| serde_json::from_str(l).expect("valid JSON line"))
        .collect();
    assert_eq!(reports.len(), 2);
    for (i, r) in reports.iter().enumerate() {
        assert_eq!(r["tick"], (i + 1) as u64);
        assert!(r["status"].is_string());
        let cpu = r["snapshot"]["metrics"]["cpu_percent"].as_f64().expect("cpu");
        assert!((0.0..=100.0).contains(&cpu));
        for key in ["disk_read_bps", "disk_write_bps", "net_down_bps", "net_up_bps"] {
            let v = r["snapshot"]["rates"][key].as_f64().expect(key);
            assert!(v.is_finite() && v >= 0.0, "{key} = {v}");
        }
    }
}
