use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn cargo_bin() -> Command { Command::cargo_bin("bf").unwrap() }

fn source_file(content: &str) -> tempfile::NamedTempFile {
    let mut tf = tempfile::NamedTempFile::new().expect("tempfile");
    write!(tf, "{}", content).unwrap();
    tf
}

#[test]
fn scan_strategy_runs_nested_loops() {
    // 3 * 4 * 5 + 5 = 65
    let tf = source_file("+++[>++++[>+++++<-]<-]>>+++++.");
    for strategy in ["precompute", "scan"] {
        cargo_bin()
            .args(["--jumps", strategy])
            .arg(tf.path())
            .assert()
            .code(0)
            .stdout("A");
    }
}

#[test]
fn scan_strategy_tolerates_untaken_stray_close() {
    // Cell is zero at ']', so no scan happens.
    let tf = source_file(&format!("]{}.", "+".repeat(49)));
    cargo_bin()
        .args(["--jumps", "scan"])
        .arg(tf.path())
        .assert()
        .code(0)
        .stdout("1");

    cargo_bin()
        .arg(tf.path())
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty());
}

#[test]
fn scan_off_program_end_is_fatal() {
    let tf = source_file("[");
    cargo_bin()
        .args(["--jumps", "scan"])
        .arg(tf.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("no bracket matches '['"));
}

#[test]
fn scan_off_program_start_is_fatal() {
    let tf = source_file("+.]");
    cargo_bin()
        .args(["--jumps", "scan"])
        .arg(tf.path())
        .assert()
        .code(1)
        .stdout(predicate::eq(&[1u8][..]))
        .stderr(predicate::str::contains("no bracket matches ']'"));
}

#[test]
fn unknown_strategy_is_usage_error() {
    let tf = source_file("+");
    cargo_bin()
        .args(["--jumps", "jit"])
        .arg(tf.path())
        .assert()
        .code(3);
}
