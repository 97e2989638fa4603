#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn kmercorpus_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_kmercorpus"))
}

const FIXTURES: [&str; 5] = [
    "tests/fixtures/one.fa",
    "tests/fixtures/two.fa",
    "tests/fixtures/plasmid.fa",
    "tests/fixtures/headerless.fa",
    "tests/fixtures/short.fa",
];

/// Runs the binary with `args`, feeding `stdin` and waiting for it to exit.
fn run_with_stdin(args: &[&str], stdin: &str) -> Output {
    let mut child = kmercorpus_cmd()
        .args(args)
        .env("NO_COLOR", "1")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn");

    child
        .stdin
        .as_mut()
        .unwrap()
        .write_all(stdin.as_bytes())
        .expect("Failed to write to stdin");

    child.wait_with_output().expect("Failed to wait")
}

#[test]
fn cli_help_flag() {
    let output = kmercorpus_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("kmercorpus"));
    assert!(stdout.contains("k-mer"));
}

#[test]
fn cli_version_flag() {
    let output = kmercorpus_cmd()
        .arg("--version")
        .output()
        .expect("Failed to execute");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn cli_invalid_k() {
    let mut args = vec!["-k", "17"];
    args.extend(FIXTURES);
    let output = kmercorpus_cmd().args(&args).output().expect("Failed to execute");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("out of range"));
}

#[test]
fn cli_non_numeric_k() {
    let output = kmercorpus_cmd()
        .args(["-k", "abc", "a.fa"])
        .output()
        .expect("Failed to execute");
    assert!(!output.status.success());
}

#[test]
fn cli_too_few_files() {
    let output = run_with_stdin(&FIXTURES[..3], "");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("at least 5 FASTA files are required, got 3"));
    // Nothing was analyzed.
    assert!(!String::from_utf8_lossy(&output.stdout).contains("=="));
}

#[test]
fn cli_missing_file() {
    let mut args = FIXTURES.to_vec();
    args[0] = "tests/fixtures/nope.fa";
    let output = run_with_stdin(&args, "8\nsalir\n");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("nope.fa"));
}

#[test]
fn cli_full_session() {
    let output = run_with_stdin(&FIXTURES, "8\nacgtacgt\nSALIR\n");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.contains("plasmid.fa has several headers"));
    assert!(stdout.contains("== Global frequencies =="));
    assert!(stdout.contains("TTTTTTTT   3"));
    assert!(stdout.contains("== File: tests/fixtures/short.fa =="));
    assert!(stdout.contains("The k-mer ACGTACGT occurs 2 times in 2 files:"));
    assert!(stdout.contains(" - tests/fixtures/one.fa: 1 time"));
    assert!(stdout.contains("Done."));
}

#[test]
fn cli_json_quiet() {
    let mut args = vec!["-k", "8", "--format", "json", "--top", "1", "--quiet"];
    args.extend(FIXTURES);
    let output = run_with_stdin(&args, "salir\n");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(!stdout.contains("[Notice]"));
    assert!(stdout.contains("\"title\": \"Global frequencies\""));
    assert!(stdout.contains("\"kmer\": \"TTTTTTTT\""));
}

#[test]
fn cli_input_closed_while_prompting_k() {
    let output = run_with_stdin(&FIXTURES, "");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("input closed"));
}
