//! Checks on a finished `casetally` invocation.

use std::process::Output;

/// Captured `(stdout, stderr)` of a finished command.
pub fn streams(output: &Output) -> (String, String) {
    (
        String::from_utf8_lossy(&output.stdout).into_owned(),
        String::from_utf8_lossy(&output.stderr).into_owned(),
    )
}

pub fn stdout(output: &Output) -> String {
    streams(output).0
}

pub fn stderr(output: &Output) -> String {
    streams(output).1
}

/// The command exited 0; otherwise panic with both streams.
pub fn assert_success(output: &Output) {
    if !output.status.success() {
        let (out, err) = streams(output);
        panic!(
            "casetally exited with {}\n--- stdout\n{}--- stderr\n{}",
            output.status, out, err
        );
    }
}

/// The command exited non-zero.
pub fn assert_failure(output: &Output) {
    if output.status.success() {
        let (out, _) = streams(output);
        panic!("casetally succeeded unexpectedly\n--- stdout\n{}", out);
    }
}

pub fn assert_stdout_contains(output: &Output, needle: &str) {
    expect_in("stdout", &stdout(output), needle);
}

pub fn assert_stderr_contains(output: &Output, needle: &str) {
    expect_in("stderr", &stderr(output), needle);
}

fn expect_in(stream: &str, text: &str, needle: &str) {
    assert!(
        text.contains(needle),
        "{} does not contain {:?}\n--- {}\n{}",
        stream,
        needle,
        stream,
        text
    );
}
