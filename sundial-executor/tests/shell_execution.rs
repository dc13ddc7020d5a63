//! Integration test: fixed commands run against the host shell.
//!
//! Only the shape of the output is checked; the content depends on the
//! clock and locale of the machine running the tests.

use std::time::{Duration, Instant};

use sundial_executor::{CommandRunner, ExecutorError, FixedCommand, ShellRunner};

fn make_runner() -> ShellRunner {
    ShellRunner::with_timeout(Duration::from_secs(10))
}

/// `date` prints exactly one non-empty line terminated by a newline.
#[tokio::test]
async fn date_prints_single_line() {
    let output = make_runner()
        .run(FixedCommand::Date)
        .await
        .unwrap_or_else(|e| panic!("date failed: {e}"));

    assert_eq!(output.command, FixedCommand::Date);
    assert_eq!(output.exit_code, 0);
    assert!(output.stdout.ends_with('\n'), "trailing newline must be preserved");
    assert_eq!(output.stdout.lines().count(), 1, "date output: {:?}", output.stdout);
    assert!(!output.stdout.trim().is_empty(), "date output must not be blank");
}

/// Two runs of the same command get distinct execution IDs.
#[tokio::test]
async fn executions_get_distinct_ids() {
    let runner = make_runner();
    let first = runner
        .run(FixedCommand::Date)
        .await
        .unwrap_or_else(|e| panic!("first run failed: {e}"));
    let second = runner
        .run(FixedCommand::Date)
        .await
        .unwrap_or_else(|e| panic!("second run failed: {e}"));

    assert_ne!(first.id, second.id);
    assert!(second.started_at >= first.started_at);
}

/// `cal` prints a multi-line grid: a header, a weekday row, and week rows.
#[tokio::test]
#[ignore = "requires the `cal` binary (util-linux or bsdmainutils)"]
async fn cal_prints_multi_line_grid() {
    let output = make_runner()
        .run(FixedCommand::Cal)
        .await
        .unwrap_or_else(|e| panic!("cal failed: {e}"));

    let lines: Vec<&str> = output.stdout.lines().collect();
    assert!(lines.len() >= 6, "expected header, weekdays and weeks, got {lines:?}");
    assert!(
        lines.iter().skip(2).any(|l| l.split_whitespace().any(|d| d == "1")),
        "calendar grid must contain day 1: {lines:?}"
    );
}

/// A shell that exits unsuccessfully surfaces as `NonZeroExit`.
#[tokio::test]
async fn failing_shell_reports_non_zero_exit() {
    let runner = make_runner().shell("false");
    match runner.run(FixedCommand::Date).await {
        Err(ExecutorError::NonZeroExit { command, code, .. }) => {
            assert_eq!(command, FixedCommand::Date);
            assert_eq!(code, Some(1));
        }
        other => panic!("expected NonZeroExit, got {other:?}"),
    }
}

/// A command outliving the timeout is abandoned and reported as `Timeout`.
#[cfg(unix)]
#[tokio::test]
async fn slow_shell_reports_timeout() {
    use std::os::unix::fs::PermissionsExt;

    let script = std::env::temp_dir().join(format!("sundial-slow-shell-{}.sh", std::process::id()));
    std::fs::write(&script, "#!/bin/sh\nsleep 5\n")
        .unwrap_or_else(|e| panic!("failed to write script: {e}"));
    std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755))
        .unwrap_or_else(|e| panic!("failed to chmod script: {e}"));

    let runner = ShellRunner::with_timeout(Duration::from_millis(200)).shell(&script);

    // A concurrent fork can briefly hold the freshly written file open (ETXTBSY).
    let mut attempts = 0;
    let (result, elapsed) = loop {
        let start = Instant::now();
        let result = runner.run(FixedCommand::Date).await;
        attempts += 1;
        match result {
            Err(ExecutorError::SpawnFailed { .. }) if attempts < 5 => {
                tokio::time::sleep(Duration::from_millis(50)).await;
            }
            other => break (other, start.elapsed()),
        }
    };
    let _ = std::fs::remove_file(&script);

    match result {
        Err(ExecutorError::Timeout { command, timeout }) => {
            assert_eq!(command, FixedCommand::Date);
            assert_eq!(timeout, Duration::from_millis(200));
        }
        other => panic!("expected Timeout, got {other:?}"),
    }
    assert!(
        elapsed < Duration::from_secs(2),
        "timeout must fire well before the script finishes, took {elapsed:?}"
    );
}
