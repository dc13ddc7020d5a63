//! Shell runner: executes a fixed command through `sh -c` on the host.

use std::{
    path::PathBuf,
    process::Stdio,
    time::{Duration, Instant},
};

use async_trait::async_trait;
use chrono::Utc;

use crate::{CommandOutput, CommandRunner, ExecutorError, FixedCommand};

/// Default execution timeout: 10 seconds per command.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Shell binary used unless configured otherwise.
pub const DEFAULT_SHELL: &str = "sh";

/// Runs fixed commands in a host subprocess.
///
/// The runner:
/// 1. Spawns `<shell> -c <script>` with stdin closed
/// 2. Captures stdout and stderr
/// 3. Fails on spawn error, timeout, or non-zero exit
///
/// # Cancel Safety
/// Cancel safe. Dropping the future kills the child via `kill_on_drop`.
#[derive(Debug, Clone)]
pub struct ShellRunner {
    shell: PathBuf,
    timeout: Duration,
}

impl ShellRunner {
    /// Create a runner using `sh` and [`DEFAULT_TIMEOUT`].
    #[must_use]
    pub fn new() -> Self {
        Self { shell: PathBuf::from(DEFAULT_SHELL), timeout: DEFAULT_TIMEOUT }
    }

    /// Create a runner with a custom execution timeout.
    #[must_use]
    pub fn with_timeout(timeout: Duration) -> Self {
        Self { timeout, ..Self::new() }
    }

    /// Use a different shell binary.
    #[must_use]
    pub fn shell(mut self, shell: impl Into<PathBuf>) -> Self {
        self.shell = shell.into();
        self
    }

    /// The configured timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Default for ShellRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CommandRunner for ShellRunner {
    async fn run(&self, command: FixedCommand) -> Result<CommandOutput, ExecutorError> {
        let started_at = Utc::now();
        let wall_start = Instant::now();

        tracing::debug!(%command, shell = %self.shell.display(), "spawning command");

        let output = tokio::time::timeout(
            self.timeout,
            tokio::process::Command::new(&self.shell)
                .arg("-c")
                .arg(command.script())
                .stdin(Stdio::null())
                .kill_on_drop(true)
                .output(),
        )
        .await
        .map_err(|_| ExecutorError::Timeout { command, timeout: self.timeout })?
        .map_err(|source| ExecutorError::SpawnFailed { command, source })?;

        let duration = wall_start.elapsed();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if !output.status.success() {
            return Err(ExecutorError::NonZeroExit {
                command,
                code: output.status.code(),
                stderr,
            });
        }

        let record = CommandOutput::new(
            command,
            String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr,
            output.status.code().unwrap_or(-1),
            started_at,
            duration,
        );

        tracing::info!(
            execution_id = %record.id,
            %command,
            exit_code = record.exit_code,
            stdout_bytes = record.stdout.len(),
            elapsed_ms = duration.as_millis(),
            "command execution complete"
        );

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_uses_default_timeout() {
        assert_eq!(ShellRunner::new().timeout(), DEFAULT_TIMEOUT);
    }

    #[test]
    fn with_timeout_overrides_only_timeout() {
        let runner = ShellRunner::with_timeout(Duration::from_millis(250));
        assert_eq!(runner.timeout(), Duration::from_millis(250));
        assert_eq!(runner.shell, PathBuf::from(DEFAULT_SHELL));
    }

    #[tokio::test]
    async fn missing_shell_reports_spawn_failure() {
        let runner = ShellRunner::new().shell("/nonexistent/sundial-shell");
        match runner.run(FixedCommand::Date).await {
            Err(ExecutorError::SpawnFailed { command, .. }) => {
                assert_eq!(command, FixedCommand::Date);
            }
            other => panic!("expected SpawnFailed, got {other:?}"),
        }
    }
}
