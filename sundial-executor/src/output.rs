//! Captured result of one command run.

use std::time::Duration;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::FixedCommand;

/// Output and bookkeeping for a single successful command execution.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct CommandOutput {
    /// Unique identifier for this execution, used to correlate log lines.
    pub id: Uuid,

    /// The command that ran.
    pub command: FixedCommand,

    /// Standard output, decoded lossily as UTF-8. Trailing newline is kept.
    pub stdout: String,

    /// Standard error, decoded lossily as UTF-8.
    pub stderr: String,

    /// Process exit code, `-1` if the process was killed by a signal.
    pub exit_code: i32,

    /// Timestamp when the process was started.
    pub started_at: DateTime<Utc>,

    /// Wall-clock time from spawn to exit.
    pub duration: Duration,
}

impl CommandOutput {
    /// Create a new output record with a fresh execution ID.
    #[must_use]
    pub fn new(
        command: FixedCommand,
        stdout: String,
        stderr: String,
        exit_code: i32,
        started_at: DateTime<Utc>,
        duration: Duration,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            command,
            stdout,
            stderr,
            exit_code,
            started_at,
            duration,
        }
    }
}
