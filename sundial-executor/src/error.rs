//! Error types for the executor crate.

use std::time::Duration;

use crate::FixedCommand;

/// Errors that can occur while running a fixed command.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ExecutorError {
    /// The shell process could not be started.
    #[error("failed to spawn `{command}`: {source}")]
    SpawnFailed {
        command: FixedCommand,
        #[source]
        source: std::io::Error,
    },

    /// The command did not finish within the configured timeout.
    #[error("`{command}` timed out after {}ms", .timeout.as_millis())]
    Timeout { command: FixedCommand, timeout: Duration },

    /// The command ran but exited unsuccessfully.
    #[error("`{command}` exited with status {code:?}: {stderr}")]
    NonZeroExit {
        command: FixedCommand,
        code: Option<i32>,
        stderr: String,
    },
}
