//! Command runner abstraction trait.
//!
//! Lets the HTTP layer run fixed commands without knowing whether they go
//! to a real shell or a test double.

use std::fmt;

use async_trait::async_trait;

use crate::{CommandOutput, ExecutorError, FixedCommand};

/// Runs [`FixedCommand`]s and captures their output.
///
/// Implementations must be `Send + Sync` to allow sharing across request
/// handlers.
///
/// # Cancel Safety
/// Implementations must not leave a child process running if the future is
/// dropped before completion.
#[async_trait]
pub trait CommandRunner: Send + Sync + fmt::Debug {
    /// Run `command` to completion.
    ///
    /// # Errors
    /// Returns [`ExecutorError::SpawnFailed`] if the process cannot start,
    /// [`ExecutorError::Timeout`] if it runs too long, and
    /// [`ExecutorError::NonZeroExit`] if it exits unsuccessfully.
    async fn run(&self, command: FixedCommand) -> Result<CommandOutput, ExecutorError>;
}
