//! Fixed-command execution for the Sundial API.
//!
//! Runs a closed set of literal shell commands in a subprocess and captures
//! their output.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod backend;
pub mod command;
pub mod error;
pub mod output;
pub mod runner;

pub use backend::CommandRunner;
pub use command::FixedCommand;
pub use error::ExecutorError;
pub use output::CommandOutput;
pub use runner::{ShellRunner, DEFAULT_SHELL, DEFAULT_TIMEOUT};
