//! The closed set of shell commands the executor is allowed to run.

use std::fmt;

/// A shell command with a hardcoded script.
///
/// No variant carries a string: request data can select a command but
/// never contributes to the script that is executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum FixedCommand {
    /// Current date and time, one line.
    Date,
    /// Calendar grid for the current month.
    Cal,
}

impl FixedCommand {
    /// The literal script passed to `sh -c`.
    #[must_use]
    pub const fn script(self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Cal => "cal",
        }
    }
}

impl fmt::Display for FixedCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.script())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripts_are_plain_program_names() {
        for command in [FixedCommand::Date, FixedCommand::Cal] {
            let script = command.script();
            assert!(
                script.bytes().all(|b| b.is_ascii_lowercase()),
                "script '{script}' must not contain shell metacharacters"
            );
        }
    }

    #[test]
    fn display_matches_script() {
        assert_eq!(FixedCommand::Date.to_string(), "date");
        assert_eq!(FixedCommand::Cal.to_string(), "cal");
    }
}
