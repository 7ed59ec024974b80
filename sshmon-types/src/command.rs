//! Structured check-command specs.
//!
//! The monitoring engine receives each service check as a single templated
//! invocation string (`check_<name>_by_ssh! -H <addr> -u <user> -a '<flags>'`).
//! Building that string from a flag list in one place keeps the quoting in a
//! single renderer instead of scattered concatenation.

use core::fmt;

/// One `-flag value` pair inside the quoted argument block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandArg {
    pub flag: &'static str,
    pub value: String,
}

/// A check-command invocation bound to a host and SSH user.
///
/// # Example
///
/// ```rust
/// use sshmon_types::CheckCommand;
///
/// let cmd = CheckCommand::new("check_cpu_usage_by_ssh", "10.0.0.5", "nagios")
///     .arg("-warning", "80")
///     .arg("-critical", "90");
///
/// assert_eq!(
///     cmd.render(),
///     "check_cpu_usage_by_ssh! -H 10.0.0.5 -u nagios -a '-warning 80 -critical 90'",
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckCommand {
    /// Check-command template name (without the `!` separator).
    pub name: &'static str,
    /// Target host address.
    pub host: String,
    /// SSH username on the target.
    pub username: String,
    /// Ordered flag list for the quoted `-a` block.
    pub args: Vec<CommandArg>,
}

impl CheckCommand {
    /// Create a command with no arguments yet.
    pub fn new(name: &'static str, host: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            name,
            host: host.into(),
            username: username.into(),
            args: Vec::new(),
        }
    }

    /// Append a `-flag value` pair.
    pub fn arg(mut self, flag: &'static str, value: impl Into<String>) -> Self {
        self.args.push(CommandArg {
            flag,
            value: value.into(),
        });
        self
    }

    /// Append a `-flag value` pair only when `condition` holds.
    pub fn arg_if(self, condition: bool, flag: &'static str, value: impl Into<String>) -> Self {
        if condition {
            self.arg(flag, value)
        } else {
            self
        }
    }

    /// Render the full invocation string.
    pub fn render(&self) -> String {
        let flags = self
            .args
            .iter()
            .map(|a| format!("{} {}", a.flag, a.value))
            .collect::<Vec<_>>()
            .join(" ");
        format!(
            "{}! -H {} -u {} -a '{}'",
            self.name, self.host, self.username, flags
        )
    }
}

impl fmt::Display for CheckCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
