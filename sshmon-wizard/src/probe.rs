//! Runtime-prerequisite detection.
//!
//! The remote check scripts need a Python 3 interpreter on the executing
//! host. Detection is an environment precondition, not wizard logic, so it
//! sits behind a trait: stage-1 validation takes any [`RuntimeProbe`], and
//! tests substitute a stub instead of spawning processes.

use std::fmt::Debug;
use std::time::Duration;

use tokio::process::Command;
use tracing::{debug, warn};

use crate::settings::WizardSettings;

/// Probe for an environment prerequisite.
pub trait RuntimeProbe: Send + Debug {
    /// Returns true when the prerequisite is available.
    ///
    /// Must not fail: any probe error means "precondition not met".
    fn detect(&self) -> bool;
}

/// One-line interpreter script printing the major version.
const PROBE_SCRIPT: &str = "import sys; print(sys.version_info[0])";

/// Detects a Python 3 interpreter by running it and parsing the reported
/// major version. Spawn failure, timeout, or unparseable output all count
/// as "not found".
#[derive(Debug, Clone)]
pub struct Python3Probe {
    command: String,
    timeout: Duration,
}

impl Python3Probe {
    /// Create a probe for the given interpreter command.
    pub fn new(command: impl Into<String>, timeout: Duration) -> Self {
        Self {
            command: command.into(),
            timeout,
        }
    }

    /// Create a probe from wizard settings.
    pub fn from_settings(settings: &WizardSettings) -> Self {
        Self::new(
            settings.python_command.clone(),
            Duration::from_secs(settings.probe_timeout_secs),
        )
    }
}

impl RuntimeProbe for Python3Probe {
    fn detect(&self) -> bool {
        let rt = match tokio::runtime::Runtime::new() {
            Ok(rt) => rt,
            Err(err) => {
                warn!(error = %err, "could not build runtime for interpreter probe");
                return false;
            }
        };

        rt.block_on(async {
            let run = Command::new(&self.command)
                .arg("-c")
                .arg(PROBE_SCRIPT)
                .kill_on_drop(true)
                .output();

            match tokio::time::timeout(self.timeout, run).await {
                Ok(Ok(output)) if output.status.success() => {
                    major_version_is_3(&output.stdout)
                }
                Ok(Ok(output)) => {
                    debug!(status = %output.status, "interpreter probe exited non-zero");
                    false
                }
                Ok(Err(err)) => {
                    debug!(command = %self.command, error = %err, "interpreter probe failed to spawn");
                    false
                }
                Err(_) => {
                    warn!(
                        command = %self.command,
                        timeout_secs = self.timeout.as_secs(),
                        "interpreter probe timed out",
                    );
                    false
                }
            }
        })
    }
}

/// Parse the probe output and require a major version of at least 3.
fn major_version_is_3(stdout: &[u8]) -> bool {
    String::from_utf8_lossy(stdout)
        .trim()
        .parse::<u32>()
        .is_ok_and(|major| major >= 3)
}

/// Fixed-answer probe for tests and offline use.
#[derive(Debug, Clone, Copy)]
pub struct StubProbe {
    available: bool,
}

impl StubProbe {
    /// A probe that always reports the prerequisite as present.
    pub const fn found() -> Self {
        Self { available: true }
    }

    /// A probe that always reports the prerequisite as missing.
    pub const fn missing() -> Self {
        Self { available: false }
    }
}

impl RuntimeProbe for StubProbe {
    fn detect(&self) -> bool {
        self.available
    }
}
