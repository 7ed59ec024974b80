//! Tool settings.
//!
//! Covers the knobs that vary per installation rather than per wizard run:
//! which interpreter command to probe, how long to wait for it, and the icon
//! attached to emitted host records. Loaded from an optional TOML file with
//! an `SSHMON_`-prefixed environment overlay.

use std::path::Path;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Installation-level settings for the wizard.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WizardSettings {
    /// Interpreter command for the Python 3 probe.
    pub python_command: String,
    /// Probe timeout in seconds.
    pub probe_timeout_secs: u64,
    /// Icon (and statusmap) image for emitted host records.
    pub icon_image: String,
}

impl Default for WizardSettings {
    fn default() -> Self {
        Self {
            python_command: "python3".to_string(),
            probe_timeout_secs: 5,
            icon_image: "windows_ssh.png".to_string(),
        }
    }
}

impl WizardSettings {
    /// Load settings from an optional config file plus the environment.
    ///
    /// Precedence, lowest to highest: built-in defaults, the file (when
    /// present), then `SSHMON_*` environment variables.
    pub fn load(file: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with_prefix(file, "SSHMON")
    }

    fn load_with_prefix(file: Option<&Path>, prefix: &str) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("python_command", "python3")?
            .set_default("probe_timeout_secs", 5i64)?
            .set_default("icon_image", "windows_ssh.png")?;

        if let Some(path) = file {
            builder = builder.add_source(File::from(path).required(false));
        }

        builder
            .add_source(Environment::with_prefix(prefix))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_apply_without_a_file() {
        let settings = WizardSettings::load(None).unwrap();
        assert_eq!(settings, WizardSettings::default());
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let settings =
            WizardSettings::load(Some(Path::new("/nonexistent/sshmon.toml"))).unwrap();
        assert_eq!(settings.python_command, "python3");
    }

    #[test]
    fn file_values_override_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "python_command = \"/opt/python3/bin/python3\"\nprobe_timeout_secs = 2"
        )
        .unwrap();

        let settings = WizardSettings::load(Some(file.path())).unwrap();
        assert_eq!(settings.python_command, "/opt/python3/bin/python3");
        assert_eq!(settings.probe_timeout_secs, 2);
        // Untouched keys keep their defaults.
        assert_eq!(settings.icon_image, "windows_ssh.png");
    }

    #[test]
    fn environment_overlay_wins_over_defaults() {
        // Distinct prefix so parallel tests reading SSHMON_* are unaffected.
        std::env::set_var("SSHMON_ENVTEST_ICON_IMAGE", "custom.png");
        let settings = WizardSettings::load_with_prefix(None, "SSHMON_ENVTEST").unwrap();
        std::env::remove_var("SSHMON_ENVTEST_ICON_IMAGE");
        assert_eq!(settings.icon_image, "custom.png");
        assert_eq!(settings.python_command, "python3");
    }
}
