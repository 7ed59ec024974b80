//! Per-stage input validation.
//!
//! Validators accumulate human-readable messages rather than stopping at the
//! first failure; a stage passes only when its message list is empty. The
//! message texts match the original wizard so existing localization keys
//! keep working.

use std::net::IpAddr;

use sshmon_types::{CheckPlan, CheckSlot};

use crate::payload::StagePayload;
use crate::probe::RuntimeProbe;

pub const MSG_NO_ADDRESS: &str = "No address specified.";
pub const MSG_INVALID_ADDRESS: &str = "Invalid address specified.";
pub const MSG_NO_USERNAME: &str = "No SSH username specified.";
pub const MSG_NO_PYTHON3: &str = "Python 3 is required to run this wizard.";

pub const MSG_VOLUME_THRESHOLDS: &str =
    "Volume Warning and Critical values are required if the drive is defined.";
pub const MSG_DISK_THRESHOLDS: &str =
    "Disk Warning and Critical values are required if the disk number is defined.";

/// Accumulated findings for one validation pass.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationOutcome {
    errors: Vec<String>,
}

impl ValidationOutcome {
    /// True when no findings were recorded - the stage may advance.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// The accumulated messages, in detection order.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Consume the outcome, yielding the messages.
    pub fn into_errors(self) -> Vec<String> {
        self.errors
    }

    fn push(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }
}

/// Stage 1: connection parameters and environment prerequisite.
///
/// The address must be a syntactically valid IPv4 or IPv6 literal, the SSH
/// username non-empty, and a Python 3 runtime detectable via the probe.
pub fn validate_stage1(payload: &StagePayload, probe: &dyn RuntimeProbe) -> ValidationOutcome {
    let mut outcome = ValidationOutcome::default();

    let address = payload.address();
    if address.is_empty() {
        outcome.push(MSG_NO_ADDRESS);
    } else if address.parse::<IpAddr>().is_err() {
        outcome.push(MSG_INVALID_ADDRESS);
    }

    if payload.username().is_empty() {
        outcome.push(MSG_NO_USERNAME);
    }

    if !probe.detect() {
        outcome.push(MSG_NO_PYTHON3);
    }

    outcome
}

/// Stage 2: threshold constraints on the check plan.
///
/// Returns the outcome together with the (possibly fixed-up) plan: Windows
/// service slots naming a service but no display name get the display name
/// copied from the service name. The fixup is data repair, not a failure.
pub fn validate_stage2(mut plan: CheckPlan) -> (CheckPlan, ValidationOutcome) {
    let mut outcome = ValidationOutcome::default();

    if plan.disk_volume.monitor.is_on() {
        for slot in plan.disk_volume.identified_slots() {
            if !present(&slot.warning) || !present(&slot.critical) {
                outcome.push(MSG_VOLUME_THRESHOLDS);
            }
        }
    }

    if plan.disk_io.monitor.is_on() {
        for slot in plan.disk_io.identified_slots() {
            if !present(&slot.warning) || !present(&slot.critical) {
                outcome.push(MSG_DISK_THRESHOLDS);
            }
        }
    }

    if plan.memory_usage.monitor.is_on() {
        check_thresholds(
            &plan.memory_usage.warning,
            &plan.memory_usage.critical,
            &ThresholdMessages {
                required: "Memory Warning and Critical values are required if Memory Usage is enabled.",
                numeric: "Memory Warning and Critical values must be numeric.",
                positive: "Memory Warning and Critical values must be positive.",
            },
            &mut outcome,
        );
    }

    if plan.cpu_load.monitor.is_on() {
        check_thresholds(
            &plan.cpu_load.warning,
            &plan.cpu_load.critical,
            &ThresholdMessages {
                required: "CPU Warning and Critical values are required if CPU Usage is enabled.",
                numeric: "CPU Warning and Critical values must be numeric.",
                positive: "CPU Warning and Critical values must be positive.",
            },
            &mut outcome,
        );
    }

    if plan.cpu_utilization.monitor.is_on() {
        check_thresholds(
            &plan.cpu_utilization.warning,
            &plan.cpu_utilization.critical,
            &ThresholdMessages {
                required: "CPU Warning and Critical values are required if CPU Usage is enabled.",
                numeric: "CPU Utilization Warning and Critical values must be numeric.",
                positive: "CPU Utilization Warning and Critical values must be positive.",
            },
            &mut outcome,
        );
    }

    for slot in &mut plan.windows_services.slots {
        if slot.identifier().is_some() && !present(&slot.display_name) {
            slot.display_name = slot.service_name.clone();
        }
    }

    (plan, outcome)
}

/// Stage 3 carries no validation of its own.
pub fn validate_stage3() -> ValidationOutcome {
    ValidationOutcome::default()
}

struct ThresholdMessages {
    required: &'static str,
    numeric: &'static str,
    positive: &'static str,
}

/// Warning/critical must be present, numeric, and non-negative.
///
/// One message per violated constraint, checked in that order; a missing
/// value reports only "required", not the follow-on numeric failure.
fn check_thresholds(
    warning: &Option<String>,
    critical: &Option<String>,
    messages: &ThresholdMessages,
    outcome: &mut ValidationOutcome,
) {
    if !present(warning) || !present(critical) {
        outcome.push(messages.required);
        return;
    }

    match (numeric(warning), numeric(critical)) {
        (Some(w), Some(c)) => {
            if w < 0.0 || c < 0.0 {
                outcome.push(messages.positive);
            }
        }
        _ => outcome.push(messages.numeric),
    }
}

fn present(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}

fn numeric(value: &Option<String>) -> Option<f64> {
    value.as_deref()?.trim().parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::default_plan;
    use crate::probe::StubProbe;
    use sshmon_types::{DiskIoSlot, DiskVolumeSlot, ServiceSlot, Toggle};

    fn payload(address: &str, username: &str) -> StagePayload {
        let mut p = StagePayload::new();
        p.set("ip_address", address);
        p.set("ssh_username", username);
        p
    }

    // ========================================================================
    // Stage 1
    // ========================================================================

    #[test]
    fn stage1_passes_for_valid_ipv4() {
        let outcome = validate_stage1(&payload("192.168.1.20", "nagios"), &StubProbe::found());
        assert!(outcome.is_ok(), "unexpected errors: {:?}", outcome.errors());
    }

    #[test]
    fn stage1_passes_for_valid_ipv6() {
        for addr in ["::1", "2001:db8::ff00:42:8329", "fe80::1"] {
            let outcome = validate_stage1(&payload(addr, "nagios"), &StubProbe::found());
            assert!(outcome.is_ok(), "{addr} should validate");
        }
    }

    #[test]
    fn stage1_rejects_malformed_addresses() {
        for addr in ["winbox", "256.1.1.1", "10.0.0", "10.0.0.5:22", "2001:::1"] {
            let outcome = validate_stage1(&payload(addr, "nagios"), &StubProbe::found());
            assert_eq!(outcome.errors(), [MSG_INVALID_ADDRESS], "{addr}");
        }
    }

    #[test]
    fn stage1_reports_missing_fields() {
        let outcome = validate_stage1(&payload("", ""), &StubProbe::found());
        assert_eq!(outcome.errors(), [MSG_NO_ADDRESS, MSG_NO_USERNAME]);
    }

    #[test]
    fn stage1_reports_missing_python3() {
        let outcome = validate_stage1(&payload("10.0.0.5", "nagios"), &StubProbe::missing());
        assert_eq!(outcome.errors(), [MSG_NO_PYTHON3]);
    }

    #[test]
    fn stage1_accumulates_all_findings() {
        let outcome = validate_stage1(&payload("not-an-ip", ""), &StubProbe::missing());
        assert_eq!(
            outcome.errors(),
            [MSG_INVALID_ADDRESS, MSG_NO_USERNAME, MSG_NO_PYTHON3]
        );
    }

    // ========================================================================
    // Stage 2: multi-instance thresholds
    // ========================================================================

    #[test]
    fn stage2_accepts_the_default_plan() {
        let (_, outcome) = validate_stage2(default_plan());
        assert!(outcome.is_ok(), "unexpected errors: {:?}", outcome.errors());
    }

    #[test]
    fn stage2_requires_volume_thresholds_when_drive_is_set() {
        let mut plan = default_plan();
        plan.disk_volume.slots[0] = DiskVolumeSlot::new("D:");
        let (_, outcome) = validate_stage2(plan);
        assert_eq!(outcome.errors(), [MSG_VOLUME_THRESHOLDS]);
    }

    #[test]
    fn stage2_ignores_slots_without_an_identifier() {
        let mut plan = default_plan();
        // Slot 1 has thresholds cleared but also no drive - not a finding.
        plan.disk_volume.slots[1] = DiskVolumeSlot::default().metric("Used");
        let (_, outcome) = validate_stage2(plan);
        assert!(outcome.is_ok());
    }

    #[test]
    fn stage2_ignores_inactive_categories() {
        let mut plan = default_plan();
        plan.disk_volume.monitor = Toggle::Off;
        plan.disk_volume.slots[0] = DiskVolumeSlot::new("D:");
        let (_, outcome) = validate_stage2(plan);
        assert!(outcome.is_ok());
    }

    #[test]
    fn stage2_requires_disk_io_thresholds_per_slot() {
        let mut plan = default_plan();
        plan.disk_io.slots[0] = DiskIoSlot::new("0");
        plan.disk_io.slots[1] = DiskIoSlot::new("1");
        let (_, outcome) = validate_stage2(plan);
        assert_eq!(outcome.errors(), [MSG_DISK_THRESHOLDS, MSG_DISK_THRESHOLDS]);
    }

    // ========================================================================
    // Stage 2: single-instance thresholds
    // ========================================================================

    #[test]
    fn stage2_memory_thresholds_must_be_present() {
        let mut plan = default_plan();
        plan.memory_usage.warning = None;
        let (_, outcome) = validate_stage2(plan);
        assert_eq!(
            outcome.errors(),
            ["Memory Warning and Critical values are required if Memory Usage is enabled."]
        );
    }

    #[test]
    fn stage2_memory_thresholds_must_be_numeric() {
        let mut plan = default_plan();
        plan.memory_usage.warning = Some("lots".into());
        let (_, outcome) = validate_stage2(plan);
        assert_eq!(
            outcome.errors(),
            ["Memory Warning and Critical values must be numeric."]
        );
    }

    #[test]
    fn stage2_memory_thresholds_must_be_non_negative() {
        let mut plan = default_plan();
        plan.memory_usage.critical = Some("-512".into());
        let (_, outcome) = validate_stage2(plan);
        assert_eq!(
            outcome.errors(),
            ["Memory Warning and Critical values must be positive."]
        );
    }

    #[test]
    fn stage2_inverted_memory_defaults_are_not_a_finding() {
        // Warning 1024 / critical 512: inverted relative to the other
        // categories but valid input.
        let (_, outcome) = validate_stage2(default_plan());
        assert!(outcome.is_ok());
    }

    #[test]
    fn stage2_cpu_load_and_utilization_validate_independently() {
        let mut plan = default_plan();
        plan.cpu_load.warning = Some("high".into());
        plan.cpu_utilization.critical = Some("-1".into());
        let (_, outcome) = validate_stage2(plan);
        assert_eq!(
            outcome.errors(),
            [
                "CPU Warning and Critical values must be numeric.",
                "CPU Utilization Warning and Critical values must be positive.",
            ]
        );
    }

    #[test]
    fn stage2_zero_thresholds_are_allowed() {
        let mut plan = default_plan();
        plan.cpu_load.warning = Some("0".into());
        plan.cpu_load.critical = Some("0".into());
        let (_, outcome) = validate_stage2(plan);
        assert!(outcome.is_ok());
    }

    // ========================================================================
    // Stage 2: display-name fixup
    // ========================================================================

    #[test]
    fn stage2_copies_service_name_to_empty_display_name() {
        let mut plan = default_plan();
        plan.windows_services.slots[1] = ServiceSlot::new("W32Time");
        let (fixed, outcome) = validate_stage2(plan);
        assert!(outcome.is_ok());
        assert_eq!(
            fixed.windows_services.slots[1].display_name.as_deref(),
            Some("W32Time")
        );
    }

    #[test]
    fn stage2_keeps_an_existing_display_name() {
        let (fixed, _) = validate_stage2(default_plan());
        assert_eq!(
            fixed.windows_services.slots[0].display_name.as_deref(),
            Some("Print Spooler")
        );
    }

    #[test]
    fn stage2_leaves_unnamed_service_slots_alone() {
        let (fixed, _) = validate_stage2(default_plan());
        // Slot 1 has no service name; the fixup must not invent one.
        assert_eq!(fixed.windows_services.slots[1].display_name, None);
    }

    // ========================================================================
    // Stage 3
    // ========================================================================

    #[test]
    fn stage3_has_no_findings() {
        assert!(validate_stage3().is_ok());
    }
}
