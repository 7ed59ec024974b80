//! The check plan - which checks to deploy against a remote Windows host.
//!
//! A [`CheckPlan`] is the configuration tree carried between wizard stages.
//! Each check category is a fixed record with explicit optional fields; form
//! values (including numeric thresholds) are kept as strings until validation.
//! Field names in the serialized form match the original wizard's form-field
//! keys (`outputType`, `disk_number`, ...).

use crate::Toggle;

/// Returns true if an optional form value is present and non-empty.
pub(crate) fn filled(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}

/// A settings record for one instance of a multi-instance check category.
///
/// Multi-instance categories (disk volumes, disk I/O, Windows services and
/// processes) carry an ordered list of slots. A slot only produces a check
/// when its identifying field is filled in; a slot the user left entirely
/// blank is dropped by the pruner before final serialization.
pub trait CheckSlot {
    /// The primary identifying field (drive letter, disk number, service
    /// name, process name), if non-empty.
    fn identifier(&self) -> Option<&str>;

    /// True when every field of the slot is empty.
    fn is_blank(&self) -> bool;
}

/// A multi-instance check category: activation toggle plus ordered slots.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MultiCheck<T> {
    /// Whether the category is deployed at all.
    #[cfg_attr(feature = "serde", serde(default))]
    pub monitor: Toggle,
    /// Per-instance settings, in form order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub slots: Vec<T>,
}

impl<T: CheckSlot> MultiCheck<T> {
    /// Slots that identify a concrete check target.
    ///
    /// Only these produce service records; the category toggle must also be
    /// on for any of them to compile.
    pub fn identified_slots(&self) -> impl Iterator<Item = &T> {
        self.slots.iter().filter(|s| s.identifier().is_some())
    }

    /// Drop every slot the user left entirely blank. Idempotent.
    pub fn prune(&mut self) {
        self.slots.retain(|s| !s.is_blank());
    }
}

/// A host-level reachability check (ping or tcp). Toggle only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HostCheck {
    pub monitor: Toggle,
}

impl HostCheck {
    /// An enabled host check.
    pub const fn on() -> Self {
        Self { monitor: Toggle::On }
    }

    /// A disabled host check.
    pub const fn off() -> Self {
        Self { monitor: Toggle::Off }
    }
}

/// One monitored disk volume (drive letter plus usage thresholds).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DiskVolumeSlot {
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub drive: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub warning: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub critical: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "outputType", skip_serializing_if = "Option::is_none")
    )]
    pub output_type: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub metric: Option<String>,
}

impl DiskVolumeSlot {
    /// Create a slot for the given drive letter.
    pub fn new(drive: impl Into<String>) -> Self {
        Self {
            drive: Some(drive.into()),
            ..Default::default()
        }
    }

    pub fn warning(mut self, value: impl Into<String>) -> Self {
        self.warning = Some(value.into());
        self
    }

    pub fn critical(mut self, value: impl Into<String>) -> Self {
        self.critical = Some(value.into());
        self
    }

    pub fn output_type(mut self, value: impl Into<String>) -> Self {
        self.output_type = Some(value.into());
        self
    }

    pub fn metric(mut self, value: impl Into<String>) -> Self {
        self.metric = Some(value.into());
        self
    }
}

impl CheckSlot for DiskVolumeSlot {
    fn identifier(&self) -> Option<&str> {
        self.drive.as_deref().filter(|d| !d.is_empty())
    }

    fn is_blank(&self) -> bool {
        !filled(&self.drive)
            && !filled(&self.warning)
            && !filled(&self.critical)
            && !filled(&self.output_type)
            && !filled(&self.metric)
    }
}

/// One monitored physical disk (I/O usage by disk number).
///
/// `"0"` is a valid disk number and counts as an identifier.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DiskIoSlot {
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub disk_number: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub warning: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub critical: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub metric: Option<String>,
}

impl DiskIoSlot {
    /// Create a slot for the given disk number.
    pub fn new(disk_number: impl Into<String>) -> Self {
        Self {
            disk_number: Some(disk_number.into()),
            ..Default::default()
        }
    }

    pub fn warning(mut self, value: impl Into<String>) -> Self {
        self.warning = Some(value.into());
        self
    }

    pub fn critical(mut self, value: impl Into<String>) -> Self {
        self.critical = Some(value.into());
        self
    }

    pub fn metric(mut self, value: impl Into<String>) -> Self {
        self.metric = Some(value.into());
        self
    }
}

impl CheckSlot for DiskIoSlot {
    fn identifier(&self) -> Option<&str> {
        self.disk_number.as_deref().filter(|n| !n.is_empty())
    }

    fn is_blank(&self) -> bool {
        !filled(&self.disk_number)
            && !filled(&self.warning)
            && !filled(&self.critical)
            && !filled(&self.metric)
    }
}

/// One monitored Windows service (by registry name, with an expected state).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ServiceSlot {
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub service_name: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub display_name: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub expected_state: Option<String>,
}

impl ServiceSlot {
    /// Create a slot for the given service name.
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: Some(service_name.into()),
            ..Default::default()
        }
    }

    pub fn display_name(mut self, value: impl Into<String>) -> Self {
        self.display_name = Some(value.into());
        self
    }

    pub fn expected_state(mut self, value: impl Into<String>) -> Self {
        self.expected_state = Some(value.into());
        self
    }
}

impl CheckSlot for ServiceSlot {
    fn identifier(&self) -> Option<&str> {
        self.service_name.as_deref().filter(|n| !n.is_empty())
    }

    fn is_blank(&self) -> bool {
        !filled(&self.service_name)
            && !filled(&self.display_name)
            && !filled(&self.expected_state)
    }
}

/// One monitored Windows process (by image name, with a resource metric).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ProcessSlot {
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub process_name: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub display_name: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub metric: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "outputType", skip_serializing_if = "Option::is_none")
    )]
    pub output_type: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub warning: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub critical: Option<String>,
}

impl ProcessSlot {
    /// Create a slot for the given process name.
    pub fn new(process_name: impl Into<String>) -> Self {
        Self {
            process_name: Some(process_name.into()),
            ..Default::default()
        }
    }

    pub fn display_name(mut self, value: impl Into<String>) -> Self {
        self.display_name = Some(value.into());
        self
    }

    pub fn metric(mut self, value: impl Into<String>) -> Self {
        self.metric = Some(value.into());
        self
    }

    pub fn output_type(mut self, value: impl Into<String>) -> Self {
        self.output_type = Some(value.into());
        self
    }

    pub fn warning(mut self, value: impl Into<String>) -> Self {
        self.warning = Some(value.into());
        self
    }

    pub fn critical(mut self, value: impl Into<String>) -> Self {
        self.critical = Some(value.into());
        self
    }
}

impl CheckSlot for ProcessSlot {
    fn identifier(&self) -> Option<&str> {
        self.process_name.as_deref().filter(|n| !n.is_empty())
    }

    fn is_blank(&self) -> bool {
        !filled(&self.process_name)
            && !filled(&self.display_name)
            && !filled(&self.metric)
            && !filled(&self.output_type)
            && !filled(&self.warning)
            && !filled(&self.critical)
    }
}

/// CPU load-average check (single instance).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CpuLoadCheck {
    pub monitor: Toggle,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub warning: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub critical: Option<String>,
}

/// CPU utilization check via performance counters (single instance).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CpuUtilizationCheck {
    pub monitor: Toggle,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub warning: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub critical: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub metric: Option<String>,
}

/// Memory usage check (single instance).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MemoryUsageCheck {
    pub monitor: Toggle,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub warning: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub critical: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub metric: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "outputType", skip_serializing_if = "Option::is_none")
    )]
    pub output_type: Option<String>,
}

/// The full configuration tree carried between wizard stages.
///
/// Categories are compiled in a fixed order (host check first, then disk
/// volumes, CPU, disk I/O, Windows services, memory, processes); the struct
/// layout mirrors that order. [`CheckPlan::default`] is the all-off empty
/// plan - the wizard's built-in starting selection lives in the defaulting
/// engine, not here.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CheckPlan {
    /// ICMP host check; when on, the host record uses the ICMP template.
    pub ping: HostCheck,
    /// TCP host check; the fallback host template when ping is off.
    pub tcp: HostCheck,
    pub disk_volume: MultiCheck<DiskVolumeSlot>,
    pub cpu_load: CpuLoadCheck,
    pub cpu_utilization: CpuUtilizationCheck,
    pub disk_io: MultiCheck<DiskIoSlot>,
    pub windows_services: MultiCheck<ServiceSlot>,
    pub memory_usage: MemoryUsageCheck,
    pub windows_processes: MultiCheck<ProcessSlot>,
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // CheckSlot identification
    // ========================================================================

    #[test]
    fn disk_volume_identifier_is_drive() {
        let slot = DiskVolumeSlot::new("C:").warning("65");
        assert_eq!(slot.identifier(), Some("C:"));

        let unnamed = DiskVolumeSlot::default().warning("65").critical("100");
        assert_eq!(unnamed.identifier(), None);
    }

    #[test]
    fn empty_string_identifier_counts_as_absent() {
        let slot = DiskVolumeSlot::new("");
        assert_eq!(slot.identifier(), None);
    }

    #[test]
    fn disk_io_zero_is_a_valid_identifier() {
        // Disk numbering starts at 0; "0" must not be treated as empty.
        let slot = DiskIoSlot::new("0");
        assert_eq!(slot.identifier(), Some("0"));
    }

    #[test]
    fn service_and_process_identifiers() {
        assert_eq!(ServiceSlot::new("Spooler").identifier(), Some("Spooler"));
        assert_eq!(ServiceSlot::default().identifier(), None);
        assert_eq!(ProcessSlot::new("notepad").identifier(), Some("notepad"));
        assert_eq!(ProcessSlot::default().identifier(), None);
    }

    // ========================================================================
    // Blankness
    // ========================================================================

    #[test]
    fn default_slots_are_blank() {
        assert!(DiskVolumeSlot::default().is_blank());
        assert!(DiskIoSlot::default().is_blank());
        assert!(ServiceSlot::default().is_blank());
        assert!(ProcessSlot::default().is_blank());
    }

    #[test]
    fn any_filled_field_makes_a_slot_non_blank() {
        assert!(!DiskVolumeSlot::default().metric("Used").is_blank());
        assert!(!DiskIoSlot::default().warning("65").is_blank());
        assert!(!ServiceSlot::default().expected_state("Running").is_blank());
        assert!(!ProcessSlot::default().output_type("MB").is_blank());
    }

    #[test]
    fn empty_string_fields_stay_blank() {
        let slot = DiskVolumeSlot {
            drive: Some(String::new()),
            warning: Some(String::new()),
            ..Default::default()
        };
        assert!(slot.is_blank());
    }

    // ========================================================================
    // MultiCheck
    // ========================================================================

    #[test]
    fn identified_slots_skips_unnamed_instances() {
        let multi = MultiCheck {
            monitor: Toggle::On,
            slots: vec![
                DiskVolumeSlot::new("C:"),
                DiskVolumeSlot::default().warning("65"),
                DiskVolumeSlot::new("D:"),
            ],
        };
        let ids: Vec<_> = multi.identified_slots().filter_map(|s| s.identifier()).collect();
        assert_eq!(ids, vec!["C:", "D:"]);
    }

    #[test]
    fn prune_drops_only_blank_slots() {
        let mut multi = MultiCheck {
            monitor: Toggle::On,
            slots: vec![
                DiskVolumeSlot::new("C:"),
                DiskVolumeSlot::default(),
                DiskVolumeSlot::default().warning("65"),
            ],
        };
        multi.prune();
        assert_eq!(multi.slots.len(), 2);
    }

    #[test]
    fn prune_is_idempotent() {
        let mut multi = MultiCheck {
            monitor: Toggle::On,
            slots: vec![DiskVolumeSlot::new("C:"), DiskVolumeSlot::default()],
        };
        multi.prune();
        let once = multi.clone();
        multi.prune();
        assert_eq!(multi, once);
    }

    // ========================================================================
    // Plan defaults
    // ========================================================================

    #[test]
    fn default_plan_is_all_off_and_empty() {
        let plan = CheckPlan::default();
        assert!(!plan.ping.monitor.is_on());
        assert!(!plan.tcp.monitor.is_on());
        assert!(plan.disk_volume.slots.is_empty());
        assert!(plan.windows_processes.slots.is_empty());
    }

    // ========================================================================
    // Wire format
    // ========================================================================

    #[cfg(feature = "serde")]
    #[test]
    fn output_type_uses_the_form_field_key() {
        let slot = DiskVolumeSlot::new("C:").output_type("GB");
        let json = serde_json::to_string(&slot).unwrap();
        assert!(json.contains("\"outputType\":\"GB\""));
        assert!(!json.contains("output_type"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn plan_round_trips_through_json() {
        let mut plan = CheckPlan::default();
        plan.tcp = HostCheck::on();
        plan.disk_volume.monitor = Toggle::On;
        plan.disk_volume.slots.push(
            DiskVolumeSlot::new("C:")
                .warning("65")
                .critical("100")
                .output_type("GB")
                .metric("Used"),
        );
        plan.memory_usage = MemoryUsageCheck {
            monitor: Toggle::On,
            warning: Some("1024".into()),
            critical: Some("512".into()),
            metric: Some("Available".into()),
            output_type: Some("MB".into()),
        };

        let json = serde_json::to_string(&plan).unwrap();
        let decoded: CheckPlan = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, plan);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_json_fills_missing_categories_with_defaults() {
        let decoded: CheckPlan =
            serde_json::from_str(r#"{"ping":{"monitor":"on"}}"#).unwrap();
        assert!(decoded.ping.monitor.is_on());
        assert!(!decoded.tcp.monitor.is_on());
        assert!(decoded.disk_io.slots.is_empty());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn legacy_numeric_monitor_flags_decode() {
        let decoded: CheckPlan = serde_json::from_str(
            r#"{"tcp":{"monitor":1},"cpu_load":{"monitor":1,"warning":"80","critical":"90"}}"#,
        )
        .unwrap();
        assert!(decoded.tcp.monitor.is_on());
        assert!(decoded.cpu_load.monitor.is_on());
        assert_eq!(decoded.cpu_load.warning.as_deref(), Some("80"));
    }
}
