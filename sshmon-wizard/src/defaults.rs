//! The built-in starting selection.
//!
//! Used when a stage carries no decodable plan blob - the first visit to
//! stage 2, or a corrupted round trip. Values mirror the selection the
//! original wizard ships: a C: volume, CPU load and utilization, two disk
//! I/O slots, the Print Spooler service, a notepad process check, and
//! available-memory monitoring.

use sshmon_types::{
    CheckPlan, CpuLoadCheck, CpuUtilizationCheck, DiskIoSlot, DiskVolumeSlot, HostCheck,
    MemoryUsageCheck, ProcessSlot, ServiceSlot, Toggle,
};

/// Build the default check plan.
///
/// Deterministic and side-effect free; calling it twice yields equal plans.
pub fn default_plan() -> CheckPlan {
    let mut plan = CheckPlan {
        ping: HostCheck::off(),
        tcp: HostCheck::on(),
        ..Default::default()
    };

    plan.disk_volume.monitor = Toggle::On;
    plan.disk_volume.slots = vec![
        DiskVolumeSlot::new("C:")
            .warning("65")
            .critical("100")
            .output_type("GB")
            .metric("Used"),
        // Second slot pre-fills thresholds but leaves the drive to the user.
        DiskVolumeSlot::default()
            .warning("65")
            .critical("100")
            .output_type("GB")
            .metric("Used"),
    ];

    plan.cpu_load = CpuLoadCheck {
        monitor: Toggle::On,
        warning: Some("80".into()),
        critical: Some("90".into()),
    };

    plan.cpu_utilization = CpuUtilizationCheck {
        monitor: Toggle::On,
        metric: Some("User".into()),
        warning: Some("80".into()),
        critical: Some("90".into()),
    };

    plan.disk_io.monitor = Toggle::On;
    plan.disk_io.slots = vec![
        DiskIoSlot::new("0").warning("65").critical("100").metric("Total"),
        DiskIoSlot::default().warning("65").critical("100").metric("Total"),
    ];

    plan.windows_services.monitor = Toggle::On;
    plan.windows_services.slots = vec![
        ServiceSlot::new("Spooler")
            .display_name("Print Spooler")
            .expected_state("Running"),
        ServiceSlot::default().expected_state("Running"),
    ];

    plan.windows_processes.monitor = Toggle::On;
    plan.windows_processes.slots = vec![
        ProcessSlot::new("notepad")
            .display_name("Notepad")
            .output_type("MB")
            .warning("400")
            .critical("500")
            .metric("Memory"),
        ProcessSlot::default()
            .output_type("MB")
            .warning("400")
            .critical("500")
            .metric("Memory"),
    ];

    // Available-memory check: warning sits above critical. That matches the
    // shipped wizard defaults; do not "fix" without changing the product.
    plan.memory_usage = MemoryUsageCheck {
        monitor: Toggle::On,
        warning: Some("1024".into()),
        critical: Some("512".into()),
        metric: Some("Available".into()),
        output_type: Some("MB".into()),
    };

    plan
}
