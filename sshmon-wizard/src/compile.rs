//! Object compilation - from a finalized plan to monitoring-object records.
//!
//! A deterministic, order-preserving walk over the check categories: one
//! host record (template selected by the ping toggle), then service records
//! for each active category in a fixed order. Categories do not interact
//! apart from the ping/tcp template exclusivity.

use sshmon_types::{
    CheckCommand, CheckPlan, CheckSlot, HostObject, HostTemplate, MonitoringObject, ServiceObject,
};

/// Connection details and host-environment facts the compiler needs.
#[derive(Debug, Clone)]
pub struct CompileContext<'a> {
    /// Host object name (already defaulted to the address when unnamed).
    pub hostname: &'a str,
    /// Target IP address, interpolated into every check command.
    pub address: &'a str,
    /// SSH username on the target.
    pub username: &'a str,
    /// Whether the monitoring engine already knows this host. When true, no
    /// HOST record is emitted and the services attach to the existing host.
    pub host_exists: bool,
    /// Icon for the host record (also used as the statusmap image).
    pub icon_image: &'a str,
}

/// Compile the plan into an ordered list of monitoring objects.
pub fn compile_objects(plan: &CheckPlan, ctx: &CompileContext) -> Vec<MonitoringObject> {
    let mut objects = Vec::new();

    if !ctx.host_exists {
        // ICMP and TCP host templates are mutually exclusive; ping wins.
        let template = if plan.ping.monitor.is_on() {
            HostTemplate::WindowsHostIcmp
        } else {
            HostTemplate::WindowsHostTcp
        };
        objects.push(MonitoringObject::Host(HostObject::new(
            template,
            ctx.hostname,
            ctx.address,
            ctx.icon_image,
        )));
    }

    if plan.disk_volume.monitor.is_on() {
        for slot in plan.disk_volume.identified_slots() {
            let drive = slot.identifier().unwrap_or_default();
            let command = command(ctx, "check_volume_by_ssh")
                .arg("-volumename", format!("{drive}\\"))
                .arg("-outputType", text(&slot.output_type))
                .arg("-metric", text(&slot.metric));
            objects.push(service(ctx, format!("Disk Volume {drive}"), command));
        }
    }

    if plan.cpu_load.monitor.is_on() {
        let command = command(ctx, "check_cpu_usage_by_ssh")
            .arg("-warning", text(&plan.cpu_load.warning))
            .arg("-critical", text(&plan.cpu_load.critical));
        objects.push(service(ctx, "CPU Load", command));
    }

    if plan.cpu_utilization.monitor.is_on() {
        let command = command(ctx, "check_cpu_utilization_by_ssh")
            .arg("-warning", text(&plan.cpu_utilization.warning))
            .arg("-critical", text(&plan.cpu_utilization.critical))
            .arg("-metric", text(&plan.cpu_utilization.metric));
        objects.push(service(ctx, "CPU Utilization", command));
    }

    if plan.disk_io.monitor.is_on() {
        for slot in plan.disk_io.identified_slots() {
            let disk_number = slot.identifier().unwrap_or_default();
            let command = command(ctx, "check_disk_usage_by_ssh")
                .arg("-metric", text(&slot.metric))
                .arg("-diskNum", disk_number)
                .arg("-warning", text(&slot.warning))
                .arg("-critical", text(&slot.critical));
            objects.push(service(ctx, format!("Disk Number: {disk_number}"), command));
        }
    }

    if plan.windows_services.monitor.is_on() {
        for slot in plan.windows_services.identified_slots() {
            let command = command(ctx, "check_windows_services_by_ssh")
                .arg("-expectedstate", text(&slot.expected_state))
                .arg("-servicename", text(&slot.service_name));
            objects.push(service(ctx, text(&slot.display_name), command));
        }
    }

    if plan.memory_usage.monitor.is_on() {
        let command = command(ctx, "check_windows_memory_by_ssh")
            .arg("-outputType", text(&plan.memory_usage.output_type))
            .arg("-metric", text(&plan.memory_usage.metric))
            .arg("-warning", text(&plan.memory_usage.warning))
            .arg("-critical", text(&plan.memory_usage.critical));
        objects.push(service(ctx, "Memory Usage", command));
    }

    if plan.windows_processes.monitor.is_on() {
        for slot in plan.windows_processes.identified_slots() {
            let metric = text(&slot.metric);
            // -outputType applies to the Memory metric only.
            let command = command(ctx, "check_windows_processes_by_ssh")
                .arg("-processname", text(&slot.process_name))
                .arg("-metric", metric.clone())
                .arg_if(metric == "Memory", "-outputType", text(&slot.output_type))
                .arg("-warning", text(&slot.warning))
                .arg("-critical", text(&slot.critical));
            objects.push(service(ctx, text(&slot.display_name), command));
        }
    }

    objects
}

fn command(ctx: &CompileContext, name: &'static str) -> CheckCommand {
    CheckCommand::new(name, ctx.address, ctx.username)
}

fn service(
    ctx: &CompileContext,
    description: impl Into<String>,
    command: CheckCommand,
) -> MonitoringObject {
    MonitoringObject::Service(ServiceObject::new(ctx.hostname, description, command.render()))
}

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}
