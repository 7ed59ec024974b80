//! Confirm-stage pruning.
//!
//! Before the plan is serialized for the final stage, every slot the user
//! left entirely blank is dropped from the multi-instance categories. The
//! default plan always carries two slots per category so the form has a
//! spare row; an untouched spare must not survive into the compiled objects.

use sshmon_types::CheckPlan;

/// Drop all-blank slots from the multi-instance categories. Idempotent.
pub fn prune_plan(plan: &mut CheckPlan) {
    plan.disk_volume.prune();
    plan.disk_io.prune();
    plan.windows_services.prune();
    plan.windows_processes.prune();
}
