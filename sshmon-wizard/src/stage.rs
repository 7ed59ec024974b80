//! The wizard stage machine.
//!
//! Stages are strictly linear: connection details, check selection, confirm,
//! then object compilation. No backward transitions are modeled here - a
//! failed validation simply halts forward progress and hands the accumulated
//! messages back; the host UI re-presents the same stage.
//!
//! Every stage communicates through a [`StagePayload`] round-tripped by the
//! host, so each driver function is a pure payload-in / payload-out (or
//! findings-out) transformation.

use sshmon_types::MonitoringObject;

use crate::compile::{compile_objects, CompileContext};
use crate::defaults::default_plan;
use crate::payload::{StagePayload, FIELD_ADDRESS, FIELD_HOSTNAME, FIELD_USERNAME};
use crate::probe::RuntimeProbe;
use crate::prune::prune_plan;
use crate::settings::WizardSettings;
use crate::validate::{validate_stage1, validate_stage2, ValidationOutcome};

/// One step of the wizard flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Stage 1: address and SSH username.
    Connection,
    /// Stage 2: check selection and thresholds.
    Checks,
    /// Stage 3: confirm (prune and freeze the plan).
    Confirm,
    /// Final: compile monitoring objects.
    Objects,
}

impl Stage {
    /// The following stage, if any.
    pub fn next(self) -> Option<Self> {
        match self {
            Stage::Connection => Some(Stage::Checks),
            Stage::Checks => Some(Stage::Confirm),
            Stage::Confirm => Some(Stage::Objects),
            Stage::Objects => None,
        }
    }

    /// Display label for logs and CLI output.
    pub fn label(self) -> &'static str {
        match self {
            Stage::Connection => "connection",
            Stage::Checks => "checks",
            Stage::Confirm => "confirm",
            Stage::Objects => "objects",
        }
    }
}

/// Stage 1 validation: connection parameters plus the runtime prerequisite.
pub fn stage1_validate(payload: &StagePayload, probe: &dyn RuntimeProbe) -> ValidationOutcome {
    validate_stage1(payload, probe)
}

/// Prepare the stage-2 payload.
///
/// Decodes the carried plan, falling back to the built-in defaults on the
/// first visit (or after a corrupt round trip), fills the hostname from the
/// address when unset, and re-encodes everything for the next round trip.
pub fn stage2_prepare(payload: &StagePayload) -> StagePayload {
    let plan = payload.decode_plan().unwrap_or_else(default_plan);
    let mut out = carry_connection_fields(payload);
    out.set_plan(&plan);
    if let Some(args) = payload.decode_serviceargs() {
        out.set_serviceargs(&args);
    }
    out
}

/// Validate the stage-2 submission.
///
/// Returns the findings plus the payload carrying the fixed-up plan (the
/// display-name repair applies even when other findings fail the stage).
pub fn stage2_validate(payload: &StagePayload) -> (StagePayload, ValidationOutcome) {
    let plan = payload.decode_plan().unwrap_or_default();
    let (fixed, outcome) = validate_stage2(plan);

    let mut out = carry_connection_fields(payload);
    out.set_plan(&fixed);
    if let Some(args) = payload.decode_serviceargs() {
        out.set_serviceargs(&args);
    }
    (out, outcome)
}

/// Prepare the confirm-stage payload: prune blank slots and freeze the plan
/// into the hidden fields carried to the final stage.
pub fn stage3_prepare(payload: &StagePayload) -> StagePayload {
    let mut plan = payload.decode_plan().unwrap_or_default();
    prune_plan(&mut plan);

    let mut out = carry_connection_fields(payload);
    out.set_plan(&plan);
    if let Some(args) = payload.decode_serviceargs() {
        out.set_serviceargs(&args);
    }
    out
}

/// Compile the final payload into monitoring objects.
///
/// `host_exists` reflects the monitoring engine's object store - a host
/// concern passed in as a fact. A payload without a decodable plan compiles
/// to just the baseline host record (or nothing when the host exists).
pub fn stage_objects(
    payload: &StagePayload,
    host_exists: bool,
    settings: &WizardSettings,
) -> Vec<MonitoringObject> {
    let plan = payload.decode_plan().unwrap_or_default();
    let ctx = CompileContext {
        hostname: payload.hostname(),
        address: payload.address(),
        username: payload.username(),
        host_exists,
        icon_image: &settings.icon_image,
    };
    compile_objects(&plan, &ctx)
}

/// Copy the connection scalars into a fresh payload, defaulting the
/// hostname to the address.
fn carry_connection_fields(payload: &StagePayload) -> StagePayload {
    let mut out = StagePayload::new();
    out.set(FIELD_ADDRESS, payload.address());
    out.set(FIELD_HOSTNAME, payload.hostname());
    out.set(FIELD_USERNAME, payload.username());
    out
}
