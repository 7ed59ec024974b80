//! # sshmon-wizard
//!
//! Configuration compiler for a multi-stage "Windows over SSH" monitoring
//! setup wizard. It collects connection parameters and check selections for
//! a remote Windows host, validates them per wizard stage, carries the
//! intermediate state between stages as base64(JSON) blobs, and finally
//! compiles the selection into monitoring-object definitions (one host
//! record plus service records bound to check-command templates).
//!
//! The host UI (form rendering, object persistence, host-exists lookup) is
//! an external collaborator; this crate is the pure pipeline between round
//! trips:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                        Stage round trip                          │
//! │  ┌─────────┐   ┌──────────┐   ┌──────────┐   ┌───────┐           │
//! │  │ payload │──▶│ validate │──▶│ defaults │──▶│ prune │──┐        │
//! │  │ (decode)│   │ (stages) │   │ (stage 2)│   │(stage3)│ │        │
//! │  └─────────┘   └──────────┘   └──────────┘   └───────┘ ▼        │
//! │       ▲                                           ┌─────────┐    │
//! │       │              base64(JSON) blob            │ compile │    │
//! │       └───────────────────────────────────────────│(objects)│    │
//! │                                                   └─────────┘    │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`payload`]**: form-field extraction and blob encode/decode, with the
//!   original wizard's silent degradation on undecodable blobs
//! - **[`validate`]**: per-stage message accumulation (never early-exit)
//! - **[`defaults`]**: the built-in starting selection
//! - **[`prune`]**: confirm-stage removal of blank form rows
//! - **[`compile`]**: the fixed-order walk emitting monitoring objects
//! - **[`probe`]**: the Python 3 environment prerequisite, behind a trait
//! - **[`stage`]**: the linear stage machine wiring the above together
//!
//! ## Usage
//!
//! ```rust
//! use sshmon_wizard::{stage, StagePayload, StubProbe, WizardSettings};
//!
//! let mut payload = StagePayload::new();
//! payload.set("ip_address", "10.0.0.5");
//! payload.set("ssh_username", "nagios");
//!
//! assert!(stage::stage1_validate(&payload, &StubProbe::found()).is_ok());
//!
//! let checks = stage::stage2_prepare(&payload);
//! let confirm = stage::stage3_prepare(&checks);
//! let objects = stage::stage_objects(&confirm, false, &WizardSettings::default());
//! assert!(objects[0].is_host());
//! ```

pub mod compile;
pub mod defaults;
pub mod error;
pub mod payload;
pub mod probe;
pub mod prune;
pub mod settings;
pub mod stage;
pub mod validate;

// Re-export main types for convenience
pub use compile::{compile_objects, CompileContext};
pub use defaults::default_plan;
pub use error::{BlobError, PayloadError};
pub use payload::StagePayload;
pub use probe::{Python3Probe, RuntimeProbe, StubProbe};
pub use prune::prune_plan;
pub use settings::WizardSettings;
pub use stage::Stage;
pub use validate::ValidationOutcome;

// Re-export the core types crate
pub use sshmon_types::{CheckPlan, MonitoringObject};
