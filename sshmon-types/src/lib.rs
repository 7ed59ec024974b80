//! # sshmon-types
//!
//! Core types for the Windows-over-SSH monitoring configuration wizard.
//! This crate defines the check plan (which remote checks to deploy against a
//! Windows host, with what thresholds) and the monitoring-object records
//! (hosts and services) that a finalized plan compiles into.
//!
//! ## Design Goals
//!
//! - **Zero required dependencies**: Core types work without any serialization framework
//! - **Optional serialization**: Enable the `serde` feature for the wire format
//! - **Typed categories**: Each check category is a fixed record with explicit
//!   optional fields, not a loosely-typed nested map
//! - **Lenient decode**: Activation toggles accept legacy encodings (`1`, `"on"`)
//!   and are validated at the deserialization boundary
//!
//! ## Example
//!
//! ```rust
//! use sshmon_types::{CheckPlan, DiskVolumeSlot, Toggle};
//!
//! let mut plan = CheckPlan::default();
//! plan.disk_volume.monitor = Toggle::On;
//! plan.disk_volume.slots.push(
//!     DiskVolumeSlot::new("C:").warning("65").critical("100"),
//! );
//!
//! assert!(plan.disk_volume.monitor.is_on());
//! ```
//!
//! ## Wire Format
//!
//! With the `serde` feature enabled, a [`CheckPlan`] serializes to the JSON
//! shape carried between wizard stages (field names such as `outputType`
//! match the form-field keys of the original wizard). Toggles serialize as
//! the strings `"on"` / `"off"`.

mod command;
mod objects;
mod plan;
mod toggle;

pub use command::*;
pub use objects::*;
pub use plan::*;
pub use toggle::*;

/// Wizard identity marker attached to every emitted monitoring object.
pub const WIZARD_NAME: &str = "windows_ssh";
