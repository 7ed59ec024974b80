//! Stage payload normalization.
//!
//! Each wizard round trip carries a flat string→string form-field map plus
//! optional base64(JSON) blobs holding the check plan (`services_serial`)
//! and the opaque service-args structure (`serviceargs_serial`). This module
//! extracts scalar fields and decodes the blobs into a [`CheckPlan`].
//!
//! A blob that fails to decode is treated as absent data rather than an
//! error, matching the original wizard. The failure is logged at debug level
//! so a corrupt round trip is at least visible.

use std::collections::BTreeMap;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use sshmon_types::CheckPlan;

use crate::error::BlobError;

/// Form-field key for the target IP address.
pub const FIELD_ADDRESS: &str = "ip_address";
/// Form-field key for the SSH username.
pub const FIELD_USERNAME: &str = "ssh_username";
/// Form-field key for the host object name.
pub const FIELD_HOSTNAME: &str = "hostname";
/// Preferred form-field key for the serialized check plan.
pub const FIELD_SERVICES_SERIAL: &str = "services_serial";
/// Fallback form-field key for the serialized check plan.
pub const FIELD_SERVICES: &str = "services";
/// Preferred form-field key for the serialized service args.
pub const FIELD_SERVICEARGS_SERIAL: &str = "serviceargs_serial";
/// Fallback form-field key for the serialized service args.
pub const FIELD_SERVICEARGS: &str = "serviceargs";

/// The flat form-field map carried between wizard stages.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StagePayload {
    fields: BTreeMap<String, String>,
}

impl StagePayload {
    /// Create an empty payload.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing form-field map.
    pub fn from_fields(fields: BTreeMap<String, String>) -> Self {
        Self { fields }
    }

    /// Look up a field, treating absence as the empty string.
    pub fn field(&self, key: &str) -> &str {
        self.fields.get(key).map(String::as_str).unwrap_or("")
    }

    /// Set a field value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(key.into(), value.into());
    }

    /// The target IP address.
    pub fn address(&self) -> &str {
        self.field(FIELD_ADDRESS)
    }

    /// The SSH username.
    pub fn username(&self) -> &str {
        self.field(FIELD_USERNAME)
    }

    /// The host object name, falling back to the address when unset.
    ///
    /// The original wizard attempts a reverse-DNS lookup here; name
    /// resolution belongs to the host environment, so callers wanting a
    /// resolved name pre-fill the `hostname` field instead.
    pub fn hostname(&self) -> &str {
        let name = self.field(FIELD_HOSTNAME);
        if name.is_empty() {
            self.address()
        } else {
            name
        }
    }

    /// Decode the check plan from `services_serial`, falling back to
    /// `services`. Returns `None` when neither is present or neither
    /// decodes.
    pub fn decode_plan(&self) -> Option<CheckPlan> {
        self.decode_first(&[FIELD_SERVICES_SERIAL, FIELD_SERVICES])
    }

    /// Decode the opaque service-args blob. Content is carried through the
    /// stages without interpretation.
    pub fn decode_serviceargs(&self) -> Option<serde_json::Value> {
        self.decode_first(&[FIELD_SERVICEARGS_SERIAL, FIELD_SERVICEARGS])
    }

    /// Store the plan as a `services_serial` blob.
    pub fn set_plan(&mut self, plan: &CheckPlan) {
        self.set(FIELD_SERVICES_SERIAL, encode_blob(plan));
    }

    /// Store the service args as a `serviceargs_serial` blob.
    pub fn set_serviceargs(&mut self, args: &serde_json::Value) {
        self.set(FIELD_SERVICEARGS_SERIAL, encode_blob(args));
    }

    /// Borrow the underlying field map.
    pub fn fields(&self) -> &BTreeMap<String, String> {
        &self.fields
    }

    /// Consume the payload, yielding the field map.
    pub fn into_fields(self) -> BTreeMap<String, String> {
        self.fields
    }

    fn decode_first<T: DeserializeOwned>(&self, keys: &[&str]) -> Option<T> {
        for key in keys {
            let blob = self.field(key);
            if blob.is_empty() {
                continue;
            }
            match decode_blob(blob) {
                Ok(value) => return Some(value),
                Err(err) => {
                    // Degrade to "no data", as the original wizard does.
                    debug!(field = *key, error = %err, "discarding undecodable stage blob");
                }
            }
        }
        None
    }
}

/// Decode a base64(JSON) stage blob.
pub fn decode_blob<T: DeserializeOwned>(blob: &str) -> Result<T, BlobError> {
    let bytes = BASE64.decode(blob)?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Encode a value as a base64(JSON) stage blob.
pub fn encode_blob<T: Serialize>(value: &T) -> String {
    // CheckPlan and Value serialization cannot fail.
    let json = serde_json::to_vec(value).expect("stage blob serialization");
    BASE64.encode(json)
}
