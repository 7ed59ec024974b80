//! Monitoring-object records emitted by the compiler.
//!
//! These match the record shape the monitoring engine's object-save API
//! consumes: a `type` discriminator (`HOST` / `SERVICE`), a template
//! reference under `use`, and the wizard marker under `_xiwizard`.

use crate::WIZARD_NAME;

/// Host-record template: ICMP or TCP reachability.
///
/// The two templates are mutually exclusive; the compiler selects ICMP when
/// the ping category is active, TCP otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostTemplate {
    WindowsHostTcp,
    WindowsHostIcmp,
}

impl HostTemplate {
    /// Template name as registered with the monitoring engine.
    pub const fn as_str(self) -> &'static str {
        match self {
            HostTemplate::WindowsHostTcp => "xiwizard_windows_host_tcp",
            HostTemplate::WindowsHostIcmp => "xiwizard_windows_host_icmp",
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for HostTemplate {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for HostTemplate {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = <String as serde::Deserialize>::deserialize(deserializer)?;
        match name.as_str() {
            "xiwizard_windows_host_tcp" => Ok(HostTemplate::WindowsHostTcp),
            "xiwizard_windows_host_icmp" => Ok(HostTemplate::WindowsHostIcmp),
            other => Err(serde::de::Error::unknown_variant(
                other,
                &["xiwizard_windows_host_tcp", "xiwizard_windows_host_icmp"],
            )),
        }
    }
}

/// Template applied to every emitted service record.
pub const GENERIC_SERVICE_TEMPLATE: &str = "xiwizard_generic_service";

/// A host definition record.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HostObject {
    #[cfg_attr(feature = "serde", serde(rename = "use"))]
    pub template: HostTemplate,
    pub host_name: String,
    pub address: String,
    pub icon_image: String,
    pub statusmap_image: String,
    #[cfg_attr(feature = "serde", serde(rename = "_xiwizard"))]
    pub wizard: String,
}

impl HostObject {
    /// Build a host record for the given template and connection details.
    pub fn new(
        template: HostTemplate,
        host_name: impl Into<String>,
        address: impl Into<String>,
        icon_image: impl Into<String>,
    ) -> Self {
        let icon = icon_image.into();
        Self {
            template,
            host_name: host_name.into(),
            address: address.into(),
            statusmap_image: icon.clone(),
            icon_image: icon,
            wizard: WIZARD_NAME.to_string(),
        }
    }
}

/// A service definition record bound to a check command.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ServiceObject {
    #[cfg_attr(feature = "serde", serde(rename = "use"))]
    pub template: String,
    pub host_name: String,
    pub service_description: String,
    /// Fully interpolated check-command string.
    pub check_command: String,
    #[cfg_attr(feature = "serde", serde(rename = "_xiwizard"))]
    pub wizard: String,
}

impl ServiceObject {
    /// Build a generic-template service record.
    pub fn new(
        host_name: impl Into<String>,
        service_description: impl Into<String>,
        check_command: impl Into<String>,
    ) -> Self {
        Self {
            template: GENERIC_SERVICE_TEMPLATE.to_string(),
            host_name: host_name.into(),
            service_description: service_description.into(),
            check_command: check_command.into(),
            wizard: WIZARD_NAME.to_string(),
        }
    }
}

/// A monitoring-object record, discriminated by the `type` field.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type"))]
pub enum MonitoringObject {
    #[cfg_attr(feature = "serde", serde(rename = "HOST"))]
    Host(HostObject),
    #[cfg_attr(feature = "serde", serde(rename = "SERVICE"))]
    Service(ServiceObject),
}

impl MonitoringObject {
    /// The host or service name this record applies to.
    pub fn host_name(&self) -> &str {
        match self {
            MonitoringObject::Host(h) => &h.host_name,
            MonitoringObject::Service(s) => &s.host_name,
        }
    }

    pub fn is_host(&self) -> bool {
        matches!(self, MonitoringObject::Host(_))
    }

    pub fn is_service(&self) -> bool {
        matches!(self, MonitoringObject::Service(_))
    }
}
