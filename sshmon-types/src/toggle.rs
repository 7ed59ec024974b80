//! Activation toggle for check categories.
//!
//! A category is deployed only when its toggle is on. On the wire the toggle
//! is the string `"on"` or `"off"`; decoding also accepts the legacy forms
//! the original wizard produced (`1`, `"1"`, or a bare boolean).

/// Whether a check category is enabled.
///
/// Defaults to [`Toggle::Off`], matching an absent or unchecked form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Toggle {
    /// Category is enabled and will be compiled into monitoring objects.
    On,
    /// Category is disabled (absent, unchecked, or any unrecognized value).
    #[default]
    Off,
}

impl Toggle {
    /// Returns true if the toggle is on.
    pub const fn is_on(self) -> bool {
        matches!(self, Toggle::On)
    }

    /// Canonical wire representation.
    pub const fn as_str(self) -> &'static str {
        match self {
            Toggle::On => "on",
            Toggle::Off => "off",
        }
    }

    /// Parse a form value. Only `"on"` and the legacy `"1"` activate.
    pub fn from_form_value(value: &str) -> Self {
        match value {
            "on" | "1" => Toggle::On,
            _ => Toggle::Off,
        }
    }
}

impl core::fmt::Display for Toggle {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Toggle {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Toggle {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct ToggleVisitor;

        impl serde::de::Visitor<'_> for ToggleVisitor {
            type Value = Toggle;

            fn expecting(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
                f.write_str("an on/off string, integer, or boolean")
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Toggle, E> {
                Ok(Toggle::from_form_value(v))
            }

            fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<Toggle, E> {
                Ok(if v == 1 { Toggle::On } else { Toggle::Off })
            }

            fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<Toggle, E> {
                Ok(if v == 1 { Toggle::On } else { Toggle::Off })
            }

            fn visit_bool<E: serde::de::Error>(self, v: bool) -> Result<Toggle, E> {
                Ok(if v { Toggle::On } else { Toggle::Off })
            }

            fn visit_none<E: serde::de::Error>(self) -> Result<Toggle, E> {
                Ok(Toggle::Off)
            }

            fn visit_unit<E: serde::de::Error>(self) -> Result<Toggle, E> {
                Ok(Toggle::Off)
            }
        }

        deserializer.deserialize_any(ToggleVisitor)
    }
}
