//! XML response decoding for ECP queries.
//!
//! Only direct children of the document root are read. Unknown elements
//! are ignored, and empty elements count as absent.

use std::fmt;

use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::DeviceError;

/// Element names of the `DeviceInfo` fields, in display order.
const DEVICE_INFO_FIELDS: [&str; 9] = [
    "friendly-device-name",
    "model-name",
    "model-number",
    "serial-number",
    "software-version",
    "software-build",
    "wifi-mac",
    "ethernet-mac",
    "network-type",
];

/// Scalar fields of `/query/device-info` shown to the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct DeviceInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub friendly_device_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub software_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub software_build: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wifi_mac: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ethernet_mac: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_type: Option<String>,
}

impl DeviceInfo {
    /// Present fields as `(element name, value)`, in display order.
    pub fn fields(&self) -> Vec<(&'static str, &str)> {
        DEVICE_INFO_FIELDS
            .into_iter()
            .zip(self.slots())
            .filter_map(|(name, value)| value.as_deref().map(|v| (name, v)))
            .collect()
    }

    fn slots(&self) -> [&Option<String>; 9] {
        [
            &self.friendly_device_name,
            &self.model_name,
            &self.model_number,
            &self.serial_number,
            &self.software_version,
            &self.software_build,
            &self.wifi_mac,
            &self.ethernet_mac,
            &self.network_type,
        ]
    }

    fn slots_mut(&mut self) -> [&mut Option<String>; 9] {
        [
            &mut self.friendly_device_name,
            &mut self.model_name,
            &mut self.model_number,
            &mut self.serial_number,
            &mut self.software_version,
            &mut self.software_build,
            &mut self.wifi_mac,
            &mut self.ethernet_mac,
            &mut self.network_type,
        ]
    }

    fn drop_empty(mut self) -> Self {
        for field in self.slots_mut() {
            if field.as_deref().is_some_and(str::is_empty) {
                *field = None;
            }
        }
        self
    }
}

// A repeated element keeps its first occurrence.
impl<'de> Deserialize<'de> for DeviceInfo {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(DeviceInfoVisitor)
    }
}

struct DeviceInfoVisitor;

impl<'de> Visitor<'de> for DeviceInfoVisitor {
    type Value = DeviceInfo;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a device-info element")
    }

    fn visit_map<A>(self, mut map: A) -> Result<DeviceInfo, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut info = DeviceInfo::default();
        let mut seen = [false; DEVICE_INFO_FIELDS.len()];

        while let Some(key) = map.next_key::<String>()? {
            match DEVICE_INFO_FIELDS.iter().position(|name| *name == key) {
                Some(i) if !seen[i] => {
                    seen[i] = true;
                    let value: Option<String> = map.next_value()?;
                    *info.slots_mut()[i] = value;
                }
                _ => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }

        Ok(info)
    }
}

/// An installed channel as listed by `/query/apps`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct App {
    pub id: String,
    pub name: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AppListXml {
    #[serde(rename = "app", default)]
    apps: Vec<AppXml>,
}

#[derive(Debug, Deserialize)]
struct AppXml {
    #[serde(rename = "@id", default)]
    id: String,
    #[serde(rename = "@type", default)]
    kind: Option<String>,
    #[serde(rename = "@version", default)]
    version: Option<String>,
    #[serde(rename = "$text", default)]
    name: String,
}

impl From<AppXml> for App {
    fn from(xml: AppXml) -> Self {
        Self {
            id: xml.id,
            name: xml.name,
            kind: xml.kind,
            version: xml.version,
        }
    }
}

fn invalid(host: &str, what: &str, e: quick_xml::de::DeError) -> DeviceError {
    DeviceError::InvalidResponse {
        host: host.to_string(),
        message: format!("Failed to parse {}: {}", what, e),
    }
}

/// Decode a `/query/device-info` body.
pub fn parse_device_info(body: &[u8], host: &str) -> Result<DeviceInfo, DeviceError> {
    let text = String::from_utf8_lossy(body);
    let info: DeviceInfo =
        quick_xml::de::from_str(&text).map_err(|e| invalid(host, "device-info", e))?;
    Ok(info.drop_empty())
}

/// Decode a `/query/apps` body.
pub fn parse_apps(body: &[u8], host: &str) -> Result<Vec<App>, DeviceError> {
    let text = String::from_utf8_lossy(body);
    let list: AppListXml = quick_xml::de::from_str(&text).map_err(|e| invalid(host, "apps", e))?;
    Ok(list.apps.into_iter().map(App::from).collect())
}
