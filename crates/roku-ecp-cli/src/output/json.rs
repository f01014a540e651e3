//! JSON-formatted output for CLI.

use roku_ecp_core::discovery::DiscoveredDevice;
use roku_ecp_core::ecp::{App, DeviceInfo};
use serde::Serialize;
use serde_json::json;

use super::OutputFormatter;

pub struct JsonOutput;

impl JsonOutput {
    pub fn new() -> Self {
        Self
    }

    fn to_json<T: Serialize>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }
}

impl Default for JsonOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for JsonOutput {
    fn format_devices(&self, devices: &[DiscoveredDevice]) -> String {
        Self::to_json(&json!({
            "devices": devices,
            "count": devices.len()
        }))
    }

    fn format_device_info(&self, info: &DeviceInfo) -> String {
        Self::to_json(info)
    }

    fn format_apps(&self, apps: &[App]) -> String {
        Self::to_json(&json!({
            "apps": apps,
            "count": apps.len()
        }))
    }
}
