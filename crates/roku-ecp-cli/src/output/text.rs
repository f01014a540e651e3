//! Plain-text output for CLI.

use roku_ecp_core::discovery::DiscoveredDevice;
use roku_ecp_core::ecp::{App, DeviceInfo};

use super::OutputFormatter;

pub struct TextOutput;

impl TextOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TextOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for TextOutput {
    fn format_devices(&self, devices: &[DiscoveredDevice]) -> String {
        let mut lines = Vec::new();

        for device in devices {
            lines.push("----".to_string());
            lines.push(format!("From: {}", device.from));
            if let Some(location) = &device.location {
                lines.push(format!("Location: {}", location));
            }
            if let Some(usn) = &device.usn {
                lines.push(format!("USN: {}", usn));
            }
            if let Some(server) = &device.server {
                lines.push(format!("Server: {}", server));
            }
        }

        lines.join("\n")
    }

    fn format_device_info(&self, info: &DeviceInfo) -> String {
        info.fields()
            .iter()
            .map(|(name, value)| format!("{}: {}", name, value))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn format_apps(&self, apps: &[App]) -> String {
        apps.iter()
            .map(|app| format!("{}\t{}", app.id, app.name))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
