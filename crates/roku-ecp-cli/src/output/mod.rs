//! Output formatting for CLI results.

pub mod json;
pub mod text;

pub use json::JsonOutput;
pub use text::TextOutput;

use roku_ecp_core::discovery::DiscoveredDevice;
use roku_ecp_core::ecp::{App, DeviceInfo};

/// Output formatter trait
pub trait OutputFormatter {
    /// Format the devices answering an SSDP search
    fn format_devices(&self, devices: &[DiscoveredDevice]) -> String;

    /// Format the fields of `/query/device-info`
    fn format_device_info(&self, info: &DeviceInfo) -> String;

    /// Format the installed app list
    fn format_apps(&self, apps: &[App]) -> String;
}

/// Get the appropriate formatter based on JSON flag
pub fn get_formatter(json: bool) -> Box<dyn OutputFormatter> {
    if json {
        Box::new(JsonOutput::new())
    } else {
        Box::new(TextOutput::new())
    }
}
