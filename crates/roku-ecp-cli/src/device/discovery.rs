//! SSDP discovery for Roku devices.
//!
//! Thin wrapper around core's search with CLI-specific types.

use std::time::Duration;

use roku_ecp_core::discovery::{search, DiscoveredDevice, SearchOptions};

use crate::error::CliError;

/// Search the local network and summarise every reply.
pub async fn discover_devices(timeout: Duration) -> Result<Vec<DiscoveredDevice>, CliError> {
    let responses = search(&SearchOptions::with_timeout(timeout)).await?;
    Ok(responses.iter().map(DiscoveredDevice::from).collect())
}
