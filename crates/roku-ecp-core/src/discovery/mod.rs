//! SSDP device discovery module.
//!
//! Provides the M-SEARCH client, reply header parsing, and device summaries.

pub mod device;
pub mod headers;
pub mod service;

pub use device::{host_from_location, DiscoveredDevice, DiscoveryResponse};
pub use headers::{parse_headers, HeaderMap};
pub use service::{search, SearchOptions};
