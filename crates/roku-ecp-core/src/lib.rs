//! Shared core for the roku-ecp tools.
//!
//! SSDP discovery, target host resolution, and the ECP HTTP client.

pub mod discovery;
pub mod ecp;
pub mod error;
pub mod resolve;

pub use error::{CoreError, DeviceError};
