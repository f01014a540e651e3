//! Device access layer.
//!
//! SSDP search, host resolution, and the ECP client are provided by
//! roku-ecp-core. This module wraps them with CLI-specific error handling.

pub mod discovery;
pub mod target;
