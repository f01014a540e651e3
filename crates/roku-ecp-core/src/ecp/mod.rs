//! External Control Protocol layer.
//!
//! This module builds request paths, talks HTTP to the device, and decodes
//! its XML replies.

pub mod client;
pub mod commands;
pub mod response;

pub use client::{EcpClient, EcpResponse, ECP_PORT};
pub use commands::KeyAction;
pub use response::{App, DeviceInfo};
