//! Error types for the roku-ecp CLI.
//!
//! CliError wraps CoreError from the shared library and adds CLI-specific variants.

use roku_ecp_core::error::CoreError;
use thiserror::Error;

// Re-export so command modules can use it via crate::error
pub use roku_ecp_core::error::DeviceError;

/// Exit codes for the CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL_ERROR: i32 = 1;
    pub const NETWORK_ERROR: i32 = 2;
    pub const DEVICE_ERROR: i32 = 3;
}

/// Main error type for the CLI
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Core(#[from] CoreError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No Roku host set. Use --host or set ROKU_HOST, or pass --auto.")]
    NoHost,

    #[error("No Roku SSDP responses found.")]
    NoDevicesFound,
}

impl CliError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Core(e) => match e {
                CoreError::Device(DeviceError::HttpStatus { .. }) => exit_codes::GENERAL_ERROR,
                CoreError::Device(DeviceError::InvalidResponse { .. }) => exit_codes::DEVICE_ERROR,
                e if e.is_transport() => exit_codes::NETWORK_ERROR,
                _ => exit_codes::GENERAL_ERROR,
            },
            CliError::Io(_) => exit_codes::GENERAL_ERROR,
            CliError::NoHost => exit_codes::GENERAL_ERROR,
            CliError::NoDevicesFound => exit_codes::GENERAL_ERROR,
        }
    }
}

impl From<DeviceError> for CliError {
    fn from(e: DeviceError) -> Self {
        CliError::Core(CoreError::Device(e))
    }
}
