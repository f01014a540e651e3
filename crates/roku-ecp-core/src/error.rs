//! Error types for roku-ecp core.

use thiserror::Error;

/// Core error type for shared operations.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Device(#[from] DeviceError),

    #[error("Discovery error: {0}")]
    Discovery(std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Errors reported by (or about) a single device.
#[derive(Debug, Error)]
pub enum DeviceError {
    #[error("HTTP {status} from {host}")]
    HttpStatus { host: String, status: u16 },

    #[error("Invalid response from {host}: {message}")]
    InvalidResponse { host: String, message: String },

    #[error("Device {host} is unreachable: {message}")]
    Unreachable { host: String, message: String },
}

impl CoreError {
    /// True when the failure happened below HTTP (connect, timeout, socket).
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            CoreError::Discovery(_)
                | CoreError::Http(_)
                | CoreError::Device(DeviceError::Unreachable { .. })
        )
    }
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
