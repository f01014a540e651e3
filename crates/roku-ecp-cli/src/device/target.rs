//! Target device selection.

use roku_ecp_core::ecp::EcpClient;
use roku_ecp_core::resolve::{resolve, Resolution};
use tracing::info;

use crate::config::Config;
use crate::error::CliError;

/// Resolve the host this invocation talks to.
pub async fn resolve_target(config: &Config) -> Result<String, CliError> {
    let resolution = resolve(&config.resolve_request()).await?;
    host_or_error(resolution)
}

fn host_or_error(resolution: Resolution) -> Result<String, CliError> {
    let source = resolution.source();
    let host = resolution.into_host().ok_or(CliError::NoHost)?;
    info!(%host, source, "Using Roku host");
    Ok(host)
}

/// Resolve the target and open an ECP client for it.
pub async fn connect(config: &Config) -> Result<EcpClient, CliError> {
    let host = resolve_target(config).await?;
    Ok(EcpClient::new(&host)?)
}
