//! Info command implementation.

use std::io::{self, Write};

use roku_ecp_core::ecp::EcpClient;

use crate::cli::InfoArgs;
use crate::config::Config;
use crate::device::target::connect;
use crate::error::CliError;
use crate::output::get_formatter;

/// Run the info command
pub async fn run_info(args: InfoArgs, config: &Config) -> Result<(), CliError> {
    let client = connect(config).await?;
    let mut stdout = io::stdout();
    write_info(&client, args.raw, config.json, &mut stdout).await
}

/// Fetch device-info and write it to `out`, either as the untouched body or
/// formatted.
async fn write_info<W: Write>(
    client: &EcpClient,
    raw: bool,
    json: bool,
    out: &mut W,
) -> Result<(), CliError> {
    if raw {
        let body = client.device_info_raw().await?;
        out.write_all(&body)?;
        out.flush()?;
        return Ok(());
    }

    let info = client.device_info().await?;
    let output = get_formatter(json).format_device_info(&info);
    if !output.is_empty() {
        writeln!(out, "{}", output)?;
    }

    Ok(())
}
