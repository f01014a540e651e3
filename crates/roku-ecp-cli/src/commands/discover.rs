//! Discover command implementation.

use tracing::info;

use crate::config::Config;
use crate::device::discovery::discover_devices;
use crate::error::CliError;
use crate::output::get_formatter;

/// Run the discover command
pub async fn run_discover(config: &Config) -> Result<(), CliError> {
    let formatter = get_formatter(config.json);

    info!(
        "Discovering devices for {} seconds...",
        config.discovery_timeout.as_secs()
    );

    let devices = discover_devices(config.discovery_timeout).await?;

    if devices.is_empty() {
        return Err(CliError::NoDevicesFound);
    }

    println!("{}", formatter.format_devices(&devices));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    use crate::cli::Cli;
    use crate::error::exit_codes;

    #[tokio::test]
    async fn test_no_replies_is_an_error() {
        // A zero window collects nothing without opening a socket.
        let cli = Cli::try_parse_from(["roku-ecp", "--timeout", "0", "discover"]).unwrap();
        let config = Config::new(&cli, |_| None);

        let err = run_discover(&config).await.unwrap_err();

        assert!(matches!(err, CliError::NoDevicesFound));
        assert_eq!(err.exit_code(), exit_codes::GENERAL_ERROR);
        assert_eq!(err.to_string(), "No Roku SSDP responses found.");
    }
}
