//! Launch command implementation.

use crate::cli::LaunchArgs;
use crate::config::Config;
use crate::device::target::connect;
use crate::error::CliError;

/// Run the launch command
pub async fn run_launch(args: LaunchArgs, config: &Config) -> Result<(), CliError> {
    let client = connect(config).await?;
    client.launch(&args.app_id).await?;
    Ok(())
}
