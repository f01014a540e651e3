//! Keypress, keydown and keyup commands.

use roku_ecp_core::ecp::KeyAction;

use crate::cli::KeyArgs;
use crate::config::Config;
use crate::device::target::connect;
use crate::error::CliError;

/// Run a key command
pub async fn run_key(action: KeyAction, args: KeyArgs, config: &Config) -> Result<(), CliError> {
    let client = connect(config).await?;
    client.key(action, &args.key).await?;
    Ok(())
}
