//! Type command implementation.

use tracing::debug;

use crate::cli::TypeArgs;
use crate::config::Config;
use crate::device::target::connect;
use crate::error::CliError;

/// Run the type command
pub async fn run_type(args: TypeArgs, config: &Config) -> Result<(), CliError> {
    let client = connect(config).await?;
    debug!(chars = args.text.chars().count(), "Typing text");
    client.type_text(&args.text).await?;
    Ok(())
}
