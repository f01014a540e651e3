//! Apps command implementation.

use crate::config::Config;
use crate::device::target::connect;
use crate::error::CliError;
use crate::output::get_formatter;

/// Run the apps command
pub async fn run_apps(config: &Config) -> Result<(), CliError> {
    let client = connect(config).await?;
    let apps = client.apps().await?;

    let output = get_formatter(config.json).format_apps(&apps);
    if !output.is_empty() {
        println!("{}", output);
    }

    Ok(())
}
