//! roku-ecp - Command-line remote control for Roku devices.
//!
//! Finds players with SSDP and drives them through the External Control
//! Protocol: device info, installed apps, key presses, app launch and text
//! entry.

mod cli;
mod commands;
mod config;
mod device;
mod error;
mod output;

use clap::Parser;
use colored::Colorize;
use roku_ecp_core::ecp::KeyAction;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use config::Config;
use error::{exit_codes, CliError};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let config = Config::from_env(&cli);
    let result = run(cli.command, &config).await;

    match result {
        Ok(()) => std::process::exit(exit_codes::SUCCESS),
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            std::process::exit(e.exit_code());
        }
    }
}

/// Log to stderr so stdout carries only command output.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "roku_ecp=debug,roku_ecp_core=debug"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(command: Commands, config: &Config) -> Result<(), CliError> {
    match command {
        Commands::Discover => commands::run_discover(config).await,
        Commands::Info(args) => commands::run_info(args, config).await,
        Commands::Apps => commands::run_apps(config).await,
        Commands::Keypress(args) => commands::run_key(KeyAction::Press, args, config).await,
        Commands::Keydown(args) => commands::run_key(KeyAction::Down, args, config).await,
        Commands::Keyup(args) => commands::run_key(KeyAction::Up, args, config).await,
        Commands::Launch(args) => commands::run_launch(args, config).await,
        Commands::Type(args) => commands::run_type(args, config).await,
    }
}
