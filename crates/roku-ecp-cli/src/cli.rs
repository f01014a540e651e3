//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand};

/// roku-ecp - Remote control for Roku devices over ECP
#[derive(Parser, Debug)]
#[command(name = "roku-ecp")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Roku IP or hostname
    #[arg(long, global = true)]
    pub host: Option<String>,

    /// Auto-discover a Roku via SSDP if no host is set
    #[arg(long, global = true)]
    pub auto: bool,

    /// SSDP timeout in seconds
    #[arg(long, global = true, default_value = "3", allow_negative_numbers = true)]
    pub timeout: i64,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Discover Roku devices via SSDP
    Discover,

    /// Show device info
    Info(InfoArgs),

    /// List installed apps
    Apps,

    /// Send keypress
    Keypress(KeyArgs),

    /// Send keydown
    Keydown(KeyArgs),

    /// Send keyup
    Keyup(KeyArgs),

    /// Launch an app by id
    Launch(LaunchArgs),

    /// Type text into the active input
    Type(TypeArgs),
}

#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Print raw XML
    #[arg(long)]
    pub raw: bool,
}

#[derive(Args, Debug)]
pub struct KeyArgs {
    /// Key name, e.g. Home, Back, Up, Select
    pub key: String,
}

#[derive(Args, Debug)]
pub struct LaunchArgs {
    /// App id from `apps` output
    pub app_id: String,
}

#[derive(Args, Debug)]
pub struct TypeArgs {
    /// Text to send
    pub text: String,
}
