//! Per-invocation configuration.
//!
//! Built once from the parsed arguments and the environment, then handed
//! read-only to whichever command runs.

use std::time::Duration;

use roku_ecp_core::resolve::{env_host, EnvHost, ResolveRequest};

use crate::cli::Cli;

#[derive(Debug, Clone)]
pub struct Config {
    /// `--host`, if given
    pub host: Option<String>,
    /// Host override from `ROKU_HOST` / `ROKU_DEV_TARGET`
    pub env_host: Option<EnvHost>,
    /// `--auto`
    pub auto: bool,
    /// SSDP collection window; zero when `--timeout` is not positive
    pub discovery_timeout: Duration,
    /// `--json`
    pub json: bool,
}

impl Config {
    /// Fold the parsed CLI and an environment lookup into a config.
    pub fn new<F>(cli: &Cli, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            host: cli.host.clone(),
            env_host: env_host(lookup),
            auto: cli.auto,
            discovery_timeout: timeout_from_secs(cli.timeout),
            json: cli.json,
        }
    }

    pub fn from_env(cli: &Cli) -> Self {
        Self::new(cli, |var| std::env::var(var).ok())
    }

    pub fn resolve_request(&self) -> ResolveRequest {
        ResolveRequest {
            explicit: self.host.clone(),
            env: self.env_host.clone(),
            auto: self.auto,
            timeout: self.discovery_timeout,
        }
    }
}

fn timeout_from_secs(secs: i64) -> Duration {
    u64::try_from(secs)
        .map(Duration::from_secs)
        .unwrap_or(Duration::ZERO)
}
