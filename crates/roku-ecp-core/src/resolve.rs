//! Target host resolution.
//!
//! A host comes from the first source that yields one, in this order:
//! the explicit `--host` value, the environment, then SSDP discovery when
//! auto-discovery is enabled. Running out of sources is not an error; the
//! caller decides how to report it.

use std::future::Future;
use std::net::SocketAddr;
use std::time::Duration;

use tracing::debug;

use crate::discovery::{search, DiscoveredDevice, DiscoveryResponse, SearchOptions};
use crate::error::CoreError;

/// Environment variables that may name the target host, highest priority first.
pub const HOST_ENV_VARS: [&str; 2] = ["ROKU_HOST", "ROKU_DEV_TARGET"];

/// Host taken from an environment variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvHost {
    pub var: &'static str,
    pub host: String,
}

/// Where the target host came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Explicit(String),
    EnvOverride(EnvHost),
    Discovered { host: String, from: SocketAddr },
    None,
}

impl Resolution {
    pub fn host(&self) -> Option<&str> {
        match self {
            Resolution::Explicit(host)
            | Resolution::EnvOverride(EnvHost { host, .. })
            | Resolution::Discovered { host, .. } => Some(host.as_str()),
            Resolution::None => None,
        }
    }

    pub fn into_host(self) -> Option<String> {
        match self {
            Resolution::Explicit(host)
            | Resolution::EnvOverride(EnvHost { host, .. })
            | Resolution::Discovered { host, .. } => Some(host),
            Resolution::None => None,
        }
    }

    /// Short label for logs.
    pub fn source(&self) -> &'static str {
        match self {
            Resolution::Explicit(_) => "explicit",
            Resolution::EnvOverride(_) => "environment",
            Resolution::Discovered { .. } => "discovery",
            Resolution::None => "none",
        }
    }
}

/// Inputs to host resolution for one invocation.
#[derive(Debug, Clone, Default)]
pub struct ResolveRequest {
    pub explicit: Option<String>,
    pub env: Option<EnvHost>,
    pub auto: bool,
    pub timeout: Duration,
}

/// Read the host override from the environment through `lookup`.
///
/// The first variable in [`HOST_ENV_VARS`] that is set and non-empty wins.
pub fn env_host<F>(lookup: F) -> Option<EnvHost>
where
    F: Fn(&str) -> Option<String>,
{
    HOST_ENV_VARS.iter().find_map(|&var| {
        lookup(var)
            .filter(|host| !host.is_empty())
            .map(|host| EnvHost { var, host })
    })
}

/// [`env_host`] against the process environment.
pub fn env_host_from_process() -> Option<EnvHost> {
    env_host(|var| std::env::var(var).ok())
}

/// First reply whose `location` header carries a usable host.
pub fn first_discovered(responses: &[DiscoveryResponse]) -> Option<Resolution> {
    responses.iter().find_map(|response| {
        DiscoveredDevice::from(response)
            .host()
            .map(|host| Resolution::Discovered {
                host,
                from: response.from,
            })
    })
}

/// Resolve the target host, using `discover` for the SSDP step.
///
/// `discover` is only invoked when neither the explicit host nor the
/// environment produced one and auto-discovery is enabled.
pub async fn resolve_with<F, Fut>(
    request: &ResolveRequest,
    discover: F,
) -> Result<Resolution, CoreError>
where
    F: FnOnce(Duration) -> Fut,
    Fut: Future<Output = Result<Vec<DiscoveryResponse>, CoreError>>,
{
    if let Some(host) = request.explicit.as_ref().filter(|h| !h.is_empty()) {
        return Ok(Resolution::Explicit(host.clone()));
    }

    if let Some(env) = request.env.as_ref().filter(|e| !e.host.is_empty()) {
        return Ok(Resolution::EnvOverride(env.clone()));
    }

    if request.auto {
        let responses = discover(request.timeout).await?;
        debug!(replies = responses.len(), "Resolving host from SSDP replies");
        if let Some(found) = first_discovered(&responses) {
            return Ok(found);
        }
    }

    Ok(Resolution::None)
}

/// Resolve the target host, searching the network if needed.
pub async fn resolve(request: &ResolveRequest) -> Result<Resolution, CoreError> {
    let resolution = resolve_with(request, |timeout| async move {
        search(&SearchOptions::with_timeout(timeout)).await
    })
    .await?;

    debug!(source = resolution.source(), host = ?resolution.host(), "Host resolved");
    Ok(resolution)
}
