//! HTTP transport for the External Control Protocol.
//!
//! Every call is a single request with a fixed timeout. A status other than
//! 200 is reported as [`DeviceError::HttpStatus`]; nothing is retried.

use std::net::Ipv6Addr;
use std::time::Duration;

use bytes::Bytes;
use reqwest::{Client, Method};
use tracing::debug;

use super::commands::{key_path, launch_path, literal_key_paths, KeyAction, APPS_PATH, DEVICE_INFO_PATH};
use super::response::{parse_apps, parse_device_info, App, DeviceInfo};
use crate::error::{CoreError, DeviceError};

/// TCP port the ECP server listens on
pub const ECP_PORT: u16 = 8060;

/// Connect + response timeout for each request
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Status code and body of one ECP exchange.
#[derive(Debug, Clone)]
pub struct EcpResponse {
    pub status: u16,
    pub body: Bytes,
}

/// Client bound to one device.
#[derive(Debug, Clone)]
pub struct EcpClient {
    client: Client,
    host: String,
    base_url: String,
}

impl EcpClient {
    /// Client for `host` on the standard ECP port.
    pub fn new(host: &str) -> Result<Self, CoreError> {
        Self::with_port(host, ECP_PORT)
    }

    pub fn with_port(host: &str, port: u16) -> Result<Self, CoreError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        let authority = if host.parse::<Ipv6Addr>().is_ok() {
            format!("[{}]:{}", host, port)
        } else {
            format!("{}:{}", host, port)
        };

        Ok(Self {
            client,
            host: host.to_string(),
            base_url: format!("http://{}", authority),
        })
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    async fn request(&self, method: Method, path: &str) -> Result<EcpResponse, CoreError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%method, %url, "ECP request");

        let mut builder = self.client.request(method.clone(), &url);
        if method == Method::POST {
            builder = builder.body("");
        }

        let unreachable = |e: reqwest::Error| DeviceError::Unreachable {
            host: self.host.clone(),
            message: e.to_string(),
        };

        let response = builder.send().await.map_err(unreachable)?;
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(unreachable)?;

        debug!(status, len = body.len(), "ECP response");
        Ok(EcpResponse { status, body })
    }

    /// Issue a GET and return the raw exchange.
    pub async fn get(&self, path: &str) -> Result<EcpResponse, CoreError> {
        self.request(Method::GET, path).await
    }

    /// Issue a POST with an empty body and return the raw exchange.
    pub async fn post(&self, path: &str) -> Result<EcpResponse, CoreError> {
        self.request(Method::POST, path).await
    }

    fn ensure_ok(&self, response: EcpResponse) -> Result<Bytes, CoreError> {
        if response.status != 200 {
            return Err(CoreError::Device(DeviceError::HttpStatus {
                host: self.host.clone(),
                status: response.status,
            }));
        }
        Ok(response.body)
    }

    /// Raw `/query/device-info` document.
    pub async fn device_info_raw(&self) -> Result<Bytes, CoreError> {
        let response = self.get(DEVICE_INFO_PATH).await?;
        self.ensure_ok(response)
    }

    pub async fn device_info(&self) -> Result<DeviceInfo, CoreError> {
        let body = self.device_info_raw().await?;
        Ok(parse_device_info(&body, &self.host)?)
    }

    pub async fn apps(&self) -> Result<Vec<App>, CoreError> {
        let response = self.get(APPS_PATH).await?;
        let body = self.ensure_ok(response)?;
        Ok(parse_apps(&body, &self.host)?)
    }

    pub async fn key(&self, action: KeyAction, key: &str) -> Result<(), CoreError> {
        let response = self.post(&key_path(action, key)).await?;
        self.ensure_ok(response).map(|_| ())
    }

    pub async fn launch(&self, app_id: &str) -> Result<(), CoreError> {
        let response = self.post(&launch_path(app_id)).await?;
        self.ensure_ok(response).map(|_| ())
    }

    /// Type `text` one literal keypress at a time, stopping at the first failure.
    pub async fn type_text(&self, text: &str) -> Result<(), CoreError> {
        for path in literal_key_paths(text) {
            let response = self.post(&path).await?;
            self.ensure_ok(response)?;
        }
        Ok(())
    }
}
