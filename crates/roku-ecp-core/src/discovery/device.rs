//! Device summaries built from SSDP replies.

use std::net::{IpAddr, SocketAddr};

use serde::Serialize;
use url::{Host, Url};

use super::headers::{parse_headers, HeaderMap};

/// One SSDP reply as it came off the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryResponse {
    /// Address the datagram was sent from
    pub from: SocketAddr,
    /// Datagram payload, decoded lossily as UTF-8
    pub text: String,
}

impl DiscoveryResponse {
    pub fn new(from: SocketAddr, text: impl Into<String>) -> Self {
        Self {
            from,
            text: text.into(),
        }
    }

    pub fn headers(&self) -> HeaderMap {
        parse_headers(&self.text)
    }
}

/// The parts of a reply the CLI shows to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoveredDevice {
    pub from: IpAddr,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<String>,
}

impl DiscoveredDevice {
    /// Host part of the `location` URL, if there is a usable one.
    pub fn host(&self) -> Option<String> {
        self.location.as_deref().and_then(host_from_location)
    }
}

impl From<&DiscoveryResponse> for DiscoveredDevice {
    fn from(response: &DiscoveryResponse) -> Self {
        let headers = response.headers();
        let field = |name: &str| {
            headers
                .get(name)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };

        Self {
            from: response.from.ip(),
            location: field("location"),
            usn: field("usn"),
            server: field("server"),
        }
    }
}

/// Extract the hostname from a `location` header value.
///
/// IPv6 literals come back without brackets. Returns `None` when the value
/// is not an absolute URL or carries no host.
pub fn host_from_location(location: &str) -> Option<String> {
    let url = Url::parse(location).ok()?;
    match url.host()? {
        Host::Domain(domain) if domain.is_empty() => None,
        Host::Domain(domain) => Some(domain.to_string()),
        Host::Ipv4(addr) => Some(addr.to_string()),
        Host::Ipv6(addr) => Some(addr.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(text: &str) -> DiscoveryResponse {
        DiscoveryResponse::new("10.0.0.5:1900".parse().unwrap(), text)
    }

    #[test]
    fn test_device_from_full_reply() {
        let device = DiscoveredDevice::from(&response(
            "HTTP/1.1 200 OK\r\nCache-Control: max-age=3600\r\nST: roku:ecp\r\n\
             Location: http://10.0.0.5:8060/\r\nUSN: uuid:roku:ecp:YN00AB123456\r\n\
             Server: Roku/12.0.0 UPnP/1.0 Roku/12.0.0\r\n\r\n",
        ));

        assert_eq!(device.from, "10.0.0.5".parse::<IpAddr>().unwrap());
        assert_eq!(device.location.as_deref(), Some("http://10.0.0.5:8060/"));
        assert_eq!(device.usn.as_deref(), Some("uuid:roku:ecp:YN00AB123456"));
        assert_eq!(
            device.server.as_deref(),
            Some("Roku/12.0.0 UPnP/1.0 Roku/12.0.0")
        );
        assert_eq!(device.host().as_deref(), Some("10.0.0.5"));
    }

    #[test]
    fn test_device_with_missing_headers() {
        let device = DiscoveredDevice::from(&response("HTTP/1.1 200 OK\r\nLocation:\r\n"));
        assert!(device.location.is_none());
        assert!(device.usn.is_none());
        assert!(device.server.is_none());
        assert!(device.host().is_none());
    }

    #[test]
    fn test_host_from_location() {
        assert_eq!(
            host_from_location("http://10.0.0.5:8060/").as_deref(),
            Some("10.0.0.5")
        );
        assert_eq!(
            host_from_location("http://Roku-Living.local:8060/dial").as_deref(),
            Some("roku-living.local")
        );
        assert_eq!(
            host_from_location("http://[fe80::1]:8060/").as_deref(),
            Some("fe80::1")
        );
        assert!(host_from_location("not a url").is_none());
        assert!(host_from_location("/relative/path").is_none());
        assert!(host_from_location("mailto:someone@example.com").is_none());
    }
}
