//! SSDP search client.
//!
//! Sends a single M-SEARCH and gathers every reply that arrives before the
//! deadline. The socket binds an ephemeral port: replies to a search are
//! unicast back to the sender, so there is no need to share port 1900 with
//! other listeners.

use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::time::Duration;

use socket2::{Domain, Protocol, Socket, Type};
use tokio::net::UdpSocket;
use tokio::time::{timeout_at, Instant};
use tracing::{debug, trace};

use super::device::DiscoveryResponse;
use crate::error::CoreError;

/// SSDP multicast group
pub const SSDP_MULTICAST_ADDR: Ipv4Addr = Ipv4Addr::new(239, 255, 255, 250);

/// SSDP port
pub const SSDP_PORT: u16 = 1900;

/// Search target advertised by Roku players
pub const ROKU_SEARCH_TARGET: &str = "roku:ecp";

/// Default search window in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 3;

/// Maximum wait, in seconds, devices may delay their reply (`MX` header)
const SEARCH_MX: u32 = 2;

/// Largest datagram we accept
const RECV_BUFFER_SIZE: usize = 65535;

/// Deadline used when `now + timeout` does not fit in an `Instant`
const FAR_FUTURE: Duration = Duration::from_secs(86400 * 365 * 30);

/// Parameters of one search.
#[derive(Debug, Clone)]
pub struct SearchOptions {
    /// Where the M-SEARCH is sent
    pub target: SocketAddr,
    /// Value of the `ST` header
    pub search_target: String,
    /// Collection window, measured from the moment the query is sent
    pub timeout: Duration,
}

impl SearchOptions {
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout,
            ..Self::default()
        }
    }
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            target: SocketAddr::V4(SocketAddrV4::new(SSDP_MULTICAST_ADDR, SSDP_PORT)),
            search_target: ROKU_SEARCH_TARGET.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Build the M-SEARCH datagram payload.
///
/// `HOST` always names the multicast group, whatever address the query is
/// actually sent to.
pub fn build_search_request(search_target: &str) -> String {
    format!(
        "M-SEARCH * HTTP/1.1\r\n\
         HOST: {}:{}\r\n\
         MAN: \"ssdp:discover\"\r\n\
         ST: {}\r\n\
         MX: {}\r\n\
         \r\n",
        SSDP_MULTICAST_ADDR, SSDP_PORT, search_target, SEARCH_MX
    )
}

/// Create the UDP socket used for one search.
fn create_search_socket() -> Result<std::net::UdpSocket, std::io::Error> {
    let socket = Socket::new(Domain::IPV4, Type::DGRAM, Some(Protocol::UDP))?;

    socket.set_reuse_address(true)?;

    let addr = SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, 0));
    socket.bind(&addr.into())?;

    socket.set_nonblocking(true)?;

    Ok(socket.into())
}

/// Send one M-SEARCH and collect every reply until the timeout elapses.
///
/// Replies are returned in arrival order without deduplication. A zero
/// timeout returns an empty list without touching the network.
pub async fn search(options: &SearchOptions) -> Result<Vec<DiscoveryResponse>, CoreError> {
    let mut responses = Vec::new();

    if options.timeout.is_zero() {
        debug!("SSDP search skipped: zero timeout");
        return Ok(responses);
    }

    let socket = UdpSocket::from_std(create_search_socket().map_err(CoreError::Discovery)?)
        .map_err(CoreError::Discovery)?;

    let request = build_search_request(&options.search_target);
    socket
        .send_to(request.as_bytes(), options.target)
        .await
        .map_err(CoreError::Discovery)?;

    let now = Instant::now();
    let deadline = now
        .checked_add(options.timeout)
        .unwrap_or_else(|| now + FAR_FUTURE);
    debug!(
        target_addr = %options.target,
        st = %options.search_target,
        timeout_ms = options.timeout.as_millis() as u64,
        "M-SEARCH sent"
    );

    let mut buf = vec![0u8; RECV_BUFFER_SIZE];

    while Instant::now() < deadline {
        match timeout_at(deadline, socket.recv_from(&mut buf)).await {
            Ok(Ok((len, from))) => {
                let text = String::from_utf8_lossy(&buf[..len]).into_owned();
                trace!(%from, len, "SSDP reply received");
                responses.push(DiscoveryResponse::new(from, text));
            }
            Ok(Err(e)) => return Err(CoreError::Discovery(e)),
            Err(_) => break,
        }
    }

    debug!(count = responses.len(), "SSDP search finished");

    Ok(responses)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_request_payload() {
        assert_eq!(
            build_search_request(ROKU_SEARCH_TARGET),
            "M-SEARCH * HTTP/1.1\r\n\
             HOST: 239.255.255.250:1900\r\n\
             MAN: \"ssdp:discover\"\r\n\
             ST: roku:ecp\r\n\
             MX: 2\r\n\
             \r\n"
        );
    }

    #[test]
    fn test_default_options() {
        let options = SearchOptions::default();
        assert_eq!(options.target, "239.255.255.250:1900".parse().unwrap());
        assert_eq!(options.search_target, "roku:ecp");
        assert_eq!(options.timeout, Duration::from_secs(3));
    }

    #[tokio::test]
    async fn test_zero_timeout_returns_immediately() {
        let started = std::time::Instant::now();
        let responses = search(&SearchOptions::with_timeout(Duration::ZERO))
            .await
            .unwrap();
        assert!(responses.is_empty());
        assert!(started.elapsed() < Duration::from_millis(100));
    }

    #[tokio::test]
    async fn test_collects_every_reply_in_order() {
        let device = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let device_addr = device.local_addr().unwrap();

        let responder = tokio::spawn(async move {
            let mut buf = [0u8; 2048];
            let (len, from) = device.recv_from(&mut buf).await.unwrap();
            let request = String::from_utf8_lossy(&buf[..len]).into_owned();

            for location in ["http://127.0.0.1:8060/", "http://127.0.0.1:8061/"] {
                let reply = format!(
                    "HTTP/1.1 200 OK\r\nST: roku:ecp\r\nLOCATION: {}\r\nUSN: uuid:roku:ecp:TEST\r\n\r\n",
                    location
                );
                device.send_to(reply.as_bytes(), from).await.unwrap();
            }
            request
        });

        let options = SearchOptions {
            target: device_addr,
            search_target: ROKU_SEARCH_TARGET.to_string(),
            timeout: Duration::from_millis(300),
        };
        let responses = search(&options).await.unwrap();

        let request = responder.await.unwrap();
        assert_eq!(request, build_search_request(ROKU_SEARCH_TARGET));

        assert_eq!(responses.len(), 2);
        assert_eq!(responses[0].from, device_addr);
        assert_eq!(
            responses[0].headers().get("location"),
            Some("http://127.0.0.1:8060/")
        );
        assert_eq!(
            responses[1].headers().get("location"),
            Some("http://127.0.0.1:8061/")
        );
    }

    #[tokio::test]
    async fn test_search_stops_at_deadline() {
        // Nothing listens on the target, so only the deadline ends the loop.
        let silent = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let options = SearchOptions {
            target: silent.local_addr().unwrap(),
            search_target: ROKU_SEARCH_TARGET.to_string(),
            timeout: Duration::from_millis(200),
        };

        let started = std::time::Instant::now();
        let responses = search(&options).await.unwrap();
        let elapsed = started.elapsed();

        assert!(responses.is_empty());
        assert!(elapsed >= Duration::from_millis(190));
        assert!(elapsed < Duration::from_millis(1000));
    }

    #[tokio::test]
    async fn test_huge_timeout_does_not_overflow() {
        let silent = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let options = SearchOptions {
            target: silent.local_addr().unwrap(),
            search_target: ROKU_SEARCH_TARGET.to_string(),
            timeout: Duration::from_secs(u64::MAX),
        };

        // The search itself never finishes; it only has to keep waiting.
        let outcome = tokio::time::timeout(Duration::from_millis(200), search(&options)).await;
        assert!(outcome.is_err());
    }

    #[tokio::test]
    async fn test_invalid_utf8_is_replaced() {
        let device = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let device_addr = device.local_addr().unwrap();

        tokio::spawn(async move {
            let mut buf = [0u8; 2048];
            let (_, from) = device.recv_from(&mut buf).await.unwrap();
            let mut reply = b"HTTP/1.1 200 OK\r\nSERVER: Roku\xff\xfe\r\n".to_vec();
            reply.extend_from_slice(b"LOCATION: http://127.0.0.1:8060/\r\n");
            device.send_to(&reply, from).await.unwrap();
        });

        let options = SearchOptions {
            target: device_addr,
            search_target: ROKU_SEARCH_TARGET.to_string(),
            timeout: Duration::from_millis(300),
        };
        let responses = search(&options).await.unwrap();

        assert_eq!(responses.len(), 1);
        let headers = responses[0].headers();
        assert_eq!(headers.get("location"), Some("http://127.0.0.1:8060/"));
        assert!(headers.get("server").unwrap().contains('\u{fffd}'));
    }
}
