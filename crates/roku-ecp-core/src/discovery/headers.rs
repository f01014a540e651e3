//! Header parsing for SSDP replies.
//!
//! Replies look like an HTTP response head: a status line followed by
//! `Name: value` lines. Anything that does not fit is skipped.

use std::collections::HashMap;

/// Header block of one SSDP reply, keyed by lowercase header name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderMap {
    inner: HashMap<String, String>,
}

impl HeaderMap {
    /// Look up a header by name, ignoring case.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.inner
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    fn insert(&mut self, name: &str, value: &str) {
        self.inner
            .insert(name.to_ascii_lowercase(), value.to_string());
    }
}

/// Parse a raw SSDP reply into its headers.
///
/// The first line is the status line and is always skipped. Lines without a
/// colon are ignored; duplicate names keep the last value.
pub fn parse_headers(raw: &str) -> HeaderMap {
    let mut headers = HeaderMap::default();

    for line in raw.lines().skip(1) {
        let Some((name, value)) = line.split_once(':') else {
            continue;
        };
        headers.insert(name.trim(), value.trim());
    }

    headers
}

#[cfg(test)]
mod tests {
    use super::*;

    const REPLY: &str =
        "HTTP/1.1 200 OK\r\nLOCATION: http://10.0.0.5:8060/\r\nUSN: uuid:device::roku:ecp\r\n";

    #[test]
    fn test_parse_roku_reply() {
        let headers = parse_headers(REPLY);
        assert_eq!(headers.len(), 2);
        assert_eq!(headers.get("location"), Some("http://10.0.0.5:8060/"));
        assert_eq!(headers.get("usn"), Some("uuid:device::roku:ecp"));
    }

    #[test]
    fn test_lookup_ignores_case() {
        let headers = parse_headers("HTTP/1.1 200 OK\nCache-Control: max-age=3600\nsErVeR: Roku/9.0\n");
        assert_eq!(headers.get("cache-control"), Some("max-age=3600"));
        assert_eq!(headers.get("CACHE-CONTROL"), Some("max-age=3600"));
        assert_eq!(headers.get("Server"), Some("Roku/9.0"));
    }

    #[test]
    fn test_lines_without_colon_are_dropped() {
        let headers = parse_headers("HTTP/1.1 200 OK\r\ngarbage line\r\n\r\nST: roku:ecp\r\n");
        assert_eq!(headers.len(), 1);
        assert_eq!(headers.get("st"), Some("roku:ecp"));
    }

    #[test]
    fn test_status_line_is_skipped_even_with_colon() {
        let headers = parse_headers("X-Status: looks-like-a-header\nEXT:\n");
        assert!(headers.get("x-status").is_none());
        assert_eq!(headers.get("ext"), Some(""));
    }

    #[test]
    fn test_splits_on_first_colon_and_trims() {
        let headers = parse_headers("HTTP/1.1 200 OK\n  Location :  http://[fe80::1]:8060/  \n");
        assert_eq!(headers.get("location"), Some("http://[fe80::1]:8060/"));
    }

    #[test]
    fn test_duplicate_header_last_wins() {
        let headers = parse_headers("HTTP/1.1 200 OK\nUSN: first\nusn: second\n");
        assert_eq!(headers.len(), 1);
        assert_eq!(headers.get("USN"), Some("second"));
    }

    #[test]
    fn test_empty_and_garbage_input() {
        assert!(parse_headers("").is_empty());
        assert!(parse_headers("\u{fffd}\u{fffd}\nno headers here").is_empty());
    }
}
