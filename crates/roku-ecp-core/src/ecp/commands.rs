//! ECP request paths.
//!
//! Queries are GETs under `/query/`; commands are POSTs whose whole meaning
//! lives in the path.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left as-is in path arguments: RFC 3986 unreserved plus `/`.
const PATH_ARG: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'.')
    .remove(b'-')
    .remove(b'~')
    .remove(b'/');

pub const DEVICE_INFO_PATH: &str = "/query/device-info";
pub const APPS_PATH: &str = "/query/apps";

/// Prefix that turns a keypress into a literal character
const LITERAL_KEY_PREFIX: &str = "Lit_";

/// Key actions accepted by the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Press,
    Down,
    Up,
}

impl KeyAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            KeyAction::Press => "keypress",
            KeyAction::Down => "keydown",
            KeyAction::Up => "keyup",
        }
    }
}

/// Percent-encode a single path argument.
pub fn encode_path_arg(arg: &str) -> String {
    utf8_percent_encode(arg, PATH_ARG).to_string()
}

/// Path for a key action, e.g. `/keypress/Home`.
pub fn key_path(action: KeyAction, key: &str) -> String {
    format!("/{}/{}", action.as_str(), encode_path_arg(key))
}

/// Path that launches an installed app by id.
pub fn launch_path(app_id: &str) -> String {
    format!("/launch/{}", encode_path_arg(app_id))
}

/// One keypress path per character of `text`, typing it literally.
pub fn literal_key_paths(text: &str) -> Vec<String> {
    text.chars()
        .map(|ch| key_path(KeyAction::Press, &format!("{}{}", LITERAL_KEY_PREFIX, ch)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_paths() {
        assert_eq!(key_path(KeyAction::Press, "Home"), "/keypress/Home");
        assert_eq!(key_path(KeyAction::Down, "Left"), "/keydown/Left");
        assert_eq!(key_path(KeyAction::Up, "Left"), "/keyup/Left");
    }

    #[test]
    fn test_path_arg_encoding() {
        assert_eq!(encode_path_arg("Volume Up"), "Volume%20Up");
        assert_eq!(encode_path_arg("a/b"), "a/b");
        assert_eq!(encode_path_arg("A-z_0.9~"), "A-z_0.9~");
        assert_eq!(encode_path_arg("?&#%"), "%3F%26%23%25");
        assert_eq!(encode_path_arg("é"), "%C3%A9");
    }

    #[test]
    fn test_launch_path() {
        assert_eq!(launch_path("12"), "/launch/12");
        assert_eq!(launch_path("dev"), "/launch/dev");
    }

    #[test]
    fn test_literal_key_paths() {
        assert_eq!(
            literal_key_paths("a b"),
            vec!["/keypress/Lit_a", "/keypress/Lit_%20", "/keypress/Lit_b"]
        );
        assert_eq!(literal_key_paths("ü!"), vec!["/keypress/Lit_%C3%BC", "/keypress/Lit_%21"]);
        assert!(literal_key_paths("").is_empty());
    }
}
