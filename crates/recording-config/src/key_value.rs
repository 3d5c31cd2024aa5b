//! Plain `key=value` settings files
//!
//! All whitespace is removed from a line before it is read, so `a b = c d`
//! yields `ab` -> `cd`. Lines starting with `#` are comments. A line without a
//! value is ignored, and the value keeps any further `=` characters.

use std::collections::HashMap;
use std::path::Path;

use tracing::debug;

/// Read a settings file. A missing or unreadable file yields no entries.
pub fn parse_configuration_file(path: impl AsRef<Path>) -> HashMap<String, String> {
    let path = path.as_ref();
    match std::fs::read_to_string(path) {
        Ok(text) => parse_configuration_str(&text),
        Err(e) => {
            debug!("No settings read from {}: {}", path.display(), e);
            HashMap::new()
        }
    }
}

/// Parse settings text. Later keys overwrite earlier ones.
pub fn parse_configuration_str(text: &str) -> HashMap<String, String> {
    let mut pairs = HashMap::new();
    for line in text.lines() {
        let line: String = line.chars().filter(|c| !c.is_whitespace()).collect();
        if line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        if key.is_empty() || value.is_empty() {
            continue;
        }
        pairs.insert(key.to_string(), value.to_string());
    }
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_pairs() {
        let pairs = parse_configuration_str("log_level=debug\nskip_unsupported_streams = false\n");
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs["log_level"], "debug");
        assert_eq!(pairs["skip_unsupported_streams"], "false");
    }

    #[test]
    fn test_whitespace_removed_everywhere() {
        let pairs = parse_configuration_str("  file path =  /tmp/my recording.rssdk \t\r\n");
        assert_eq!(pairs["filepath"], "/tmp/myrecording.rssdk");
    }

    #[test]
    fn test_comments_and_blank_lines() {
        let pairs = parse_configuration_str("# a=b\n\n   \n  #c=d\ne=f\n");
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs["e"], "f");
    }

    #[test]
    fn test_missing_values_ignored() {
        let pairs = parse_configuration_str("novalue\nempty=\n=orphan\n");
        assert!(pairs.is_empty());
    }

    #[test]
    fn test_value_keeps_equals() {
        let pairs = parse_configuration_str("filter=playback=debug,info\n");
        assert_eq!(pairs["filter"], "playback=debug,info");
    }

    #[test]
    fn test_last_duplicate_wins() {
        let pairs = parse_configuration_str("a=1\na=2\n");
        assert_eq!(pairs["a"], "2");
    }

    #[test]
    fn test_missing_file() {
        let pairs = parse_configuration_file("/nonexistent/settings.conf");
        assert!(pairs.is_empty());
    }
}
