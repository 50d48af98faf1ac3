//! Display formatting helpers

use chrono::{DateTime, Local, Utc};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("Address too short to shorten: {0} characters")]
    TooShort(usize),
}

/// Shorten an address for display: first 6 and last 4 characters joined
/// by an ellipsis, e.g. `0x293E...E543`. Always 13 characters.
pub fn shorten_address(addr: &str) -> Result<String, FormatError> {
    let chars: Vec<char> = addr.chars().collect();
    if chars.len() < 10 {
        return Err(FormatError::TooShort(chars.len()));
    }
    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    Ok(format!("{}...{}", head, tail))
}

/// Human-readable month/day/hour/minute in the host local timezone,
/// e.g. `Apr 28, 3:45 PM`
pub fn format_timestamp(ms: i64) -> String {
    match DateTime::<Utc>::from_timestamp_millis(ms) {
        Some(dt) => dt
            .with_timezone(&Local)
            .format("%b %-d, %-I:%M %p")
            .to_string(),
        None => "unknown time".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shorten_address() {
        let short = shorten_address("0x293E7f49057A8F3962d005dC697ce1b6788dE543").unwrap();
        assert_eq!(short, "0x293E...E543");
        assert_eq!(short.chars().count(), 13);
    }

    #[test]
    fn test_shorten_minimum_length_input() {
        // Any valid-length input yields exactly 13 characters
        assert_eq!(shorten_address("0123456789").unwrap(), "012345...6789");
    }

    #[test]
    fn test_shorten_rejects_short_input() {
        assert_eq!(
            shorten_address("0x1234567"),
            Err(FormatError::TooShort(9))
        );
        assert_eq!(shorten_address(""), Err(FormatError::TooShort(0)));
    }

    #[test]
    fn test_format_timestamp_shape() {
        // Exact output depends on the host timezone; check the shape
        let out = format_timestamp(1_745_836_200_000);
        assert!(out.contains(", "));
        assert!(out.contains(':'));
        assert!(out.ends_with("AM") || out.ends_with("PM"));
    }

    #[test]
    fn test_format_timestamp_out_of_range() {
        assert_eq!(format_timestamp(i64::MAX), "unknown time");
    }
}
