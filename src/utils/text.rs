//! Text utilities

/// Marker appended to strings cut down by [`truncate`]
pub const TRUNCATION_MARKER: &str = "\n...[truncated]";

/// Cap a string at `max_chars` characters, appending a marker when cut.
///
/// Stored code and runner outputs pass through this before persistence so
/// a single submission cannot grow unbounded. Counting characters (not
/// bytes) keeps the cut from splitting a multi-byte character.
pub fn truncate(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}{}", &s[..byte_idx], TRUNCATION_MARKER),
        None => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_strings_pass_through() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("", 10), "");
    }

    #[test]
    fn test_exact_length_is_not_truncated() {
        assert_eq!(truncate("12345", 5), "12345");
    }

    #[test]
    fn test_long_strings_get_marker() {
        let out = truncate("123456", 5);
        assert_eq!(out, format!("12345{}", TRUNCATION_MARKER));
    }

    #[test]
    fn test_truncation_counts_characters_not_bytes() {
        let out = truncate("éééééé", 3);
        assert_eq!(out, format!("ééé{}", TRUNCATION_MARKER));
    }
}
