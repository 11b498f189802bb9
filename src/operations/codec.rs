// List wire codec
// The device stores each list as CRLF-delimited plain text; the codec
// mirrors the page script's split/join semantics exactly

use crate::constants::CRLF;

/// Split a response body into entries. There is no terminator rule
/// beyond the separator: text after the last CRLF is just another
/// entry, and an empty body yields one empty entry.
pub fn parse_list(body: &str) -> Vec<String> {
    body.split(CRLF).map(str::to_string).collect()
}

/// Join entries for the save endpoint
pub fn serialize_list(entries: &[String]) -> String {
    entries.join(CRLF)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_splits_on_crlf_only() {
        let body = "http://a/x\r\nhttp://b/y\r\nhttp://c/z";
        assert_eq!(
            parse_list(body),
            vec!["http://a/x", "http://b/y", "http://c/z"]
        );
        // bare LF is entry content, not a separator
        assert_eq!(parse_list("a\nb"), vec!["a\nb"]);
    }

    #[test]
    fn test_empty_body_is_one_empty_entry() {
        assert_eq!(parse_list(""), vec![""]);
    }

    #[test]
    fn test_trailing_separator_keeps_empty_tail_entry() {
        assert_eq!(parse_list("a\r\n"), vec!["a", ""]);
    }

    #[test]
    fn test_serialize_joins_with_crlf() {
        let entries = vec!["a".to_string(), "".to_string(), "b".to_string()];
        assert_eq!(serialize_list(&entries), "a\r\n\r\nb");
        assert_eq!(serialize_list(&[]), "");
    }

    #[test]
    fn test_round_trip_preserves_entries() {
        let entries = vec!["x".to_string(), "y".to_string()];
        assert_eq!(parse_list(&serialize_list(&entries)), entries);
    }
}
