use std::iter::FusedIterator;

const OPEN: char = '{';
const CLOSE: char = '}';

/// Borrowing iterator over the placeholder tokens of a format string.
///
/// Each `{` is paired with the first `}` after it. A `{` without a closing
/// delimiter ends the scan.
#[derive(Debug, Clone)]
pub struct Placeholders<'a> {
    rest: &'a str,
}

/// Iterate the tokens of `format` without allocating.
pub fn placeholders(format: &str) -> Placeholders<'_> {
    Placeholders { rest: format }
}

impl<'a> Iterator for Placeholders<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.rest.find(OPEN)? + OPEN.len_utf8();
        let Some(len) = self.rest[start..].find(CLOSE) else {
            self.rest = "";
            return None;
        };
        let token = &self.rest[start..start + len];
        self.rest = &self.rest[start + len + CLOSE.len_utf8()..];
        Some(token)
    }
}

impl FusedIterator for Placeholders<'_> {}

/// Lists the placeholder tokens of `format` in order of appearance.
///
/// Duplicates are kept and `{}` yields an empty token.
pub fn extract(format: &str) -> Vec<String> {
    placeholders(format).map(str::to_owned).collect()
}

#[inline]
pub fn has_placeholders(format: &str) -> bool {
    placeholders(format).next().is_some()
}

/// Source of placeholder lists for request handlers.
///
/// The result is a JSON value so that handlers can pass it on without
/// inspecting it.
pub trait PlaceholderExtractor: Send + Sync {
    fn extract(&self, format: &str) -> serde_json::Value;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct BraceExtractor;

impl PlaceholderExtractor for BraceExtractor {
    fn extract(&self, format: &str) -> serde_json::Value {
        serde_json::Value::from(extract(format))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn invoice_format() {
        assert_eq!(extract("INV-{YY}{MM}-{NO}"), vec!["YY", "MM", "NO"]);
    }

    #[test]
    fn long_format_keeps_order() {
        let format =
            "ORDER-{YYYY}{MM}{DD}-CLIENT-{CL}-SEQUENCE-{SEQ}-CUSTOM{CUST}";
        assert_eq!(
            extract(format),
            vec!["YYYY", "MM", "DD", "CL", "SEQ", "CUST"]
        );
    }

    #[test]
    fn no_delimiters() {
        assert!(extract("PLAIN-TEXT-NO-BRACES").is_empty());
        assert!(extract("").is_empty());
        assert!(!has_placeholders("0"));
    }

    #[test]
    fn prefix_mid_suffix() {
        for (t1, t2) in [("A", "B"), ("SEQ", "YY"), ("x y", "z")] {
            let input = format!("pre{{{t1}}}mid{{{t2}}}post");
            assert_eq!(extract(&input), vec![t1, t2]);
        }
    }

    #[test]
    fn duplicates_are_kept() {
        assert_eq!(extract("{NO}-{NO}"), vec!["NO", "NO"]);
    }

    #[test]
    fn empty_braces_yield_empty_token() {
        assert_eq!(extract("A{}B"), vec![""]);
        assert_eq!(extract("{}{YY}"), vec!["", "YY"]);
    }

    #[test]
    fn unmatched_open_is_ignored() {
        assert_eq!(extract("INV-{YY"), Vec::<String>::new());
        assert_eq!(extract("{YY}-{MM"), vec!["YY"]);
    }

    #[test]
    fn stray_close_is_literal() {
        assert_eq!(extract("}{YY}}"), vec!["YY"]);
    }

    #[test]
    fn nested_pairs_with_first_close() {
        assert_eq!(extract("{a{b}c}"), vec!["a{b"]);
        assert_eq!(extract("{{SEQ}}"), vec!["{SEQ"]);
    }

    #[test]
    fn multibyte_text() {
        assert_eq!(extract("Nº-{AÑO}-€{NO}"), vec!["AÑO", "NO"]);
    }

    #[test]
    fn iterator_is_fused() {
        let mut it = placeholders("{A}{B");
        assert_eq!(it.next(), Some("A"));
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn extraction_is_repeatable() {
        let format = "INV-{YY}{MM}-{NO}";
        assert_eq!(extract(format), extract(format));
        let ex = BraceExtractor;
        assert_eq!(ex.extract(format), ex.extract(format));
    }

    #[test]
    fn brace_extractor_returns_json_list() {
        assert_eq!(
            BraceExtractor.extract("INV-{YY}{MM}-{NO}"),
            json!(["YY", "MM", "NO"])
        );
        assert_eq!(BraceExtractor.extract("INV"), json!([]));
    }
}
