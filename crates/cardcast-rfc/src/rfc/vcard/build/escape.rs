//! vCard text escaping.

use crate::rfc::vcard::core::PropertyValue;

/// Escapes a text value for vCard serialization.
///
/// Escapes backslash, newline, comma, and semicolon.
#[must_use]
pub fn escape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len());

    for c in s.chars() {
        match c {
            '\\' => result.push_str("\\\\"),
            '\n' => result.push_str("\\n"),
            ',' => result.push_str("\\,"),
            ';' => result.push_str("\\;"),
            '\r' => {} // Skip CR (use \n for newlines)
            _ => result.push(c),
        }
    }

    result
}

/// Reverses [`escape_text`].
///
/// Unknown escape sequences are kept as written.
#[must_use]
pub fn unescape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('n' | 'N') => result.push('\n'),
            Some(escaped @ ('\\' | ',' | ';')) => result.push(escaped),
            Some(other) => {
                result.push('\\');
                result.push(other);
            }
            None => result.push('\\'),
        }
    }

    result
}

/// Cleans a caller-supplied parameter or group name for use in a record key.
///
/// Drops control characters, `:` and `"`. `;` and `=` are kept so
/// multi-parameter kinds such as `WORK;POSTAL` pass through.
#[must_use]
pub fn escape_param_value(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_control() && *c != ':' && *c != '"')
        .collect()
}

/// Renders a property value for the value side of a content line.
#[must_use]
pub fn escape_value(value: &PropertyValue) -> String {
    match value {
        PropertyValue::Text(s) => escape_text(s),
        PropertyValue::Structured(parts) => join_escaped(parts, ';'),
        PropertyValue::List(items) => join_escaped(items, ','),
        // URIs and base64 content are not escaped, only kept on one line
        PropertyValue::Raw(s) => s.chars().filter(|c| !matches!(c, '\r' | '\n')).collect(),
    }
}

fn join_escaped(parts: &[String], separator: char) -> String {
    let mut result = String::new();
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            result.push(separator);
        }
        result.push_str(&escape_text(part));
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn escape_text_basic() {
        assert_eq!(escape_text("hello world"), "hello world");
    }

    #[test]
    fn escape_text_newline() {
        assert_eq!(escape_text("line1\nline2"), "line1\\nline2");
        assert_eq!(escape_text("line1\r\nline2"), "line1\\nline2");
    }

    #[test]
    fn escape_text_special() {
        assert_eq!(escape_text("a,b;c\\d"), "a\\,b\\;c\\\\d");
    }

    #[test]
    fn escape_leaves_uri_characters_alone() {
        assert_eq!(escape_text("a@x.com"), "a@x.com");
        assert_eq!(escape_text("50% off: now"), "50% off: now");
    }

    #[test]
    fn structured_components_escaped_individually() {
        let value = PropertyValue::Structured(vec![
            "Smith; Jones".to_string(),
            "Ann".to_string(),
            String::new(),
        ]);
        assert_eq!(escape_value(&value), "Smith\\; Jones;Ann;");
    }

    #[test]
    fn list_items_escaped_individually() {
        let value = PropertyValue::List(vec!["friends, close".to_string(), "work".to_string()]);
        assert_eq!(escape_value(&value), "friends\\, close,work");
    }

    #[test]
    fn raw_values_are_not_escaped() {
        let value = PropertyValue::raw("http://example.com/a,b;c");
        assert_eq!(escape_value(&value), "http://example.com/a,b;c");
    }

    #[test]
    fn raw_values_lose_line_breaks() {
        let value = PropertyValue::raw("QUJD\r\nREVG\n");
        assert_eq!(escape_value(&value), "QUJDREVG");
    }

    #[test]
    fn param_values_drop_controls_and_colons() {
        assert_eq!(escape_param_value("HOME:x\r\nNOTE"), "HOMExNOTE");
        assert_eq!(escape_param_value("WORK;POSTAL"), "WORK;POSTAL");
        assert_eq!(escape_param_value("TYPE=\"cell\"\t"), "TYPE=cell");
    }

    #[test]
    fn unescape_keeps_unknown_sequences() {
        assert_eq!(unescape_text("a\\tb"), "a\\tb");
        assert_eq!(unescape_text("trailing\\"), "trailing\\");
        assert_eq!(unescape_text("A\\NB"), "A\nB");
    }

    proptest! {
        #[test]
        fn escape_round_trips(s in "[^\r]{0,200}") {
            prop_assert_eq!(unescape_text(&escape_text(&s)), s);
        }

        #[test]
        fn raw_and_param_values_stay_on_one_line(s in "\\PC{0,80}|[\r\n:a-z]{0,20}") {
            let raw = escape_value(&PropertyValue::raw(s.clone()));
            prop_assert!(!raw.contains('\r') && !raw.contains('\n'));

            let param = escape_param_value(&s);
            prop_assert!(!param.contains(':'));
            prop_assert!(!param.chars().any(char::is_control));
        }

        #[test]
        fn escaped_text_has_no_terminators_or_bare_separators(s in "\\PC{0,120}|[;,\\\\\n]{0,20}") {
            let escaped = escape_text(&s);
            prop_assert!(!escaped.contains('\n'));
            prop_assert!(!escaped.contains('\r'));

            let mut chars = escaped.chars();
            while let Some(c) = chars.next() {
                if c == '\\' {
                    chars.next();
                } else {
                    prop_assert!(c != ';' && c != ',');
                }
            }
        }
    }
}
