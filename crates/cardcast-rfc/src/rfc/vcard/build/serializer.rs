//! vCard serialization.

use cardcast_core::constants::{CRLF, VERSION_LINE};
use chrono::{DateTime, SecondsFormat, Utc};

use super::escape::escape_value;
use super::fold::fold_line;
use crate::rfc::vcard::core::{Property, names};

/// Serializes a card from properties in insertion order.
///
/// ## Summary
/// Emits `BEGIN:VCARD`, `VERSION:3.0`, a `REV` line stamped with `rev`,
/// one escaped and folded line per property, then `END:VCARD`. Every line
/// ends with CRLF.
#[must_use]
pub fn serialize_card(properties: &[Property], rev: DateTime<Utc>) -> String {
    let mut output = String::new();

    output.push_str("BEGIN:VCARD");
    output.push_str(CRLF);
    output.push_str(VERSION_LINE);

    output.push_str(names::REV);
    output.push(':');
    output.push_str(&format_rev(rev));
    output.push_str(CRLF);

    for prop in properties {
        serialize_property(prop, &mut output);
    }

    output.push_str("END:VCARD");
    output.push_str(CRLF);

    tracing::trace!(
        properties = properties.len(),
        bytes = output.len(),
        "Serialized vCard"
    );

    output
}

/// Appends one folded `KEY:VALUE` line.
pub fn serialize_property(prop: &Property, output: &mut String) {
    let mut line = String::with_capacity(prop.key.len() + 1 + 32);
    line.push_str(&prop.key);
    line.push(':');
    line.push_str(&escape_value(&prop.value));

    output.push_str(&fold_line(&line));
}

/// Formats the revision timestamp, e.g. `2024-01-02T03:04:05.000Z`.
#[must_use]
pub fn format_rev(rev: DateTime<Utc>) -> String {
    rev.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rfc::vcard::core::PropertyValue;
    use chrono::TimeZone;

    fn rev() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5)
            .single()
            .expect("valid timestamp")
    }

    #[test]
    fn serialize_empty_card() {
        let output = serialize_card(&[], rev());
        assert_eq!(
            output,
            "BEGIN:VCARD\r\nVERSION:3.0\r\nREV:2024-01-02T03:04:05.000Z\r\nEND:VCARD\r\n"
        );
    }

    #[test]
    fn serialize_keeps_insertion_order() {
        let props = vec![
            Property::new("TEL", PropertyValue::text("555")),
            Property::new("FN", PropertyValue::text("Jane")),
            Property::new("EMAIL;INTERNET", PropertyValue::text("jane@example.com")),
        ];

        let output = serialize_card(&props, rev());
        let tel = output.find("TEL:555").expect("TEL present");
        let fn_ = output.find("FN:Jane").expect("FN present");
        let email = output.find("EMAIL;INTERNET:").expect("EMAIL present");
        assert!(tel < fn_ && fn_ < email);
    }

    #[test]
    fn serialize_text_escaping() {
        let props = vec![Property::new(
            "NOTE",
            PropertyValue::text("Line1\nLine2; with special, chars"),
        )];

        let output = serialize_card(&props, rev());
        assert!(output.contains("NOTE:Line1\\nLine2\\; with special\\, chars\r\n"));
    }

    #[test]
    fn serialize_structured_name() {
        let props = vec![Property::new(
            "N",
            PropertyValue::Structured(vec![
                "Doe".into(),
                "John".into(),
                String::new(),
                String::new(),
                String::new(),
            ]),
        )];

        let output = serialize_card(&props, rev());
        assert!(output.contains("N:Doe;John;;;\r\n"));
    }

    #[test]
    fn serialize_folds_long_lines() {
        let props = vec![Property::new("NOTE", PropertyValue::text("X".repeat(100)))];

        let output = serialize_card(&props, rev());
        assert!(output.contains("\r\n X"));
        for line in output.split("\r\n") {
            assert!(line.len() <= 75);
        }
    }
}
