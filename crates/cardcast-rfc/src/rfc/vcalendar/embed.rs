//! Base64 attachment body.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use cardcast_core::constants::CRLF;

use crate::error::{RfcError, RfcResult};

/// Width of one base64 chunk line, not counting the leading space.
pub const CHUNK_WIDTH: usize = 74;

/// Encodes a rendered card as the body of an `ATTACH` property.
///
/// The base64 stream is split into [`CHUNK_WIDTH`] character chunks, each
/// written on its own CRLF-terminated line with one leading space so it
/// continues the `ATTACH` content line.
#[must_use]
pub fn embed_card(card: &str) -> String {
    let encoded = STANDARD.encode(card.as_bytes());
    let lines = encoded.len().div_ceil(CHUNK_WIDTH);
    let mut output = String::with_capacity(encoded.len() + lines * 3);

    // base64 output is ASCII, so byte offsets are char boundaries
    for start in (0..encoded.len()).step_by(CHUNK_WIDTH) {
        let end = (start + CHUNK_WIDTH).min(encoded.len());
        output.push(' ');
        output.push_str(&encoded[start..end]);
        output.push_str(CRLF);
    }

    output
}

/// Recovers the card embedded in a calendar produced by
/// [`wrap_card`](super::wrap_card).
///
/// ## Errors
/// Returns `RfcError::InvalidAttachment` if there is no `ATTACH` property,
/// its value is not valid base64, or the payload is not UTF-8.
pub fn extract_card(calendar: &str) -> RfcResult<String> {
    let mut lines = calendar.lines().skip_while(|line| !line.starts_with("ATTACH"));

    let mut attach = lines
        .next()
        .ok_or_else(|| RfcError::InvalidAttachment("no ATTACH property".to_string()))?
        .to_string();
    for continuation in lines.map_while(|line| line.strip_prefix(' ')) {
        attach.push_str(continuation);
    }

    let (_, payload) = attach
        .split_once(':')
        .ok_or_else(|| RfcError::InvalidAttachment("ATTACH has no value".to_string()))?;

    let bytes = STANDARD
        .decode(payload)
        .map_err(|e| RfcError::InvalidAttachment(format!("base64: {e}")))?;

    String::from_utf8(bytes).map_err(|e| RfcError::InvalidAttachment(format!("utf-8: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chunks_are_space_prefixed_and_bounded() {
        let card = format!("BEGIN:VCARD\r\nNOTE:{}\r\nEND:VCARD\r\n", "x".repeat(300));
        let body = embed_card(&card);

        let lines: Vec<&str> = body.split("\r\n").filter(|l| !l.is_empty()).collect();
        assert!(lines.len() > 1);
        for line in &lines[..lines.len() - 1] {
            assert_eq!(line.len(), CHUNK_WIDTH + 1);
            assert!(line.starts_with(' '));
        }
        let last = lines.last().expect("at least one line");
        assert!(last.starts_with(' '));
        assert!(last.len() <= CHUNK_WIDTH + 1);
    }

    #[test]
    fn stripped_body_decodes_to_card() {
        let card = "BEGIN:VCARD\r\nFN:Zoë\r\nEND:VCARD\r\n";
        let body = embed_card(card);

        let stream: String = body
            .split("\r\n")
            .map(|line| line.strip_prefix(' ').unwrap_or(line))
            .collect();
        let decoded = STANDARD.decode(stream).expect("valid base64");
        assert_eq!(decoded, card.as_bytes());
    }

    #[test]
    fn exact_multiple_of_chunk_width() {
        // 222 input bytes encode to 296 = 4 * 74 base64 characters
        let card = "a".repeat(222);
        let body = embed_card(&card);
        assert_eq!(body.matches("\r\n").count(), 4);
        assert!(!body.contains("\r\n \r\n"));
    }

    #[test]
    fn extract_without_attach_fails() {
        let err = extract_card("BEGIN:VCALENDAR\r\nEND:VCALENDAR\r\n").expect_err("no attach");
        assert!(matches!(err, RfcError::InvalidAttachment(_)));
    }

    #[test]
    fn extract_rejects_bad_base64() {
        let calendar = "ATTACH;VALUE=BINARY:\r\n !!!not-base64\r\nEND:VEVENT\r\n";
        assert!(extract_card(calendar).is_err());
    }
}
