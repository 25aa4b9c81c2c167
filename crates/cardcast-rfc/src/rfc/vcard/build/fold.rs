//! Content line folding (RFC 2426 §2.6, RFC 5545 §3.1).

/// Maximum line length in octets (not including CRLF).
pub const MAX_LINE_OCTETS: usize = 75;

/// Folds a content line to comply with the 75-octet limit.
///
/// Accepts the line with or without its trailing CRLF and always returns
/// CRLF-terminated physical lines. Continuation lines start with a single
/// space, which counts toward the limit. UTF-8 sequences are never split.
#[must_use]
pub fn fold_line(line: &str) -> String {
    let line = line.strip_suffix("\r\n").unwrap_or(line);

    if line.len() <= MAX_LINE_OCTETS {
        return format!("{line}\r\n");
    }

    let mut result = String::with_capacity(line.len() + (line.len() / MAX_LINE_OCTETS) * 3);
    let mut rest = line;
    let mut first_line = true;

    while !rest.is_empty() {
        // Continuation lines have one less octet available (the leading space)
        let max_len = if first_line {
            MAX_LINE_OCTETS
        } else {
            MAX_LINE_OCTETS - 1
        };

        let mut end = rest.len().min(max_len);
        while !rest.is_char_boundary(end) {
            end -= 1;
        }

        if !first_line {
            result.push(' ');
        }
        result.push_str(&rest[..end]);
        result.push_str("\r\n");

        rest = &rest[end..];
        first_line = false;
    }

    result
}

/// Joins folded continuation lines back into logical lines.
#[must_use]
pub fn unfold_lines(text: &str) -> String {
    text.replace("\r\n ", "").replace("\r\n\t", "")
}
