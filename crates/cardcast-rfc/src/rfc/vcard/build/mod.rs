//! vCard serialization.
//!
//! ## Features
//!
//! - Line folding at 75 octets (UTF-8 safe)
//! - Text escaping of backslash, newline, comma and semicolon
//! - Per-component escaping of structured values (N, ADR, ORG)
//! - Insertion-order output

mod escape;
mod fold;
mod serializer;

pub use escape::{escape_param_value, escape_text, escape_value, unescape_text};
pub use fold::{MAX_LINE_OCTETS, fold_line, unfold_lines};
pub use serializer::{format_rev, serialize_card, serialize_property};
