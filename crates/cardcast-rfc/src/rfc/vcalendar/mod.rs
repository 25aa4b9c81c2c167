//! vCalendar 2.0 wrapping of a rendered vCard.
//!
//! The card travels as a base64 `ATTACH` of a single `VEVENT`; opening the
//! event offers the attachment for import into the address book.
//!
//! - [`embed`] - base64 chunking of the card body and its reverse
//! - [`wrapper`] - the calendar-event template

pub mod embed;
pub mod wrapper;

pub use embed::{CHUNK_WIDTH, embed_card, extract_card};
pub use wrapper::{CalendarOptions, wrap_card};
