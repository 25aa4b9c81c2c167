//! Contact-card (vCard 3.0) record building with optional vCalendar wrapping.
//!
//! ```rust
//! use cardcast_rfc::rfc::builder::VCardBuilder;
//! use cardcast_rfc::rfc::vcard::StructuredName;
//!
//! # fn main() -> cardcast_rfc::error::RfcResult<()> {
//! let mut card = VCardBuilder::default();
//! card.add_name(&StructuredName::simple("Doe", "John"))?
//!     .add_email("john@example.com", "")?;
//!
//! let output = card.render();
//! assert!(output.contains("FN;CHARSET=utf-8:John Doe\r\n"));
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod rfc;
