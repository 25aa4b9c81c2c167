//! vCard 3.0 record building (RFC 2426).
//!
//! This module provides the property store and serialization used to
//! render a single contact card.
//!
//! ## Overview
//!
//! Properties are appended to a [`PropertyStore`] under a logical
//! [`Element`]. Only the repeatable elements (`email`, `address`,
//! `phoneNumber`, `url`, `item`) may be set more than once.
//!
//! ## Serializing
//!
//! ```rust
//! use cardcast_rfc::rfc::vcard::{Element, PropertyStore, PropertyValue, serialize_card};
//! use chrono::{TimeZone, Utc};
//!
//! let mut store = PropertyStore::new();
//! store
//!     .set_property(Element::Email, "EMAIL;INTERNET", PropertyValue::text("jane@example.com"))
//!     .unwrap();
//!
//! let rev = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
//! let output = serialize_card(store.properties(), rev);
//! assert!(output.contains("EMAIL;INTERNET:jane@example.com\r\n"));
//! ```
//!
//! ## Submodules
//!
//! - [`core`] - Elements, properties, structured values and the store
//! - [`build`] - Escaping, folding and serialization

pub mod build;
pub mod core;


pub use build::{fold_line, serialize_card};
pub use self::core::{
    Address, DefinedElements, Element, MediaType, Organization, Property, PropertyStore,
    PropertyValue, StructuredName,
};
