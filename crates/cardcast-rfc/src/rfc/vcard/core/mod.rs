//! vCard core types.
//!
//! - [`Element`] / [`DefinedElements`] - logical element names and the set of those already used
//! - [`Property`] / [`PropertyValue`] - a stored record key with its unescaped value
//! - [`PropertyStore`] - ordered, append-only property collection
//!
//! ## Structured Types
//!
//! - [`StructuredName`] - N property
//! - [`Address`] - ADR property
//! - [`Organization`] - ORG property

mod element;
mod media;
mod property;
mod store;
mod structured;

pub use element::{DefinedElements, Element};
pub use media::MediaType;
pub use property::{Property, PropertyValue, names};
pub use store::PropertyStore;
pub use structured::{Address, Organization, StructuredName};
