//! Ordered, append-only property store.

use super::element::{DefinedElements, Element};
use super::property::{Property, PropertyValue};
use crate::error::{RfcError, RfcResult};

/// Properties in insertion order together with the elements already used.
///
/// Properties are never removed or changed once stored.
#[derive(Debug, Clone, Default)]
pub struct PropertyStore {
    properties: Vec<Property>,
    defined: DefinedElements,
}

impl PropertyStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a property under `element`.
    ///
    /// ## Errors
    /// Returns `RfcError::DuplicateElement` if `element` is single-valued and
    /// already defined. The store is left unchanged in that case.
    pub fn set_property(
        &mut self,
        element: Element,
        key: impl Into<String>,
        value: PropertyValue,
    ) -> RfcResult<()> {
        self.ensure_available(element)?;

        let key = key.into();
        tracing::debug!(element = %element, key = %key, "Storing property");

        self.defined.insert(element);
        self.properties.push(Property::new(key, value));
        Ok(())
    }

    /// Checks that `element` can take another property.
    ///
    /// ## Errors
    /// Returns `RfcError::DuplicateElement` if it cannot.
    pub fn ensure_available(&self, element: Element) -> RfcResult<()> {
        if !element.is_repeatable() && self.defined.contains(element) {
            tracing::warn!(element = %element, "Rejected duplicate element");
            return Err(RfcError::DuplicateElement(element));
        }
        Ok(())
    }

    /// Returns whether a property with exactly `key` and a non-empty value exists.
    #[must_use]
    pub fn has_property(&self, key: &str) -> bool {
        self.properties
            .iter()
            .any(|p| p.key == key && !p.value.is_empty())
    }

    #[must_use]
    pub fn is_defined(&self, element: Element) -> bool {
        self.defined.contains(element)
    }

    /// Returns all properties in insertion order.
    #[must_use]
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Property> {
        self.properties.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl<'a> IntoIterator for &'a PropertyStore {
    type Item = &'a Property;
    type IntoIter = std::slice::Iter<'a, Property>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
