//! Logical contact elements.

use std::collections::HashSet;

/// A logical contact attribute category.
///
/// Elements decide single- vs multi-valued semantics and are distinct
/// from the record keys they are written under (`Company` is stored as
/// `ORG`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    Name,
    FullName,
    Address,
    Birthday,
    Company,
    Email,
    JobTitle,
    Role,
    Note,
    Categories,
    PhoneNumber,
    Url,
    Logo,
    Photo,
    Item,
}

impl Element {
    /// Elements that may be set more than once.
    pub const REPEATABLE: [Self; 5] = [
        Self::Email,
        Self::Address,
        Self::PhoneNumber,
        Self::Url,
        Self::Item,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::FullName => "fullname",
            Self::Address => "address",
            Self::Birthday => "birthday",
            Self::Company => "company",
            Self::Email => "email",
            Self::JobTitle => "jobtitle",
            Self::Role => "role",
            Self::Note => "note",
            Self::Categories => "categories",
            Self::PhoneNumber => "phoneNumber",
            Self::Url => "url",
            Self::Logo => "logo",
            Self::Photo => "photo",
            Self::Item => "item",
        }
    }

    /// Returns whether more than one property may be stored for this element.
    #[must_use]
    pub const fn is_repeatable(self) -> bool {
        matches!(
            self,
            Self::Email | Self::Address | Self::PhoneNumber | Self::Url | Self::Item
        )
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The set of elements for which at least one property has been stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefinedElements(HashSet<Element>);

impl DefinedElements {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks an element as defined. Returns `false` if it already was.
    pub fn insert(&mut self, element: Element) -> bool {
        self.0.insert(element)
    }

    #[must_use]
    pub fn contains(&self, element: Element) -> bool {
        self.0.contains(&element)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
