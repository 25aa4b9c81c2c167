//! Convenience setters, one per contact field.
//!
//! Each setter builds the full record key and value and stores it with a
//! single `set_property` call (two for URL items). Validation happens
//! before anything is stored.

use super::VCardBuilder;
use crate::error::RfcResult;
use crate::rfc::vcard::build::escape_param_value;
use crate::rfc::vcard::core::{
    Address, Element, MediaType, Organization, PropertyValue, StructuredName, names,
};

/// Appends `;kind` to `name` when the cleaned `kind` is non-empty.
fn typed_key(name: &str, kind: &str) -> String {
    let kind = escape_param_value(kind);
    if kind.is_empty() {
        name.to_string()
    } else {
        format!("{name};{kind}")
    }
}

impl VCardBuilder {
    /// Adds the structured name and, unless a full name is already set, a
    /// formatted `FN` built from its non-empty parts.
    ///
    /// ## Errors
    /// Returns `RfcError::DuplicateElement` if a name was already added.
    pub fn add_name(&mut self, name: &StructuredName) -> RfcResult<&mut Self> {
        let charset = self.charset_param();

        self.store.set_property(
            Element::Name,
            format!("{}{charset}", names::N),
            name.to_value(),
        )?;

        if !self.store.is_defined(Element::FullName) {
            self.store.set_property(
                Element::FullName,
                format!("{}{charset}", names::FN),
                PropertyValue::Text(name.display_name()),
            )?;
        }

        Ok(self)
    }

    /// Sets the formatted name explicitly.
    ///
    /// ## Errors
    /// Returns `RfcError::DuplicateElement` if a full name is already set,
    /// including one derived by [`add_name`](Self::add_name).
    pub fn add_full_name(&mut self, full_name: &str) -> RfcResult<&mut Self> {
        let key = format!("{}{}", names::FN, self.charset_param());
        self.set_property(Element::FullName, key, PropertyValue::text(full_name))
    }

    /// Adds an address. `kind` defaults to `WORK;POSTAL` when `None`.
    ///
    /// ## Errors
    /// Never fails; addresses are repeatable.
    pub fn add_address(&mut self, address: &Address, kind: Option<&str>) -> RfcResult<&mut Self> {
        let key = format!(
            "{}{}",
            typed_key(names::ADR, kind.unwrap_or("WORK;POSTAL")),
            self.charset_param()
        );
        self.set_property(Element::Address, key, address.to_value())
    }

    /// ## Errors
    /// Returns `RfcError::DuplicateElement` if a birthday was already added.
    pub fn add_birthday(&mut self, date: &str) -> RfcResult<&mut Self> {
        self.set_property(Element::Birthday, names::BDAY, PropertyValue::text(date))
    }

    /// ## Errors
    /// Returns `RfcError::DuplicateElement` if a company was already added.
    pub fn add_company(&mut self, organization: &Organization) -> RfcResult<&mut Self> {
        let key = format!("{}{}", names::ORG, self.charset_param());
        self.set_property(Element::Company, key, organization.to_value())
    }

    /// ## Errors
    /// Never fails; emails are repeatable.
    pub fn add_email(&mut self, address: &str, kind: &str) -> RfcResult<&mut Self> {
        let key = typed_key(&format!("{};INTERNET", names::EMAIL), kind);
        self.set_property(Element::Email, key, PropertyValue::text(address))
    }

    /// ## Errors
    /// Returns `RfcError::DuplicateElement` if a job title was already added.
    pub fn add_job_title(&mut self, job_title: &str) -> RfcResult<&mut Self> {
        let key = format!("{}{}", names::TITLE, self.charset_param());
        self.set_property(Element::JobTitle, key, PropertyValue::text(job_title))
    }

    /// ## Errors
    /// Returns `RfcError::DuplicateElement` if a role was already added.
    pub fn add_role(&mut self, role: &str) -> RfcResult<&mut Self> {
        let key = format!("{}{}", names::ROLE, self.charset_param());
        self.set_property(Element::Role, key, PropertyValue::text(role))
    }

    /// ## Errors
    /// Returns `RfcError::DuplicateElement` if a note was already added.
    pub fn add_note(&mut self, note: &str) -> RfcResult<&mut Self> {
        let key = format!("{}{}", names::NOTE, self.charset_param());
        self.set_property(Element::Note, key, PropertyValue::text(note))
    }

    /// ## Errors
    /// Returns `RfcError::DuplicateElement` if categories were already added.
    pub fn add_categories<S: AsRef<str>>(&mut self, categories: &[S]) -> RfcResult<&mut Self> {
        let key = format!("{}{}", names::CATEGORIES, self.charset_param());
        let items = categories
            .iter()
            .map(|c| c.as_ref().trim().to_string())
            .collect();
        self.set_property(Element::Categories, key, PropertyValue::List(items))
    }

    /// ## Errors
    /// Never fails; phone numbers are repeatable.
    pub fn add_phone_number(&mut self, number: &str, kind: &str) -> RfcResult<&mut Self> {
        let key = typed_key(names::TEL, kind);
        self.set_property(Element::PhoneNumber, key, PropertyValue::text(number))
    }

    /// ## Errors
    /// Never fails; URLs are repeatable.
    pub fn add_url(&mut self, url: &str, kind: &str) -> RfcResult<&mut Self> {
        let key = typed_key(names::URL, kind);
        self.set_property(Element::Url, key, PropertyValue::raw(url))
    }

    /// ## Errors
    /// Returns `RfcError::DuplicateElement` if a logo was already added.
    pub fn add_logo_url(&mut self, url: &str) -> RfcResult<&mut Self> {
        self.add_media_url(names::LOGO, url, Element::Logo)
    }

    /// Adds inline logo content (already base64 encoded).
    ///
    /// ## Errors
    /// Returns `RfcError::InvalidMediaType` for an unrecognized `mime`, or
    /// `RfcError::DuplicateElement` if a logo was already added.
    pub fn add_logo(&mut self, content: &str, mime: &str) -> RfcResult<&mut Self> {
        self.add_media_content(names::LOGO, content, mime, Element::Logo)
    }

    /// ## Errors
    /// Returns `RfcError::DuplicateElement` if a photo was already added.
    pub fn add_photo_url(&mut self, url: &str) -> RfcResult<&mut Self> {
        self.add_media_url(names::PHOTO, url, Element::Photo)
    }

    /// Adds inline photo content (already base64 encoded).
    ///
    /// ## Errors
    /// Returns `RfcError::InvalidMediaType` for an unrecognized `mime`, or
    /// `RfcError::DuplicateElement` if a photo was already added.
    pub fn add_photo(&mut self, content: &str, mime: &str) -> RfcResult<&mut Self> {
        self.add_media_content(names::PHOTO, content, mime, Element::Photo)
    }

    /// Adds a labelled URL as an `itemN.URL` / `itemN.X-ABLabel` pair.
    ///
    /// ## Errors
    /// Never fails; items are repeatable.
    pub fn add_url_item(&mut self, url: &str, label: &str, index: &str) -> RfcResult<&mut Self> {
        let index = escape_param_value(index);
        self.set_property(
            Element::Item,
            format!("item{index}.{}", names::URL),
            PropertyValue::raw(url),
        )?;
        self.set_property(
            Element::Item,
            format!("item{index}.{}", names::X_ABLABEL),
            PropertyValue::text(label),
        )
    }

    fn add_media_url(
        &mut self,
        property: &str,
        url: &str,
        element: Element,
    ) -> RfcResult<&mut Self> {
        self.set_property(
            element,
            format!("{property};VALUE=uri"),
            PropertyValue::raw(url),
        )
    }

    fn add_media_content(
        &mut self,
        property: &str,
        content: &str,
        mime: &str,
        element: Element,
    ) -> RfcResult<&mut Self> {
        let media = MediaType::parse(mime)?;
        self.set_property(
            element,
            format!("{property};ENCODING=b;TYPE={}", media.type_param()),
            PropertyValue::raw(content),
        )
    }
}
