//! Contact record builder.
//!
//! [`VCardBuilder`] owns the property store, applies the convenience
//! setters in [`fields`] and renders either the plain vCard or the
//! vCalendar wrapper, depending on its [`OutputFormat`].

mod fields;


use std::fmt;

use cardcast_core::config::Settings;
use cardcast_core::constants::{DEFAULT_CHARSET, DEFAULT_FILENAME, VCARD_FILE_EXTENSION};
use cardcast_core::types::OutputFormat;
use chrono::{DateTime, Utc};

use crate::error::RfcResult;
use crate::rfc::vcalendar::{CalendarOptions, wrap_card};
use crate::rfc::vcard::build::serialize_card;
use crate::rfc::vcard::core::{Element, Property, PropertyStore, PropertyValue};

/// Builds a single contact card.
#[derive(Debug, Clone)]
pub struct VCardBuilder {
    store: PropertyStore,
    format: OutputFormat,
    charset: String,
    filename: String,
    calendar: CalendarOptions,
}

impl Default for VCardBuilder {
    fn default() -> Self {
        Self::new(OutputFormat::VCard)
    }
}

impl VCardBuilder {
    /// Creates an empty builder rendering in `format`.
    #[must_use]
    pub fn new(format: OutputFormat) -> Self {
        Self {
            store: PropertyStore::new(),
            format,
            charset: DEFAULT_CHARSET.to_string(),
            filename: DEFAULT_FILENAME.to_string(),
            calendar: CalendarOptions::default(),
        }
    }

    /// ## Summary
    /// Creates an empty builder from loaded settings.
    ///
    /// ## Errors
    /// Returns an error if the configured calendar timezone is unknown.
    pub fn from_settings(settings: &Settings) -> RfcResult<Self> {
        let mut builder = Self::new(settings.output.format);
        builder.set_charset(settings.output.charset.clone());
        builder.set_filename(&settings.output.filename);
        builder.calendar = CalendarOptions {
            timezone: settings.calendar.tz()?,
            summary: settings.calendar.summary.clone(),
        };
        Ok(builder)
    }

    /// Appends a property under `element`.
    ///
    /// ## Errors
    /// Returns `RfcError::DuplicateElement` if `element` is single-valued and already set.
    pub fn set_property(
        &mut self,
        element: Element,
        key: impl Into<String>,
        value: PropertyValue,
    ) -> RfcResult<&mut Self> {
        self.store.set_property(element, key, value)?;
        Ok(self)
    }

    #[must_use]
    pub fn has_property(&self, key: &str) -> bool {
        self.store.has_property(key)
    }

    /// Returns all stored properties in insertion order.
    #[must_use]
    pub fn properties(&self) -> &[Property] {
        self.store.properties()
    }

    #[must_use]
    pub fn store(&self) -> &PropertyStore {
        &self.store
    }

    // --- Mode and metadata ---

    pub fn set_format(&mut self, format: OutputFormat) {
        self.format = format;
    }

    #[must_use]
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    #[must_use]
    pub fn content_type(&self) -> &'static str {
        self.format.content_type()
    }

    pub fn set_charset(&mut self, charset: impl Into<String>) {
        self.charset = charset.into();
    }

    #[must_use]
    pub fn charset(&self) -> &str {
        &self.charset
    }

    /// Returns the `;CHARSET=` parameter appended to text keys.
    ///
    /// Only `utf-8` is announced; any other charset yields an empty string.
    #[must_use]
    pub fn charset_param(&self) -> String {
        if self.charset == DEFAULT_CHARSET {
            format!(";CHARSET={}", self.charset)
        } else {
            String::new()
        }
    }

    /// Sets the download file name. Empty names are ignored.
    pub fn set_filename(&mut self, filename: &str) {
        if filename.is_empty() {
            return;
        }
        self.filename = filename.to_string();
    }

    #[must_use]
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Extension of the card file, also used for the calendar attachment name.
    #[must_use]
    #[expect(clippy::unused_self)]
    pub fn file_extension(&self) -> &'static str {
        VCARD_FILE_EXTENSION
    }

    /// File name for delivering [`render`](Self::render) output.
    #[must_use]
    pub fn download_file_name(&self) -> String {
        format!("{}.{}", self.filename, self.format.file_extension())
    }

    #[must_use]
    pub fn calendar_options(&self) -> &CalendarOptions {
        &self.calendar
    }

    pub fn set_calendar_options(&mut self, options: CalendarOptions) {
        self.calendar = options;
    }

    // --- Rendering ---

    /// Renders the vCard stamped with the current time.
    #[must_use]
    pub fn build_card(&self) -> String {
        self.build_card_at(Utc::now())
    }

    #[must_use]
    pub fn build_card_at(&self, now: DateTime<Utc>) -> String {
        tracing::debug!(properties = self.store.len(), "Building vCard");
        serialize_card(self.store.properties(), now)
    }

    /// Renders the vCard wrapped in a vCalendar event, stamped with the current time.
    #[must_use]
    pub fn build_calendar(&self) -> String {
        self.build_calendar_at(Utc::now())
    }

    #[must_use]
    pub fn build_calendar_at(&self, now: DateTime<Utc>) -> String {
        let card = self.build_card_at(now);
        wrap_card(&card, &self.filename, &self.calendar, now)
    }

    /// Renders in the current output format.
    #[must_use]
    pub fn render(&self) -> String {
        self.render_at(Utc::now())
    }

    #[must_use]
    pub fn render_at(&self, now: DateTime<Utc>) -> String {
        match self.format {
            OutputFormat::VCard => self.build_card_at(now),
            OutputFormat::VCalendar => self.build_calendar_at(now),
        }
    }
}

impl fmt::Display for VCardBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
