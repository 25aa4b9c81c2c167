use serde::Deserialize;

use crate::constants::{
    VCALENDAR_CONTENT_TYPE, VCALENDAR_FILE_EXTENSION, VCARD_CONTENT_TYPE, VCARD_FILE_EXTENSION,
};
use crate::error::CoreError;

/// Output format of a rendered contact.
///
/// `VCard` emits the plain card; `VCalendar` wraps the card as a base64
/// attachment inside a calendar event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    VCard,
    VCalendar,
}

impl OutputFormat {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::VCard => "vcard",
            Self::VCalendar => "vcalendar",
        }
    }

    /// ## Summary
    /// Returns the MIME content type a caller should deliver this format with.
    #[must_use]
    pub const fn content_type(self) -> &'static str {
        match self {
            Self::VCard => VCARD_CONTENT_TYPE,
            Self::VCalendar => VCALENDAR_CONTENT_TYPE,
        }
    }

    /// ## Summary
    /// Returns the file extension of a download in this format.
    #[must_use]
    pub const fn file_extension(self) -> &'static str {
        match self {
            Self::VCard => VCARD_FILE_EXTENSION,
            Self::VCalendar => VCALENDAR_FILE_EXTENSION,
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "vcard" => Ok(Self::VCard),
            "vcalendar" => Ok(Self::VCalendar),
            other => Err(CoreError::InvalidInput(format!(
                "unknown output format: {other}"
            ))),
        }
    }
}
