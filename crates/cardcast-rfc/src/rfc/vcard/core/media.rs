//! Media types accepted for inline PHOTO and LOGO content.

use crate::error::{RfcError, RfcResult};

/// Image subtypes recognized for inline content.
const IMAGE_SUBTYPES: &[&str] = &[
    "jpeg", "png", "gif", "bmp", "tiff", "webp", "svg+xml", "heic", "heif", "x-icon",
];

/// A validated media type, as given by the caller.
///
/// Both bare subtypes (`JPEG`) and full types (`image/png`) are accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaType(String);

impl MediaType {
    /// Validates `mime` against the recognized image types.
    ///
    /// ## Errors
    /// Returns `RfcError::InvalidMediaType` if the type is not recognized.
    pub fn parse(mime: &str) -> RfcResult<Self> {
        if Self::is_valid(mime) {
            Ok(Self(mime.trim().to_string()))
        } else {
            tracing::warn!(mime, "Rejected media type");
            Err(RfcError::InvalidMediaType(mime.to_string()))
        }
    }

    #[must_use]
    pub fn is_valid(mime: &str) -> bool {
        let lower = mime.trim().to_ascii_lowercase();
        let subtype = match lower.split_once('/') {
            Some(("image", subtype)) => subtype,
            Some(_) => return false,
            None => lower.as_str(),
        };
        IMAGE_SUBTYPES.contains(&subtype)
    }

    /// Returns the value written into the `TYPE` parameter.
    #[must_use]
    pub fn type_param(&self) -> String {
        self.0.to_ascii_uppercase()
    }
}
