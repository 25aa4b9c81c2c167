use thiserror::Error;

use crate::rfc::vcard::core::Element;

/// Record building errors
#[derive(Error, Debug)]
pub enum RfcError {
    #[error("This element already exists ({0})")]
    DuplicateElement(Element),

    #[error("The MIME Media Type is invalid ({0})")]
    InvalidMediaType(String),

    #[error("Invalid attachment: {0}")]
    InvalidAttachment(String),

    #[error(transparent)]
    CoreError(#[from] cardcast_core::error::CoreError),
}

pub type RfcResult<T> = std::result::Result<T, RfcError>;
