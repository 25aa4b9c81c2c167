//! vCard property types.

use std::fmt;

/// The unescaped value of a stored property.
///
/// Compound values keep their components apart so escaping can be applied
/// per component without touching the separators between them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyValue {
    /// Free text, escaped on output.
    Text(String),
    /// `;`-separated components (N, ADR, ORG), each escaped on output.
    Structured(Vec<String>),
    /// `,`-separated items (CATEGORIES), each escaped on output.
    List(Vec<String>),
    /// Emitted unescaped with line breaks removed (URIs, base64 media content).
    Raw(String),
}

impl PropertyValue {
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    #[must_use]
    pub fn raw(value: impl Into<String>) -> Self {
        Self::Raw(value.into())
    }

    /// Returns whether the semantic value is empty.
    ///
    /// A structured value with only empty components counts as empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(s) | Self::Raw(s) => s.is_empty(),
            Self::Structured(parts) | Self::List(parts) => parts.iter().all(String::is_empty),
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) | Self::Raw(s) => f.write_str(s),
            Self::Structured(parts) => f.write_str(&parts.join(";")),
            Self::List(items) => f.write_str(&items.join(",")),
        }
    }
}

/// A stored property.
///
/// `key` is the fully-qualified record key including parameters
/// (e.g. `ADR;WORK;POSTAL;CHARSET=utf-8`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub key: String,
    pub value: PropertyValue,
}

impl Property {
    #[must_use]
    pub fn new(key: impl Into<String>, value: PropertyValue) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

/// Property names written by the builders.
pub mod names {
    pub const FN: &str = "FN";
    pub const N: &str = "N";
    pub const PHOTO: &str = "PHOTO";
    pub const BDAY: &str = "BDAY";
    pub const ADR: &str = "ADR";
    pub const TEL: &str = "TEL";
    pub const EMAIL: &str = "EMAIL";
    pub const TITLE: &str = "TITLE";
    pub const ROLE: &str = "ROLE";
    pub const LOGO: &str = "LOGO";
    pub const ORG: &str = "ORG";
    pub const CATEGORIES: &str = "CATEGORIES";
    pub const NOTE: &str = "NOTE";
    pub const URL: &str = "URL";
    pub const REV: &str = "REV";
    pub const X_ABLABEL: &str = "X-ABLabel";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structured_display_joins_components() {
        let value = PropertyValue::Structured(vec![
            "Doe".to_string(),
            "John".to_string(),
            String::new(),
            String::new(),
            String::new(),
        ]);
        assert_eq!(value.to_string(), "Doe;John;;;");
        assert!(!value.is_empty());
    }

    #[test]
    fn empty_values() {
        assert!(PropertyValue::text("").is_empty());
        assert!(PropertyValue::Structured(vec![String::new(); 3]).is_empty());
        assert!(!PropertyValue::raw("http://x").is_empty());
    }
}
