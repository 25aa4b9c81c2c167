//! Structured vCard values.
//!
//! These types build the N, ADR and ORG property values.

use super::property::PropertyValue;

/// Structured name (N property, RFC 2426 §3.1.2).
///
/// All components are optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructuredName {
    /// Family name (surname).
    pub family: String,
    /// Given name (first name).
    pub given: String,
    /// Additional names (middle names).
    pub additional: String,
    /// Honorific prefix (e.g., "Mr.", "Dr.").
    pub prefix: String,
    /// Honorific suffix (e.g., "Jr.", "M.D.").
    pub suffix: String,
}

impl StructuredName {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a structured name with family and given names.
    #[must_use]
    pub fn simple(family: impl Into<String>, given: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            given: given.into(),
            ..Self::default()
        }
    }

    /// Formats as a display name: prefix, given, additional, family, suffix.
    ///
    /// Empty components are skipped.
    #[must_use]
    pub fn display_name(&self) -> String {
        [
            &self.prefix,
            &self.given,
            &self.additional,
            &self.family,
            &self.suffix,
        ]
        .into_iter()
        .filter(|s| !s.is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
    }

    /// family;given;additional;prefix;suffix
    #[must_use]
    pub fn to_value(&self) -> PropertyValue {
        PropertyValue::Structured(vec![
            self.family.clone(),
            self.given.clone(),
            self.additional.clone(),
            self.prefix.clone(),
            self.suffix.clone(),
        ])
    }
}

/// Address (ADR property, RFC 2426 §3.2.1).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Address {
    /// Post office box, or a name for the address.
    pub po_box: String,
    /// Extended address (e.g., apartment or suite number).
    pub extended: String,
    pub street: String,
    /// Locality (city).
    pub locality: String,
    /// Region (state or province).
    pub region: String,
    pub postal_code: String,
    pub country: String,
}

impl Address {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// POBox;Extended;Street;Locality;Region;PostalCode;Country
    #[must_use]
    pub fn to_value(&self) -> PropertyValue {
        PropertyValue::Structured(self.components())
    }

    fn components(&self) -> Vec<String> {
        vec![
            self.po_box.clone(),
            self.extended.clone(),
            self.street.clone(),
            self.locality.clone(),
            self.region.clone(),
            self.postal_code.clone(),
            self.country.clone(),
        ]
    }
}

/// Organization (ORG property, RFC 2426 §3.5.5).
///
/// The name is followed by organizational units in order of decreasing
/// specificity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Organization {
    pub name: String,
    /// Organizational units (department, division, etc.).
    pub units: Vec<String>,
}

impl Organization {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            units: Vec::new(),
        }
    }

    /// Creates an organization with a single department.
    ///
    /// An empty department is left out.
    #[must_use]
    pub fn with_department(name: impl Into<String>, department: impl Into<String>) -> Self {
        let department = department.into();
        Self {
            name: name.into(),
            units: if department.is_empty() {
                Vec::new()
            } else {
                vec![department]
            },
        }
    }

    #[must_use]
    pub fn to_value(&self) -> PropertyValue {
        let mut parts = Vec::with_capacity(1 + self.units.len());
        parts.push(self.name.clone());
        parts.extend(self.units.iter().cloned());
        PropertyValue::Structured(parts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structured_name_simple() {
        let name = StructuredName::simple("Doe", "John");
        assert_eq!(name.display_name(), "John Doe");
        assert_eq!(name.to_value().to_string(), "Doe;John;;;");
    }

    #[test]
    fn structured_name_full_display_order() {
        let name = StructuredName {
            family: "Public".to_string(),
            given: "John".to_string(),
            additional: "Quinlan".to_string(),
            prefix: "Mr.".to_string(),
            suffix: "Esq.".to_string(),
        };
        assert_eq!(name.display_name(), "Mr. John Quinlan Public Esq.");
    }

    #[test]
    fn structured_name_empty() {
        let name = StructuredName::new();
        assert_eq!(name.display_name(), "");
    }

    #[test]
    fn address_component_order() {
        let addr = Address {
            street: "123 Main St".to_string(),
            locality: "Anytown".to_string(),
            region: "CA".to_string(),
            postal_code: "12345".to_string(),
            country: "USA".to_string(),
            ..Address::default()
        };
        assert_eq!(addr.to_value().to_string(), ";;123 Main St;Anytown;CA;12345;USA");
        assert_eq!(Address::new().to_value().to_string(), ";;;;;;");
    }

    #[test]
    fn organization_with_department() {
        let org = Organization::with_department("Acme Inc.", "Engineering");
        assert_eq!(org.to_value().to_string(), "Acme Inc.;Engineering");

        let org = Organization::with_department("Acme Inc.", "");
        assert_eq!(org.to_value().to_string(), "Acme Inc.");
    }
}
