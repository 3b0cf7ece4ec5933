// SPDX-License-Identifier: MPL-2.0
//! Contact inquiry value types.
//!
//! [`ContactFormData`] is the snapshot handed to a submission sink. The
//! editing lifecycle around it lives in [`crate::contact`].

use std::fmt;

/// Kind of property the visitor is interested in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyType {
    OpenPlot,
    AgriculturalLand,
    Building,
    IndividualHouse,
}

impl PropertyType {
    /// Selector options in display order.
    pub const ALL: [PropertyType; 4] = [
        PropertyType::OpenPlot,
        PropertyType::AgriculturalLand,
        PropertyType::Building,
        PropertyType::IndividualHouse,
    ];

    /// Wire value, as submitted with the form.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            PropertyType::OpenPlot => "open-plot",
            PropertyType::AgriculturalLand => "agricultural-land",
            PropertyType::Building => "building",
            PropertyType::IndividualHouse => "individual-house",
        }
    }

    /// Parses a wire value. Anything but the four known values is `None`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == value)
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            PropertyType::OpenPlot => "Open Plot",
            PropertyType::AgriculturalLand => "Agricultural Land",
            PropertyType::Building => "Building",
            PropertyType::IndividualHouse => "Individual House",
        }
    }
}

// `pick_list` renders options through `Display`.
impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A field of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    Phone,
    PropertyType,
    Message,
}

impl FormField {
    /// Fields that must be non-blank before a submission is accepted.
    pub const REQUIRED: [FormField; 4] = [
        FormField::Name,
        FormField::Email,
        FormField::Phone,
        FormField::Message,
    ];

    /// Parses a wire field name (`"propertyType"` etc.).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "name" => Some(FormField::Name),
            "email" => Some(FormField::Email),
            "phone" => Some(FormField::Phone),
            "propertyType" => Some(FormField::PropertyType),
            "message" => Some(FormField::Message),
            _ => None,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Phone => "phone",
            FormField::PropertyType => "propertyType",
            FormField::Message => "message",
        }
    }

    /// Human label shown next to the input.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Full Name",
            FormField::Email => "Email Address",
            FormField::Phone => "Phone Number",
            FormField::PropertyType => "Property Type",
            FormField::Message => "Message",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Values of the contact form.
///
/// String fields are always present and default to empty. An unset
/// property type is `None` and serializes as `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFormData {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub property_type: Option<PropertyType>,
    pub message: String,
}

impl ContactFormData {
    /// Wire value of the property type, empty when unset.
    #[must_use]
    pub fn property_type_value(&self) -> &'static str {
        self.property_type.map_or("", PropertyType::as_str)
    }

    /// Text value of a string field. `PropertyType` yields its wire value.
    #[must_use]
    pub fn text(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
            FormField::PropertyType => self.property_type_value(),
            FormField::Message => &self.message,
        }
    }

    /// Required fields that are blank, in form order.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<FormField> {
        FormField::REQUIRED
            .into_iter()
            .filter(|field| self.text(*field).trim().is_empty())
            .collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn property_type_wire_values_parse_back() {
        for kind in PropertyType::ALL {
            assert_eq!(PropertyType::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(PropertyType::parse(""), None);
        assert_eq!(PropertyType::parse("villa"), None);
    }

    #[test]
    fn field_names_match_the_form() {
        assert_eq!(
            FormField::from_name("propertyType"),
            Some(FormField::PropertyType)
        );
        assert_eq!(FormField::from_name("property_type"), None);
        assert_eq!(FormField::Phone.name(), "phone");
    }

    #[test]
    fn unset_property_type_is_empty_string() {
        let data = ContactFormData::default();
        assert_eq!(data.property_type_value(), "");
        assert!(data.is_empty());
    }

    #[test]
    fn missing_fields_ignores_property_type_and_whitespace() {
        let data = ContactFormData {
            name: "Priya".into(),
            email: "   ".into(),
            phone: "9052362639".into(),
            property_type: None,
            message: String::new(),
        };
        assert_eq!(
            data.missing_fields(),
            vec![FormField::Email, FormField::Message]
        );
    }
}
