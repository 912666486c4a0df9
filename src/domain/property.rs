// src/domain/property.rs

use crate::errors::ServerError;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// The seven inputs a visitor fills in before asking for a prediction.
///
/// Every field is kept as the raw string the form sent. Nothing is parsed or
/// range-checked here; the only rule applied before a prediction is that each
/// field is non-empty once trimmed (see `domain::logic::is_complete`).
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PropertyFeatures {
    #[serde(deserialize_with = "lenient_string")]
    pub bedrooms: String,
    #[serde(deserialize_with = "lenient_string")]
    pub bathrooms: String,
    #[serde(deserialize_with = "lenient_string")]
    pub square_feet: String,
    #[serde(deserialize_with = "lenient_string")]
    pub year_built: String,
    #[serde(deserialize_with = "lenient_string")]
    pub location: String,
    #[serde(deserialize_with = "lenient_string")]
    pub property_type: String,
    #[serde(deserialize_with = "lenient_string")]
    pub condition: String,
}

/// `null`, numbers, arrays and objects all read as an empty field, so a
/// malformed value ends up as "missing information" rather than a decode error.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        _ => Ok(String::new()),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    Bedrooms,
    Bathrooms,
    SquareFeet,
    YearBuilt,
    Location,
    PropertyType,
    Condition,
}

impl FieldName {
    /// Declaration order; also the order fields are reported as missing.
    pub const ALL: [FieldName; 7] = [
        FieldName::Bedrooms,
        FieldName::Bathrooms,
        FieldName::SquareFeet,
        FieldName::YearBuilt,
        FieldName::Location,
        FieldName::PropertyType,
        FieldName::Condition,
    ];

    /// Name used by the HTML form inputs.
    pub fn form_name(self) -> &'static str {
        match self {
            FieldName::Bedrooms => "bedrooms",
            FieldName::Bathrooms => "bathrooms",
            FieldName::SquareFeet => "square_feet",
            FieldName::YearBuilt => "year_built",
            FieldName::Location => "location",
            FieldName::PropertyType => "property_type",
            FieldName::Condition => "condition",
        }
    }

    /// Name used in JSON payloads.
    pub fn wire_name(self) -> &'static str {
        match self {
            FieldName::Bedrooms => "bedrooms",
            FieldName::Bathrooms => "bathrooms",
            FieldName::SquareFeet => "squareFeet",
            FieldName::YearBuilt => "yearBuilt",
            FieldName::Location => "location",
            FieldName::PropertyType => "propertyType",
            FieldName::Condition => "condition",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FieldName::Bedrooms => "Bedrooms",
            FieldName::Bathrooms => "Bathrooms",
            FieldName::SquareFeet => "Square Footage",
            FieldName::YearBuilt => "Year Built",
            FieldName::Location => "Location (City, State)",
            FieldName::PropertyType => "Property Type",
            FieldName::Condition => "Property Condition",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

impl FromStr for FieldName {
    type Err = ServerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldName::ALL
            .into_iter()
            .find(|field| field.form_name() == s || field.wire_name() == s)
            .ok_or_else(|| ServerError::BadRequest(format!("unknown field: {s}")))
    }
}

impl PropertyFeatures {
    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::Bedrooms => &self.bedrooms,
            FieldName::Bathrooms => &self.bathrooms,
            FieldName::SquareFeet => &self.square_feet,
            FieldName::YearBuilt => &self.year_built,
            FieldName::Location => &self.location,
            FieldName::PropertyType => &self.property_type,
            FieldName::Condition => &self.condition,
        }
    }

    pub fn set(&mut self, field: FieldName, value: impl Into<String>) {
        let slot = match field {
            FieldName::Bedrooms => &mut self.bedrooms,
            FieldName::Bathrooms => &mut self.bathrooms,
            FieldName::SquareFeet => &mut self.square_feet,
            FieldName::YearBuilt => &mut self.year_built,
            FieldName::Location => &mut self.location,
            FieldName::PropertyType => &mut self.property_type,
            FieldName::Condition => &mut self.condition,
        };
        *slot = value.into();
    }

    /// Builds features from urlencoded `(name, value)` pairs as posted by the
    /// form. Later pairs win; unknown names are rejected.
    pub fn from_form_pairs<'a, I>(pairs: I) -> Result<Self, ServerError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut features = PropertyFeatures::default();
        for (name, value) in pairs {
            let field: FieldName = name.parse()?;
            features.set(field, value);
        }
        Ok(features)
    }
}

/// A `(value, label)` option rendered in a select input.
pub type Choice = (&'static str, &'static str);

pub const BEDROOM_CHOICES: [Choice; 6] = [
    ("1", "1"),
    ("2", "2"),
    ("3", "3"),
    ("4", "4"),
    ("5", "5"),
    ("6", "6"),
];

pub const BATHROOM_CHOICES: [Choice; 9] = [
    ("1", "1"),
    ("1.5", "1.5"),
    ("2", "2"),
    ("2.5", "2.5"),
    ("3", "3"),
    ("3.5", "3.5"),
    ("4", "4"),
    ("4.5", "4.5"),
    ("5", "5"),
];

pub const PROPERTY_TYPE_CHOICES: [Choice; 4] = [
    ("single-family", "Single Family Home"),
    ("condo", "Condominium"),
    ("townhouse", "Townhouse"),
    ("apartment", "Apartment"),
];

pub const CONDITION_CHOICES: [Choice; 4] = [
    ("excellent", "Excellent"),
    ("good", "Good"),
    ("fair", "Fair"),
    ("poor", "Poor"),
];
