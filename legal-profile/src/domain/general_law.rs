//! General-law sub-record owned by a user.
//!
//! Jurisdiction-mandated personal details required alongside a legal
//! request. The record is owned one-to-one by a [`crate::domain::User`],
//! validated whenever the owner is validated, and stored and deleted as
//! part of the owner's aggregate.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::messages::{MessageCatalog, MessageKey};
use super::validation::{Field, ValidationErrors};

/// Marital status as captured on the legal request form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaritalStatus {
    Single,
    Married,
    Divorced,
    Widowed,
    DomesticPartnership,
}

impl MaritalStatus {
    /// Stable form value for the status.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Married => "married",
            Self::Divorced => "divorced",
            Self::Widowed => "widowed",
            Self::DomesticPartnership => "domestic_partnership",
        }
    }
}

impl fmt::Display for MaritalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unrecognised marital status value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognised marital status '{value}'")]
pub struct ParseMaritalStatusError {
    value: String,
}

impl FromStr for MaritalStatus {
    type Err = ParseMaritalStatusError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "single" => Ok(Self::Single),
            "married" => Ok(Self::Married),
            "divorced" => Ok(Self::Divorced),
            "widowed" => Ok(Self::Widowed),
            "domestic_partnership" => Ok(Self::DomesticPartnership),
            other => Err(ParseMaritalStatusError {
                value: other.to_owned(),
            }),
        }
    }
}

/// General-law information attached to a user.
///
/// All four fields are required once the owner is validated; optional
/// fields model form input that has not been provided yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneralLaw {
    pub date_of_birth: Option<NaiveDate>,
    pub marital_status: Option<MaritalStatus>,
    pub occupation: String,
    pub domicile: String,
}

impl GeneralLaw {
    /// Build a sub-record from bound form attributes.
    pub fn from_attributes(attrs: GeneralLawAttributes) -> Self {
        let mut record = Self::default();
        record.apply_attributes(attrs);
        record
    }

    /// Merge bound form attributes into the record; absent attributes leave
    /// the current value untouched.
    pub fn apply_attributes(&mut self, attrs: GeneralLawAttributes) {
        if let Some(date_of_birth) = attrs.date_of_birth {
            self.date_of_birth = Some(date_of_birth);
        }
        if let Some(marital_status) = attrs.marital_status {
            self.marital_status = Some(marital_status);
        }
        if let Some(occupation) = attrs.occupation {
            self.occupation = occupation;
        }
        if let Some(domicile) = attrs.domicile {
            self.domicile = domicile;
        }
    }

    /// Record a presence violation for every missing field.
    pub(crate) fn validate_into(&self, errors: &mut ValidationErrors, catalog: &MessageCatalog) {
        if self.date_of_birth.is_none() {
            errors.add(
                Field::DateOfBirth,
                catalog.translate(MessageKey::DateOfBirthMissing),
            );
        }
        if self.marital_status.is_none() {
            errors.add(
                Field::MaritalStatus,
                catalog.translate(MessageKey::MaritalStatusMissing),
            );
        }
        if self.occupation.trim().is_empty() {
            errors.add(
                Field::Occupation,
                catalog.translate(MessageKey::OccupationMissing),
            );
        }
        if self.domicile.trim().is_empty() {
            errors.add(
                Field::Domicile,
                catalog.translate(MessageKey::DomicileMissing),
            );
        }
    }
}

/// Form-bound attributes for the general-law sub-record.
///
/// Mirrors the nested form parameters submitted with the owning user;
/// every field is optional so partial updates merge cleanly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralLawAttributes {
    pub date_of_birth: Option<NaiveDate>,
    pub marital_status: Option<MaritalStatus>,
    pub occupation: Option<String>,
    pub domicile: Option<String>,
}

#[cfg(test)]
mod tests;
