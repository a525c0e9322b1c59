//! Accumulating field-level validation results.
//!
//! The aggregate is validated in a single pass that records every violated
//! rule, so a form re-prompt can show all problems at once. Errors are plain
//! values addressed by [`Field`]; invalid input is never raised as a Rust
//! error by the entities themselves.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Addressable field on the user aggregate, including nested general-law
/// fields.
///
/// `Display` renders a stable dotted path (`general_law.date_of_birth`)
/// suitable for form bindings and log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Terms,
    IdentityCardNumber,
    Name,
    GeneralLaw,
    DateOfBirth,
    MaritalStatus,
    Occupation,
    Domicile,
}

impl Field {
    /// Stable dotted path for the field.
    pub const fn path(self) -> &'static str {
        match self {
            Self::Terms => "terms",
            Self::IdentityCardNumber => "identity_card_number",
            Self::Name => "name",
            Self::GeneralLaw => "general_law",
            Self::DateOfBirth => "general_law.date_of_birth",
            Self::MaritalStatus => "general_law.marital_status",
            Self::Occupation => "general_law.occupation",
            Self::Domicile => "general_law.domicile",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// One violated rule: the field it concerns and a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub field: Field,
    pub message: String,
}

/// Ordered collection of validation errors for one validation pass.
///
/// Rules accumulate independently; a single pass records every violation
/// rather than stopping at the first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    entries: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Empty result, meaning the entity is valid.
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Record a violation against a field.
    pub fn add(&mut self, field: Field, message: impl Into<String>) {
        self.entries.push(ValidationError {
            field,
            message: message.into(),
        });
    }

    /// True when no rule was violated.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of recorded violations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Messages recorded against one field, in evaluation order.
    pub fn on(&self, field: Field) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|entry| entry.field == field)
            .map(|entry| entry.message.as_str())
            .collect()
    }

    /// Iterate over all recorded violations in evaluation order.
    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.entries.iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for entry in &self.entries {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", entry.field, entry.message)?;
            first = false;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_violations_in_order() {
        let mut errors = ValidationErrors::new();
        errors.add(Field::Name, "full name required");
        errors.add(Field::IdentityCardNumber, "missing");

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.on(Field::Name), vec!["full name required"]);
        assert_eq!(errors.on(Field::IdentityCardNumber), vec!["missing"]);
        assert!(errors.on(Field::Terms).is_empty());
    }

    #[test]
    fn nested_fields_render_dotted_paths() {
        assert_eq!(Field::DateOfBirth.to_string(), "general_law.date_of_birth");
        assert_eq!(Field::Terms.to_string(), "terms");
    }

    #[test]
    fn display_joins_field_and_message() {
        let mut errors = ValidationErrors::new();
        errors.add(Field::Terms, "accept the terms");
        errors.add(Field::GeneralLaw, "missing");

        assert_eq!(
            errors.to_string(),
            "terms: accept the terms; general_law: missing"
        );
    }

    #[test]
    fn serializes_as_a_flat_list() {
        let mut errors = ValidationErrors::new();
        errors.add(Field::Domicile, "missing");

        let json = serde_json::to_value(&errors).expect("errors serialize");
        assert_eq!(
            json,
            serde_json::json!([{ "field": "domicile", "message": "missing" }])
        );
    }
}
