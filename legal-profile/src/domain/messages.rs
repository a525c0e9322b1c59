//! Translation seam for user-facing message text.
//!
//! The host application localises validation messages and generated record
//! text through its own catalogue. The domain only needs an opaque
//! `translate(key)` lookup, modelled here as [`MessageCatalog`]: stable
//! [`MessageKey`]s with built-in English defaults and per-key overrides.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Stable identifier for each piece of user-facing text this crate emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKey {
    AcceptTerms,
    IdentityCardNumberMissing,
    IdentityCardNumberFormat,
    GeneralLawMissing,
    DateOfBirthMissing,
    MaritalStatusMissing,
    OccupationMissing,
    DomicileMissing,
    FullNameRequired,
    /// Replacement text written into generated censor rules.
    Redacted,
    /// Audit comment written into generated censor rules.
    UpdatedAutomatically,
}

impl MessageKey {
    /// Built-in English text used when no override is installed.
    pub const fn default_text(self) -> &'static str {
        match self {
            Self::AcceptTerms => "Please accept the Terms and Conditions",
            Self::IdentityCardNumberMissing => "Please enter your Identity Card number",
            Self::IdentityCardNumberFormat => {
                "Please enter your Identity Card number in the correct format"
            }
            Self::GeneralLawMissing => "Please enter your General Law information",
            Self::DateOfBirthMissing => "Please enter your date of birth",
            Self::MaritalStatusMissing => "Please enter your marital status",
            Self::OccupationMissing => "Please enter your occupation",
            Self::DomicileMissing => "Please enter your domicile",
            Self::FullNameRequired => {
                "Please enter your full name - it is required by law when making a request"
            }
            Self::Redacted => "REDACTED",
            Self::UpdatedAutomatically => "Updated automatically after save",
        }
    }
}

/// Message catalogue with per-key overrides over the English defaults.
///
/// The catalogue is injected into [`crate::domain::LegalProfileService`];
/// hosts wire their localisation layer in by overriding keys, and the
/// domain never reads ambient global state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageCatalog {
    overrides: BTreeMap<MessageKey, String>,
}

impl MessageCatalog {
    /// Catalogue with only the built-in defaults.
    pub const fn new() -> Self {
        Self {
            overrides: BTreeMap::new(),
        }
    }

    /// Install or replace the text for one key.
    #[must_use]
    pub fn with_message(mut self, key: MessageKey, text: impl Into<String>) -> Self {
        self.overrides.insert(key, text.into());
        self
    }

    /// Resolve the text for a key, falling back to the built-in default.
    pub fn translate(&self, key: MessageKey) -> &str {
        self.overrides
            .get(&key)
            .map_or_else(|| key.default_text(), String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_english_defaults() {
        let catalog = MessageCatalog::new();
        assert_eq!(
            catalog.translate(MessageKey::AcceptTerms),
            "Please accept the Terms and Conditions"
        );
        assert_eq!(catalog.translate(MessageKey::Redacted), "REDACTED");
    }

    #[test]
    fn overrides_shadow_defaults_per_key() {
        let catalog = MessageCatalog::new()
            .with_message(MessageKey::Redacted, "CENSURADO")
            .with_message(MessageKey::AcceptTerms, "Acepte los términos");

        assert_eq!(catalog.translate(MessageKey::Redacted), "CENSURADO");
        assert_eq!(catalog.translate(MessageKey::AcceptTerms), "Acepte los términos");
        // Untouched keys keep their defaults.
        assert_eq!(
            catalog.translate(MessageKey::GeneralLawMissing),
            "Please enter your General Law information"
        );
    }
}
