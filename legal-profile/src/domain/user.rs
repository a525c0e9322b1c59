//! Extended user aggregate with legal-compliance fields.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::general_law::{GeneralLaw, GeneralLawAttributes};
use super::messages::{MessageCatalog, MessageKey};
use super::validation::{Field, ValidationErrors};

/// Stable user identifier stored as a UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    /// Generate a new random [`UserId`].
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID.
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Access the underlying UUID.
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

static IDENTITY_CARD_NUMBER_RE: OnceLock<Regex> = OnceLock::new();

/// Three digits, dash, six digits, dash, four digits, one uppercase letter.
fn identity_card_number_regex() -> &'static Regex {
    IDENTITY_CARD_NUMBER_RE.get_or_init(|| {
        let pattern = r"^\d{3}-\d{6}-\d{4}[A-Z]$";
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("identity card regex failed to compile: {error}"))
    })
}

/// Application user extended with jurisdiction-specific legal fields.
///
/// ## Invariants (enforced by [`User::validate`], not by construction)
/// - `name` contains at least one whitespace character (full-name rule).
/// - `identity_card_number` is present and matches the national format.
/// - Terms are accepted before the first save.
/// - A `general_law` sub-record is attached and internally valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    name: String,
    identity_card_number: String,
    terms_accepted: bool,
    general_law: Option<GeneralLaw>,
    persisted: bool,
}

impl User {
    /// Build a fresh, unpersisted user from bound form attributes,
    /// including the nested general-law sub-record when provided.
    pub fn from_attributes(attrs: UserAttributes) -> Self {
        let mut user = Self {
            id: UserId::random(),
            name: String::new(),
            identity_card_number: String::new(),
            terms_accepted: false,
            general_law: None,
            persisted: false,
        };
        user.apply_attributes(attrs);
        user
    }

    /// Merge bound form attributes into the user before validation.
    ///
    /// Nested general-law attributes build the sub-record when absent and
    /// merge into it when already attached.
    pub fn apply_attributes(&mut self, attrs: UserAttributes) {
        if let Some(name) = attrs.name {
            self.name = name;
        }
        if let Some(identity_card_number) = attrs.identity_card_number {
            self.identity_card_number = identity_card_number;
        }
        if let Some(terms_accepted) = attrs.terms_accepted {
            self.terms_accepted = terms_accepted;
        }
        if let Some(general_law_attrs) = attrs.general_law {
            match self.general_law.as_mut() {
                Some(record) => record.apply_attributes(general_law_attrs),
                None => self.general_law = Some(GeneralLaw::from_attributes(general_law_attrs)),
            }
        }
    }

    /// Attach an empty general-law sub-record when none is present.
    pub fn build_general_law(&mut self) -> &mut GeneralLaw {
        self.general_law.get_or_insert_with(GeneralLaw::default)
    }

    /// Run every validation rule, accumulating all violations.
    ///
    /// Presence and format of the identity card number are independent
    /// rules: a blank value trips presence only, a malformed non-blank
    /// value trips format only. The terms rule applies only before the
    /// first save.
    pub fn validate(&self, catalog: &MessageCatalog) -> ValidationErrors {
        let mut errors = ValidationErrors::new();

        if !self.persisted && !self.terms_accepted {
            errors.add(Field::Terms, catalog.translate(MessageKey::AcceptTerms));
        }

        if self.identity_card_number.trim().is_empty() {
            errors.add(
                Field::IdentityCardNumber,
                catalog.translate(MessageKey::IdentityCardNumberMissing),
            );
        } else if !identity_card_number_regex().is_match(&self.identity_card_number) {
            errors.add(
                Field::IdentityCardNumber,
                catalog.translate(MessageKey::IdentityCardNumberFormat),
            );
        }

        match &self.general_law {
            None => errors.add(
                Field::GeneralLaw,
                catalog.translate(MessageKey::GeneralLawMissing),
            ),
            Some(record) => record.validate_into(&mut errors, catalog),
        }

        if !self.name.chars().any(char::is_whitespace) {
            errors.add(Field::Name, catalog.translate(MessageKey::FullNameRequired));
        }

        errors
    }

    /// Stable identifier.
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Full name as entered on the request form.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Government-issued identity card number.
    pub fn identity_card_number(&self) -> &str {
        self.identity_card_number.as_str()
    }

    /// Whether the terms and conditions were accepted.
    pub const fn terms_accepted(&self) -> bool {
        self.terms_accepted
    }

    /// Owned general-law sub-record, when attached.
    pub const fn general_law(&self) -> Option<&GeneralLaw> {
        self.general_law.as_ref()
    }

    /// Whether the aggregate has been stored at least once. Drives the
    /// create-only terms rule.
    pub const fn is_persisted(&self) -> bool {
        self.persisted
    }

    /// Mark the aggregate as stored. Called by repository adapters after a
    /// successful write.
    pub fn mark_persisted(&mut self) {
        self.persisted = true;
    }
}

/// Form-bound attributes for creating or updating a user.
///
/// Mirrors the request-form parameters; the nested sub-record accepts the
/// host form's `general_law_attributes` key as an alias.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserAttributes {
    pub name: Option<String>,
    pub identity_card_number: Option<String>,
    pub terms_accepted: Option<bool>,
    #[serde(alias = "general_law_attributes")]
    pub general_law: Option<GeneralLawAttributes>,
}
