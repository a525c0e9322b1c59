//! Deployment identity used for attribution on generated records.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Name of the running deployment, stamped as `last_edit_editor` on censor
/// rules this crate creates.
///
/// Injected into the service at construction; nothing reads it from global
/// state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ThemeName(String);

impl ThemeName {
    /// Validate and construct a theme name.
    pub fn new(value: impl Into<String>) -> Result<Self, ThemeNameValidationError> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Err(ThemeNameValidationError::Empty);
        }
        if raw.trim() != raw {
            return Err(ThemeNameValidationError::Padded);
        }
        Ok(Self(raw))
    }

    /// Borrow the underlying name.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for ThemeName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<ThemeName> for String {
    fn from(value: ThemeName) -> Self {
        value.0
    }
}

impl TryFrom<String> for ThemeName {
    type Error = ThemeNameValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Validation errors returned by [`ThemeName::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeNameValidationError {
    /// Name is empty after trimming whitespace.
    #[error("theme name must not be empty")]
    Empty,
    /// Name carries leading or trailing whitespace.
    #[error("theme name must not contain surrounding whitespace")]
    Padded,
}
