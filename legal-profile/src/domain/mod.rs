//! Domain entities, validation, and the legal profile service.
//!
//! Purpose: define the extended user aggregate with its legal-compliance
//! fields, the accumulating validation pass that runs before every save,
//! and the service that persists the aggregate and maintains censor rules.
//!
//! Public surface:
//! - [`User`] / [`GeneralLaw`] — the aggregate and its owned sub-record.
//! - [`ValidationErrors`] — ordered field-to-message validation outcome.
//! - [`MessageCatalog`] — translation seam for user-facing messages.
//! - [`LegalProfileService`] — validate, persist, sync censor rules.

pub mod censor_rule;
pub mod general_law;
pub mod messages;
pub mod ports;
pub mod profile_service;
pub mod theme;
pub mod user;
pub mod validation;


pub use self::censor_rule::CensorRule;
pub use self::general_law::{GeneralLaw, GeneralLawAttributes, MaritalStatus};
pub use self::messages::{MessageCatalog, MessageKey};
pub use self::profile_service::{LegalProfileError, LegalProfileService};
pub use self::theme::{ThemeName, ThemeNameValidationError};
pub use self::user::{User, UserAttributes, UserId};
pub use self::validation::{Field, ValidationError, ValidationErrors};
