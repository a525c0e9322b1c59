//! Legal profile extension for citizen-request user records.
//!
//! Extends an application user with jurisdiction-mandated legal fields
//! (identity card number, terms acceptance, a nested general-law record),
//! validates them with accumulating field-level errors, and keeps a censor
//! rule in place for every identity card number a user has saved, so the
//! downstream redaction renderer can strip the number from public output.
//!
//! Persistence sits behind the ports in [`domain::ports`]; the host
//! application supplies real adapters, while [`outbound`] ships in-memory
//! implementations used by the test suite.

pub mod domain;
pub mod outbound;

pub use domain::{
    CensorRule, GeneralLaw, GeneralLawAttributes, LegalProfileError, LegalProfileService,
    MaritalStatus, MessageCatalog, MessageKey, ThemeName, User, UserAttributes, UserId,
    ValidationErrors,
};
