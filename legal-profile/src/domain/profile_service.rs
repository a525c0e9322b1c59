//! Legal profile service: validate, persist, and maintain censor rules.
//!
//! The service owns the save path for the extended user aggregate. Every
//! save runs the full validation pass first; a successful write is always
//! followed by the censor-rule sync so the user's current identity card
//! number is redacted from public output.

use std::sync::Arc;

use tracing::{debug, info};

use super::censor_rule::CensorRule;
use super::messages::{MessageCatalog, MessageKey};
use super::ports::{
    CensorRulePersistenceError, CensorRuleRepository, UserPersistenceError, UserRepository,
};
use super::theme::ThemeName;
use super::user::{User, UserAttributes, UserId};
use super::validation::ValidationErrors;

/// Failures surfaced by [`LegalProfileService`] operations.
///
/// Validation failures are ordinary values carrying the full field-level
/// error collection; persistence failures wrap the port errors. A censor
/// rule failure can arrive after the user record was already stored — the
/// caller sees the error even though the save itself succeeded, which is
/// the host application's accepted behaviour.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LegalProfileError {
    /// The aggregate violated one or more validation rules; nothing was
    /// written to storage.
    #[error("user record failed validation: {0}")]
    Invalid(ValidationErrors),
    /// The user aggregate could not be stored; the censor rule sync never
    /// ran.
    #[error(transparent)]
    User(#[from] UserPersistenceError),
    /// The censor rule sync failed after a successful user save.
    #[error(transparent)]
    CensorRule(#[from] CensorRulePersistenceError),
}

/// Domain service for the legal profile extension.
#[derive(Clone)]
pub struct LegalProfileService<U, C> {
    users: Arc<U>,
    censor_rules: Arc<C>,
    theme: ThemeName,
    catalog: MessageCatalog,
}

impl<U, C> LegalProfileService<U, C> {
    /// Create a service over the given repositories, attribution theme
    /// name, and message catalogue.
    pub const fn new(
        users: Arc<U>,
        censor_rules: Arc<C>,
        theme: ThemeName,
        catalog: MessageCatalog,
    ) -> Self {
        Self {
            users,
            censor_rules,
            theme,
            catalog,
        }
    }

    /// Message catalogue in use, for callers rendering messages themselves.
    pub const fn catalog(&self) -> &MessageCatalog {
        &self.catalog
    }
}

impl<U, C> LegalProfileService<U, C>
where
    U: UserRepository,
    C: CensorRuleRepository,
{
    /// Build a new user from bound form attributes and save it.
    pub async fn create(&self, attrs: UserAttributes) -> Result<User, LegalProfileError> {
        self.save(User::from_attributes(attrs)).await
    }

    /// Merge bound form attributes into an existing user and save it.
    pub async fn update(
        &self,
        mut user: User,
        attrs: UserAttributes,
    ) -> Result<User, LegalProfileError> {
        user.apply_attributes(attrs);
        self.save(user).await
    }

    /// Validate and persist the aggregate, then sync the censor rule for
    /// its identity card number.
    ///
    /// Any validation failure returns the complete error collection and
    /// leaves storage untouched. The sub-record is stored in the same unit
    /// of work as the user, so an invalid sub-record never produces a
    /// partial write.
    pub async fn save(&self, user: User) -> Result<User, LegalProfileError> {
        let errors = user.validate(&self.catalog);
        if !errors.is_empty() {
            debug!(user_id = %user.id(), count = errors.len(), "rejecting invalid user save");
            return Err(LegalProfileError::Invalid(errors));
        }

        let stored = self.users.save(&user).await?;
        self.sync_censor_rule(stored.identity_card_number()).await?;
        Ok(stored)
    }

    /// Delete a user together with its owned general-law sub-record.
    pub async fn delete(&self, id: &UserId) -> Result<(), LegalProfileError> {
        self.users.delete(id).await?;
        Ok(())
    }

    /// Ensure exactly one censor rule exists for the given identity card
    /// number.
    ///
    /// Find-or-create on the rule's `text`: an existing rule is left as it
    /// is, so repeated saves stay idempotent and rules for superseded
    /// numbers continue to redact historical content. Nothing here ever
    /// updates or deletes a rule.
    async fn sync_censor_rule(
        &self,
        identity_card_number: &str,
    ) -> Result<(), CensorRulePersistenceError> {
        if let Some(existing) = self.censor_rules.find_by_text(identity_card_number).await? {
            debug!(text = %existing.text, "censor rule already present");
            return Ok(());
        }

        let rule = CensorRule {
            text: identity_card_number.to_owned(),
            replacement: self.catalog.translate(MessageKey::Redacted).to_owned(),
            last_edit_editor: self.theme.as_str().to_owned(),
            last_edit_comment: self
                .catalog
                .translate(MessageKey::UpdatedAutomatically)
                .to_owned(),
        };
        self.censor_rules.create(&rule).await?;
        info!(text = %rule.text, editor = %rule.last_edit_editor, "created censor rule");
        Ok(())
    }
}
