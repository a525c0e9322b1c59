//! Port for the censor rule table this crate inserts into.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::censor_rule::CensorRule;

/// Persistence errors raised by censor rule repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CensorRulePersistenceError {
    /// Repository connection could not be established.
    #[error("censor rule repository connection failed: {message}")]
    Connection { message: String },
    /// Query or insert failed during execution.
    #[error("censor rule repository query failed: {message}")]
    Query { message: String },
}

impl CensorRulePersistenceError {
    /// Helper for connection related adapter errors.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Helper for query and insert failures.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Port for looking up and inserting censor rules.
///
/// The match key is the rule's exact `text`. The storage layer enforces no
/// uniqueness constraint on it; the service's find-or-create provides
/// idempotence for sequential saves only, matching the host application's
/// accepted behaviour under concurrency.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CensorRuleRepository: Send + Sync {
    /// Find an existing rule whose `text` equals the given value.
    async fn find_by_text(
        &self,
        text: &str,
    ) -> Result<Option<CensorRule>, CensorRulePersistenceError>;

    /// Insert a new rule.
    async fn create(&self, rule: &CensorRule) -> Result<(), CensorRulePersistenceError>;
}

/// Fixture implementation for tests that ignore the censor rule side
/// effect: lookups find nothing and inserts are discarded.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureCensorRuleRepository;

#[async_trait]
impl CensorRuleRepository for FixtureCensorRuleRepository {
    async fn find_by_text(
        &self,
        _text: &str,
    ) -> Result<Option<CensorRule>, CensorRulePersistenceError> {
        Ok(None)
    }

    async fn create(&self, _rule: &CensorRule) -> Result<(), CensorRulePersistenceError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fixture_lookup_finds_nothing() {
        let repo = FixtureCensorRuleRepository;
        let found = repo
            .find_by_text("123-456789-1234A")
            .await
            .expect("fixture lookup succeeds");
        assert!(found.is_none());
    }

    #[test]
    fn error_helpers_render_their_messages() {
        let err = CensorRulePersistenceError::query("insert failed");
        assert_eq!(
            err.to_string(),
            "censor rule repository query failed: insert failed"
        );
    }
}
