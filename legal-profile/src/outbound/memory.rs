//! In-memory implementations of the persistence ports.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::CensorRule;
use crate::domain::ports::{
    CensorRulePersistenceError, CensorRuleRepository, UserPersistenceError, UserRepository,
};
use crate::domain::{User, UserId};

/// In-memory user store keyed by identifier.
///
/// The aggregate is stored whole, so the owned general-law sub-record is
/// written and removed together with its owner.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    records: Mutex<HashMap<UserId, User>>,
}

impl InMemoryUserRepository {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users.
    pub fn len(&self) -> usize {
        self.records.lock().map(|guard| guard.len()).unwrap_or(0)
    }

    /// True when no user is stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<UserId, User>>, UserPersistenceError> {
        self.records
            .lock()
            .map_err(|_| UserPersistenceError::connection("user store mutex poisoned"))
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn save(&self, user: &User) -> Result<User, UserPersistenceError> {
        let mut stored = user.clone();
        stored.mark_persisted();
        self.lock()?.insert(stored.id(), stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError> {
        Ok(self.lock()?.get(id).cloned())
    }

    async fn delete(&self, id: &UserId) -> Result<(), UserPersistenceError> {
        match self.lock()?.remove(id) {
            Some(_) => Ok(()),
            None => Err(UserPersistenceError::not_found(*id)),
        }
    }
}

/// In-memory censor rule table.
///
/// Rows are appended in insertion order and never updated or deleted. No
/// uniqueness constraint is enforced on `text`, matching the host schema;
/// idempotence comes from the service's find-or-create, which tests can
/// verify through [`InMemoryCensorRuleRepository::matching`].
#[derive(Debug, Default)]
pub struct InMemoryCensorRuleRepository {
    rules: Mutex<Vec<CensorRule>>,
}

impl InMemoryCensorRuleRepository {
    /// Empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all rules in insertion order.
    pub fn all(&self) -> Vec<CensorRule> {
        self.rules
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    /// Rules whose `text` equals the given value, in insertion order.
    pub fn matching(&self, text: &str) -> Vec<CensorRule> {
        self.all()
            .into_iter()
            .filter(|rule| rule.text == text)
            .collect()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<CensorRule>>, CensorRulePersistenceError> {
        self.rules
            .lock()
            .map_err(|_| CensorRulePersistenceError::connection("censor rule mutex poisoned"))
    }
}

#[async_trait]
impl CensorRuleRepository for InMemoryCensorRuleRepository {
    async fn find_by_text(
        &self,
        text: &str,
    ) -> Result<Option<CensorRule>, CensorRulePersistenceError> {
        Ok(self.lock()?.iter().find(|rule| rule.text == text).cloned())
    }

    async fn create(&self, rule: &CensorRule) -> Result<(), CensorRulePersistenceError> {
        self.lock()?.push(rule.clone());
        Ok(())
    }
}
