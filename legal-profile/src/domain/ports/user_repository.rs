//! Port abstraction for user persistence adapters and their errors.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::user::{User, UserId};

/// Persistence errors raised by user repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserPersistenceError {
    /// Repository connection could not be established.
    #[error("user repository connection failed: {message}")]
    Connection { message: String },
    /// Query or mutation failed during execution.
    #[error("user repository query failed: {message}")]
    Query { message: String },
    /// No record exists for the requested identifier.
    #[error("user {id} not found")]
    NotFound { id: UserId },
}

impl UserPersistenceError {
    /// Helper for connection related adapter errors.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Helper for query and mutation failures.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }

    /// Helper for missing records.
    pub const fn not_found(id: UserId) -> Self {
        Self::NotFound { id }
    }
}

/// Port for storing the user aggregate.
///
/// The owned general-law sub-record travels inside the aggregate: saving a
/// user stores the sub-record in the same unit of work, and deleting a
/// user removes it.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert or update the aggregate, returning the stored snapshot with
    /// its persisted marker set.
    async fn save(&self, user: &User) -> Result<User, UserPersistenceError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError>;

    /// Delete a user and its owned sub-record.
    async fn delete(&self, id: &UserId) -> Result<(), UserPersistenceError>;
}

/// Fixture implementation for tests that do not exercise user storage.
///
/// `save` echoes the aggregate back marked as persisted; lookups return
/// `None` and deletes succeed without effect.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureUserRepository;

#[async_trait]
impl UserRepository for FixtureUserRepository {
    async fn save(&self, user: &User) -> Result<User, UserPersistenceError> {
        let mut stored = user.clone();
        stored.mark_persisted();
        Ok(stored)
    }

    async fn find_by_id(&self, _id: &UserId) -> Result<Option<User>, UserPersistenceError> {
        Ok(None)
    }

    async fn delete(&self, _id: &UserId) -> Result<(), UserPersistenceError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::UserAttributes;

    #[tokio::test]
    async fn fixture_save_marks_the_snapshot_persisted() {
        let repo = FixtureUserRepository;
        let user = User::from_attributes(UserAttributes::default());
        assert!(!user.is_persisted());

        let stored = repo.save(&user).await.expect("fixture save succeeds");
        assert!(stored.is_persisted());
        assert_eq!(stored.id(), user.id());
    }

    #[tokio::test]
    async fn fixture_lookup_returns_none() {
        let repo = FixtureUserRepository;
        let found = repo
            .find_by_id(&UserId::random())
            .await
            .expect("fixture lookup succeeds");
        assert!(found.is_none());
    }

    #[test]
    fn error_helpers_render_their_messages() {
        let err = UserPersistenceError::connection("pool exhausted");
        assert_eq!(
            err.to_string(),
            "user repository connection failed: pool exhausted"
        );
    }
}
