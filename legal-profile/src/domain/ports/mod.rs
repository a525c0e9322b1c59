//! Driven ports for persistence adapters.
//!
//! Ports describe how the domain expects to interact with storage. Each
//! trait exposes strongly typed errors so adapters map their failures into
//! predictable variants instead of returning a catch-all error type.

mod censor_rule_repository;
mod user_repository;

#[cfg(test)]
pub use censor_rule_repository::MockCensorRuleRepository;
pub use censor_rule_repository::{
    CensorRulePersistenceError, CensorRuleRepository, FixtureCensorRuleRepository,
};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{FixtureUserRepository, UserPersistenceError, UserRepository};
