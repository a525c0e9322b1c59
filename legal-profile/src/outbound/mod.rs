//! Driven adapters implementing the domain ports.
//!
//! The host application provides its own database-backed adapters; the
//! in-memory implementations here exercise the ports end to end in tests
//! and demos without external storage.

pub mod memory;

pub use memory::{InMemoryCensorRuleRepository, InMemoryUserRepository};
