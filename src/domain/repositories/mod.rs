//! Store trait definitions for the domain layer.
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! See integration tests in `tests/repository_slug.rs` and
//! `tests/registry_concurrency.rs` for usage examples.

pub mod slug_store;

pub use slug_store::SlugStore;

#[cfg(test)]
pub use slug_store::MockSlugStore;
