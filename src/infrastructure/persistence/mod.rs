//! Slug store implementations.
//!
//! - [`PgSlugStore`] - PostgreSQL via SQLx, shared across service instances
//! - [`MemorySlugStore`] - In-process `DashMap`, for tests and single-instance runs

pub mod memory_slug_store;
pub mod pg_slug_store;

pub use memory_slug_store::MemorySlugStore;
pub use pg_slug_store::PgSlugStore;
