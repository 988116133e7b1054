//! Domain layer: the slug record model and the store contract.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures ([`entities::SlugRecord`], [`entities::NewRecord`])
//! - [`repositories`] - The [`repositories::SlugStore`] trait every backend implements
//!
//! The domain layer has no dependency on the HTTP layer. Atomicity guarantees
//! (unique insert, counter increment) are part of the store contract and are
//! delegated to the backend, never emulated with application-level locks.

pub mod entities;
pub mod repositories;
