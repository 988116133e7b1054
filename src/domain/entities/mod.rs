//! Core domain entities.
//!
//! - [`SlugRecord`] - A stored slug → target mapping with its hit counter
//! - [`NewRecord`] - Input for creating a record

pub mod record;

pub use record::{NewRecord, SlugRecord};
