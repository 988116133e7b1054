//! Utility functions shared across layers.
//!
//! - [`slug_validator`] - Slug and target validation
//! - [`db_error`] - PostgreSQL error classification

pub mod db_error;
pub mod slug_validator;
