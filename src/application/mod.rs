//! Application layer services.
//!
//! Services consume the store trait and provide the API HTTP handlers call.
//!
//! # Available Services
//!
//! - [`services::registry_service::SlugRegistry`] - Slug creation, lookup and hit counting

pub mod services;
