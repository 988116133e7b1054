//! Input validation for slugs and redirect targets.
//!
//! Slugs are caller supplied: no normalisation is applied, only length limits
//! and a ban on control characters (PostgreSQL text cannot hold NUL).
//! Targets are arbitrary non-empty strings.

use crate::domain::entities::record::MAX_SLUG_BYTES;
use crate::error::RegistryError;

/// Validates a caller-supplied slug.
///
/// # Rules
///
/// - Must not be empty
/// - At most 30 bytes (UTF-8 encoded length, not characters)
/// - No control characters
///
/// # Errors
///
/// Returns [`RegistryError::InvalidInput`] if any rule is violated.
///
/// # Examples
///
/// ```ignore
/// assert!(validate_slug("stackoverflow").is_ok());
/// assert!(validate_slug("").is_err());
/// assert!(validate_slug(&"a".repeat(31)).is_err());
/// assert!(validate_slug("a\0b").is_err());
/// ```
pub fn validate_slug(slug: &str) -> Result<(), RegistryError> {
    if slug.is_empty() {
        return Err(RegistryError::invalid("slug", "slug must not be empty"));
    }

    if slug.len() > MAX_SLUG_BYTES {
        return Err(RegistryError::invalid(
            "slug",
            format!(
                "slug must be at most {} bytes, got {}",
                MAX_SLUG_BYTES,
                slug.len()
            ),
        ));
    }

    if slug.chars().any(char::is_control) {
        return Err(RegistryError::invalid(
            "slug",
            "slug must not contain control characters",
        ));
    }

    Ok(())
}

/// Validates a redirect target.
///
/// # Errors
///
/// Returns [`RegistryError::InvalidInput`] if the target is empty.
pub fn validate_target(target_url: &str) -> Result<(), RegistryError> {
    if target_url.is_empty() {
        return Err(RegistryError::invalid(
            "target_url",
            "target_url must not be empty",
        ));
    }

    Ok(())
}

/// Returns true if the target can be sent back as a `Location` header value.
pub fn is_redirectable_target(target_url: &str) -> bool {
    !target_url.trim().is_empty() && !target_url.chars().any(char::is_control)
}

/// Returns true if the slug could ever be stored.
///
/// Used on the read paths: a slug that fails validation cannot exist, so the
/// store is not consulted.
pub fn is_storable_slug(slug: &str) -> bool {
    validate_slug(slug).is_ok()
}
