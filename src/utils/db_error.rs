//! Classification of PostgreSQL errors.

/// Primary key constraint of the `urls` table.
pub const SLUG_CONSTRAINT: &str = "urls_pkey";

/// Returns true if the error is a unique violation on the slug key.
pub fn is_unique_violation_on_slug(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    matches!(db_err.constraint(), Some(SLUG_CONSTRAINT))
}
