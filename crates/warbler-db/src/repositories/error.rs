//! Error handling utilities for repositories

use sqlx::Error as SqlxError;
use warbler_core::error::DomainError;
use warbler_core::value_objects::{MessageId, UserId};
use warbler_core::MAX_MESSAGE_LEN;

/// SQLSTATE for a value that does not fit its column
const STRING_DATA_RIGHT_TRUNCATION: &str = "22001";

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Translate constraint violations on insert into domain errors
///
/// `on_violation` receives the violated constraint's name and returns the
/// domain error for it, or `None` to fall back to a database error.
pub fn map_constraint_violation<F>(e: SqlxError, on_violation: F) -> DomainError
where
    F: FnOnce(&str) -> Option<DomainError>,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation()
            || db_err.is_foreign_key_violation()
            || db_err.is_check_violation()
        {
            if let Some(mapped) = db_err.constraint().and_then(on_violation) {
                return mapped;
            }
        }
        if db_err.code().as_deref() == Some(STRING_DATA_RIGHT_TRUNCATION) {
            return DomainError::ContentTooLong { max: MAX_MESSAGE_LEN };
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Create a "user not found" error
pub fn user_not_found(id: UserId) -> DomainError {
    DomainError::UserNotFound(id)
}

/// Create a "message not found" error
pub fn message_not_found(id: MessageId) -> DomainError {
    DomainError::MessageNotFound(id)
}
