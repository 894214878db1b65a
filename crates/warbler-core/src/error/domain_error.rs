//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::{MessageId, UserId};

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(UserId),

    #[error("Message not found: {0}")]
    MessageNotFound(MessageId),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Username is required")]
    EmptyUsername,

    #[error("E-mail is required")]
    EmptyEmail,

    #[error("Message text is required")]
    EmptyMessage,

    #[error("Invalid e-mail: {0}")]
    InvalidEmail(String),

    #[error("Invalid username: {0}")]
    InvalidUsername(String),

    #[error("Content too long: max {max} characters")]
    ContentTooLong { max: usize },

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Not message author")]
    NotMessageAuthor,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Username already taken")]
    UsernameTaken,

    #[error("Email already in use")]
    EmailTaken,

    #[error("Already following this user")]
    AlreadyFollowing,

    // =========================================================================
    // Business Rule Violations
    // =========================================================================
    #[error("Cannot follow yourself")]
    CannotFollowSelf,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::MessageNotFound(_) => "UNKNOWN_MESSAGE",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::EmptyUsername => "USERNAME_REQUIRED",
            Self::EmptyEmail => "EMAIL_REQUIRED",
            Self::EmptyMessage => "MESSAGE_REQUIRED",
            Self::InvalidEmail(_) => "INVALID_EMAIL",
            Self::InvalidUsername(_) => "INVALID_USERNAME",
            Self::ContentTooLong { .. } => "CONTENT_TOO_LONG",

            // Authorization
            Self::NotMessageAuthor => "NOT_MESSAGE_AUTHOR",

            // Conflict
            Self::UsernameTaken => "USERNAME_TAKEN",
            Self::EmailTaken => "EMAIL_TAKEN",
            Self::AlreadyFollowing => "ALREADY_FOLLOWING",

            // Business Rules
            Self::CannotFollowSelf => "CANNOT_FOLLOW_SELF",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::UserNotFound(_) | Self::MessageNotFound(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::EmptyUsername
                | Self::EmptyEmail
                | Self::EmptyMessage
                | Self::InvalidEmail(_)
                | Self::InvalidUsername(_)
                | Self::ContentTooLong { .. }
                | Self::CannotFollowSelf
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::NotMessageAuthor)
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::UsernameTaken | Self::EmailTaken | Self::AlreadyFollowing
        )
    }

    /// Whether a signup form should be re-rendered for this error
    pub fn is_form_error(&self) -> bool {
        self.is_validation() || self.is_conflict()
    }
}
