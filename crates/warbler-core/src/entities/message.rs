//! Message entity - a short post ("warble") owned by a user

use chrono::{DateTime, Utc};

use crate::error::DomainError;
use crate::value_objects::{MessageId, UserId};

/// Maximum message length in characters
pub const MAX_MESSAGE_LEN: usize = 140;

/// Message entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: MessageId,
    pub text: String,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Check whether the given user wrote this message
    #[inline]
    pub fn is_authored_by(&self, user_id: UserId) -> bool {
        self.user_id == user_id
    }
}

/// A message that has not been persisted yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMessage {
    pub text: String,
    pub user_id: UserId,
}

impl NewMessage {
    /// Build a new message, validating its text
    ///
    /// Whether `user_id` refers to an existing user is checked by the store.
    pub fn new(text: &str, user_id: UserId) -> Result<Self, DomainError> {
        let message = Self {
            text: text.trim().to_string(),
            user_id,
        };
        message.check_constraints()?;
        Ok(message)
    }

    /// Re-check the column constraints the store enforces
    pub fn check_constraints(&self) -> Result<(), DomainError> {
        if self.text.trim().is_empty() {
            return Err(DomainError::EmptyMessage);
        }
        if self.text.chars().count() > MAX_MESSAGE_LEN {
            return Err(DomainError::ContentTooLong { max: MAX_MESSAGE_LEN });
        }
        Ok(())
    }
}
