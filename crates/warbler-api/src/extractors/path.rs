//! Path parameter extractors
//!
//! Ids arrive as strings and are parsed into typed ids.

use warbler_core::{MessageId, UserId};

use crate::response::ApiError;

/// Path parameters with user_id
#[derive(Debug, serde::Deserialize)]
pub struct UserIdPath {
    pub user_id: String,
}

impl UserIdPath {
    /// Parse user_id
    pub fn user_id(&self) -> Result<UserId, ApiError> {
        self.user_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid user_id format"))
    }
}

/// Path parameters with message_id
#[derive(Debug, serde::Deserialize)]
pub struct MessageIdPath {
    pub message_id: String,
}

impl MessageIdPath {
    /// Parse message_id
    pub fn message_id(&self) -> Result<MessageId, ApiError> {
        self.message_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid message_id format"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ids() {
        let path = UserIdPath { user_id: "12".to_string() };
        assert_eq!(path.user_id().unwrap(), UserId::new(12));

        let path = MessageIdPath { message_id: "abc".to_string() };
        assert!(matches!(path.message_id(), Err(ApiError::InvalidPath(_))));
    }
}
