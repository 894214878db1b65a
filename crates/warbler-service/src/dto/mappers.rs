//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use warbler_core::entities::{Message, User, UserProfile};

use super::responses::{MessageResponse, ProfileResponse, UserResponse};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            image_url: user.image_url.clone(),
            header_image_url: user.header_image_url.clone(),
            bio: user.bio.clone(),
            location: user.location.clone(),
            created_at: user.created_at,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

impl ProfileResponse {
    /// Combine a profile's counters with its latest messages
    pub fn new(profile: &UserProfile, messages: &[Message]) -> Self {
        Self {
            user: UserResponse::from(&profile.user),
            messages_count: profile.messages_count,
            followers_count: profile.followers_count,
            following_count: profile.following_count,
            messages: messages.iter().map(MessageResponse::from).collect(),
        }
    }
}

// ============================================================================
// Message Mappers
// ============================================================================

impl From<&Message> for MessageResponse {
    fn from(message: &Message) -> Self {
        Self {
            id: message.id,
            text: message.text.clone(),
            user_id: message.user_id,
            created_at: message.created_at,
        }
    }
}

impl From<Message> for MessageResponse {
    fn from(message: Message) -> Self {
        Self::from(&message)
    }
}
