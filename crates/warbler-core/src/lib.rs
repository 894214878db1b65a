//! # warbler-core
//!
//! Domain layer containing entities, value objects, and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    Follow, Message, NewMessage, NewUser, User, UserProfile, DEFAULT_HEADER_IMAGE_URL,
    DEFAULT_IMAGE_URL, MAX_EMAIL_LEN, MAX_MESSAGE_LEN, MAX_USERNAME_LEN,
};
pub use error::DomainError;
pub use traits::{FollowRepository, MessageRepository, RepoResult, UserRepository};
pub use value_objects::{IdParseError, MessageId, UserId};
