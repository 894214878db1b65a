//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Implementations must enforce the same
//! constraints as the relational schema: unique usernames and e-mails,
//! non-empty required text, and referential integrity with cascade on
//! user deletion.

use async_trait::async_trait;

use crate::entities::{Follow, Message, NewMessage, NewUser, User};
use crate::error::DomainError;
use crate::value_objects::{MessageId, UserId};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

/// Page size used when a caller does not ask for one
pub const DEFAULT_PAGE_LIMIT: i64 = 100;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>>;

    /// Find user by username
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Persist a new user and return it with its assigned id
    ///
    /// Fails with `UsernameTaken`/`EmailTaken` on a uniqueness violation and
    /// with `EmptyUsername`/`EmptyEmail` when a required column is blank.
    async fn create(&self, user: &NewUser) -> RepoResult<User>;

    /// Delete a user together with their messages and follow edges
    async fn delete(&self, id: UserId) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: UserId) -> RepoResult<Option<String>>;
}

// ============================================================================
// Message Repository
// ============================================================================

#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Find message by ID
    async fn find_by_id(&self, id: MessageId) -> RepoResult<Option<Message>>;

    /// Persist a new message
    ///
    /// Fails with `UserNotFound` when `user_id` does not reference a user.
    async fn create(&self, message: &NewMessage) -> RepoResult<Message>;

    /// Delete a message
    async fn delete(&self, id: MessageId) -> RepoResult<()>;

    /// Latest messages written by a user, newest first
    async fn find_by_user(&self, user_id: UserId, limit: i64) -> RepoResult<Vec<Message>>;

    /// Latest messages written by a user or anyone they follow, newest first
    async fn timeline(&self, user_id: UserId, limit: i64) -> RepoResult<Vec<Message>>;

    /// Number of messages written by a user
    async fn count_by_user(&self, user_id: UserId) -> RepoResult<i64>;
}

// ============================================================================
// Follow Repository
// ============================================================================

#[async_trait]
pub trait FollowRepository: Send + Sync {
    /// Check whether the edge exists
    async fn exists(&self, follow: Follow) -> RepoResult<bool>;

    /// Create an edge
    ///
    /// Fails with `AlreadyFollowing` on a duplicate and `UserNotFound` when
    /// either end does not exist.
    async fn create(&self, follow: Follow) -> RepoResult<()>;

    /// Remove an edge, returning whether it existed
    async fn delete(&self, follow: Follow) -> RepoResult<bool>;

    /// Users following the given user
    async fn followers(&self, user_id: UserId) -> RepoResult<Vec<User>>;

    /// Users the given user follows
    async fn following(&self, user_id: UserId) -> RepoResult<Vec<User>>;

    /// Number of users following the given user
    async fn count_followers(&self, user_id: UserId) -> RepoResult<i64>;

    /// Number of users the given user follows
    async fn count_following(&self, user_id: UserId) -> RepoResult<i64>;
}
