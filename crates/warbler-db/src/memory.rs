//! In-memory implementation of every repository trait
//!
//! Enforces the same rules as the PostgreSQL schema: unique usernames and
//! e-mails, non-empty required text, foreign keys on messages and follows,
//! and cascading deletes. Clones share the same underlying state, so one
//! store can be handed out as all three repositories.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use tracing::instrument;

use warbler_core::entities::{Follow, Message, NewMessage, NewUser, User, DEFAULT_HEADER_IMAGE_URL};
use warbler_core::error::DomainError;
use warbler_core::traits::{FollowRepository, MessageRepository, RepoResult, UserRepository};
use warbler_core::value_objects::{MessageId, UserId};

#[derive(Debug, Clone)]
struct StoredUser {
    user: User,
    password_hash: String,
}

#[derive(Debug, Default)]
struct State {
    users: BTreeMap<UserId, StoredUser>,
    messages: BTreeMap<MessageId, Message>,
    /// (followed, follower), mirroring the composite primary key
    follows: BTreeSet<(UserId, UserId)>,
    last_user_id: i64,
    last_message_id: i64,
}

impl State {
    fn users_where<F>(&self, pred: F) -> Vec<User>
    where
        F: Fn(&(UserId, UserId)) -> Option<UserId>,
    {
        let mut users: Vec<User> = self
            .follows
            .iter()
            .filter_map(pred)
            .filter_map(|id| self.users.get(&id).map(|stored| stored.user.clone()))
            .collect();
        users.sort_by(|a, b| a.username.cmp(&b.username));
        users
    }

    fn newest_first<F>(&self, pred: F, limit: i64) -> Vec<Message>
    where
        F: Fn(&Message) -> bool,
    {
        let mut messages: Vec<Message> =
            self.messages.values().filter(|m| pred(m)).cloned().collect();
        messages.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        messages.truncate(usize::try_from(limit.max(0)).unwrap_or(usize::MAX));
        messages
    }
}

/// Repository store held entirely in process memory
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: Arc<RwLock<State>>,
}

impl MemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users
    pub fn user_count(&self) -> usize {
        self.state.read().users.len()
    }

    /// Number of stored messages
    pub fn message_count(&self) -> usize {
        self.state.read().messages.len()
    }

    /// Number of stored follow edges
    pub fn follow_count(&self) -> usize {
        self.state.read().follows.len()
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>> {
        Ok(self.state.read().users.get(&id).map(|s| s.user.clone()))
    }

    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        Ok(self
            .state
            .read()
            .users
            .values()
            .find(|s| s.user.username == username)
            .map(|s| s.user.clone()))
    }

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        Ok(self
            .state
            .read()
            .users
            .values()
            .find(|s| s.user.email == email)
            .map(|s| s.user.clone()))
    }

    #[instrument(skip(self, user), fields(username = %user.username))]
    async fn create(&self, user: &NewUser) -> RepoResult<User> {
        user.check_constraints()?;

        let mut state = self.state.write();
        if state.users.values().any(|s| s.user.username == user.username) {
            return Err(DomainError::UsernameTaken);
        }
        if state.users.values().any(|s| s.user.email == user.email) {
            return Err(DomainError::EmailTaken);
        }

        state.last_user_id += 1;
        let created = User {
            id: UserId::new(state.last_user_id),
            username: user.username.clone(),
            email: user.email.clone(),
            image_url: user.image_url.clone(),
            header_image_url: DEFAULT_HEADER_IMAGE_URL.to_string(),
            bio: None,
            location: None,
            created_at: Utc::now(),
        };
        state.users.insert(
            created.id,
            StoredUser {
                user: created.clone(),
                password_hash: user.password_hash.clone(),
            },
        );

        Ok(created)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: UserId) -> RepoResult<()> {
        let mut state = self.state.write();
        if state.users.remove(&id).is_none() {
            return Err(DomainError::UserNotFound(id));
        }
        state.messages.retain(|_, m| m.user_id != id);
        state
            .follows
            .retain(|(followed, follower)| *followed != id && *follower != id);
        Ok(())
    }

    async fn get_password_hash(&self, id: UserId) -> RepoResult<Option<String>> {
        Ok(self
            .state
            .read()
            .users
            .get(&id)
            .map(|s| s.password_hash.clone()))
    }
}

#[async_trait]
impl MessageRepository for MemoryStore {
    async fn find_by_id(&self, id: MessageId) -> RepoResult<Option<Message>> {
        Ok(self.state.read().messages.get(&id).cloned())
    }

    #[instrument(skip(self, message), fields(user_id = %message.user_id))]
    async fn create(&self, message: &NewMessage) -> RepoResult<Message> {
        message.check_constraints()?;

        let mut state = self.state.write();
        if !state.users.contains_key(&message.user_id) {
            return Err(DomainError::UserNotFound(message.user_id));
        }

        state.last_message_id += 1;
        let created = Message {
            id: MessageId::new(state.last_message_id),
            text: message.text.clone(),
            user_id: message.user_id,
            created_at: Utc::now(),
        };
        state.messages.insert(created.id, created.clone());

        Ok(created)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: MessageId) -> RepoResult<()> {
        match self.state.write().messages.remove(&id) {
            Some(_) => Ok(()),
            None => Err(DomainError::MessageNotFound(id)),
        }
    }

    async fn find_by_user(&self, user_id: UserId, limit: i64) -> RepoResult<Vec<Message>> {
        Ok(self
            .state
            .read()
            .newest_first(|m| m.user_id == user_id, limit))
    }

    async fn timeline(&self, user_id: UserId, limit: i64) -> RepoResult<Vec<Message>> {
        let state = self.state.read();
        let authors: BTreeSet<UserId> = state
            .follows
            .iter()
            .filter(|(_, follower)| *follower == user_id)
            .map(|(followed, _)| *followed)
            .chain(std::iter::once(user_id))
            .collect();

        Ok(state.newest_first(|m| authors.contains(&m.user_id), limit))
    }

    async fn count_by_user(&self, user_id: UserId) -> RepoResult<i64> {
        let count = self
            .state
            .read()
            .messages
            .values()
            .filter(|m| m.user_id == user_id)
            .count();
        Ok(count as i64)
    }
}

#[async_trait]
impl FollowRepository for MemoryStore {
    async fn exists(&self, follow: Follow) -> RepoResult<bool> {
        Ok(self
            .state
            .read()
            .follows
            .contains(&(follow.user_being_followed_id, follow.user_following_id)))
    }

    #[instrument(skip(self))]
    async fn create(&self, follow: Follow) -> RepoResult<()> {
        let mut state = self.state.write();
        for id in [follow.user_being_followed_id, follow.user_following_id] {
            if !state.users.contains_key(&id) {
                return Err(DomainError::UserNotFound(id));
            }
        }
        if !state
            .follows
            .insert((follow.user_being_followed_id, follow.user_following_id))
        {
            return Err(DomainError::AlreadyFollowing);
        }
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, follow: Follow) -> RepoResult<bool> {
        Ok(self
            .state
            .write()
            .follows
            .remove(&(follow.user_being_followed_id, follow.user_following_id)))
    }

    async fn followers(&self, user_id: UserId) -> RepoResult<Vec<User>> {
        Ok(self
            .state
            .read()
            .users_where(|(followed, follower)| (*followed == user_id).then_some(*follower)))
    }

    async fn following(&self, user_id: UserId) -> RepoResult<Vec<User>> {
        Ok(self
            .state
            .read()
            .users_where(|(followed, follower)| (*follower == user_id).then_some(*followed)))
    }

    async fn count_followers(&self, user_id: UserId) -> RepoResult<i64> {
        let count = self
            .state
            .read()
            .follows
            .iter()
            .filter(|(followed, _)| *followed == user_id)
            .count();
        Ok(count as i64)
    }

    async fn count_following(&self, user_id: UserId) -> RepoResult<i64> {
        let count = self
            .state
            .read()
            .follows
            .iter()
            .filter(|(_, follower)| *follower == user_id)
            .count();
        Ok(count as i64)
    }
}
