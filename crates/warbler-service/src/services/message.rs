//! Message service
//!
//! Handles message creation, deletion, and timelines.

use tracing::{info, instrument};

use warbler_core::entities::{Message, NewMessage};
use warbler_core::traits::DEFAULT_PAGE_LIMIT;
use warbler_core::{DomainError, MessageId, UserId};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Clamp a requested page size to `1..=100`, defaulting to 100
pub fn page_limit(limit: Option<i64>) -> i64 {
    limit
        .unwrap_or(DEFAULT_PAGE_LIMIT)
        .clamp(1, DEFAULT_PAGE_LIMIT)
}

/// Message service
pub struct MessageService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MessageService<'a> {
    /// Create a new MessageService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Post a new message
    #[instrument(skip(self, text))]
    pub async fn create_message(&self, author: UserId, text: &str) -> ServiceResult<Message> {
        let new_message = NewMessage::new(text, author)?;
        let message = self.ctx.message_repo().create(&new_message).await?;
        info!(message_id = %message.id, "Message created");
        Ok(message)
    }

    /// Get message by ID
    #[instrument(skip(self))]
    pub async fn get_message(&self, message_id: MessageId) -> ServiceResult<Message> {
        self.ctx
            .message_repo()
            .find_by_id(message_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Message", message_id.to_string()))
    }

    /// Delete a message; only its author may do so
    #[instrument(skip(self))]
    pub async fn delete_message(&self, current: UserId, message_id: MessageId) -> ServiceResult<()> {
        let message = self.get_message(message_id).await?;
        if !message.is_authored_by(current) {
            return Err(DomainError::NotMessageAuthor.into());
        }

        self.ctx.message_repo().delete(message_id).await?;
        info!(message_id = %message_id, "Message deleted");
        Ok(())
    }

    /// Latest messages written by a user
    #[instrument(skip(self))]
    pub async fn user_messages(&self, user_id: UserId, limit: Option<i64>) -> ServiceResult<Vec<Message>> {
        Ok(self
            .ctx
            .message_repo()
            .find_by_user(user_id, page_limit(limit))
            .await?)
    }

    /// Latest messages from the user and everyone they follow
    #[instrument(skip(self))]
    pub async fn home_timeline(&self, current: UserId, limit: Option<i64>) -> ServiceResult<Vec<Message>> {
        Ok(self
            .ctx
            .message_repo()
            .timeline(current, page_limit(limit))
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::SignupForm;
    use crate::services::test_support::memory_context;
    use crate::services::UserService;
    use warbler_core::entities::User;

    async fn signup(ctx: &ServiceContext, username: &str) -> User {
        UserService::new(ctx)
            .signup(SignupForm {
                username: username.to_string(),
                email: format!("{username}@test.com"),
                password: "password".to_string(),
                image_url: None,
            })
            .await
            .unwrap()
    }

    #[test]
    fn test_page_limit() {
        assert_eq!(page_limit(None), 100);
        assert_eq!(page_limit(Some(0)), 1);
        assert_eq!(page_limit(Some(-5)), 1);
        assert_eq!(page_limit(Some(20)), 20);
        assert_eq!(page_limit(Some(5000)), 100);
    }

    #[tokio::test]
    async fn test_create_and_get_message() {
        let (ctx, _store) = memory_context();
        let user = signup(&ctx, "testuser").await;
        let service = MessageService::new(&ctx);

        let message = service.create_message(user.id, "test message").await.unwrap();
        assert_eq!(message.text, "test message");
        assert_eq!(message.user_id, user.id);

        let found = service.get_message(message.id).await.unwrap();
        assert_eq!(found, message);
    }

    #[tokio::test]
    async fn test_invalid_messages_never_stored() {
        let (ctx, store) = memory_context();
        let user = signup(&ctx, "testuser").await;
        let service = MessageService::new(&ctx);

        let err = service.create_message(user.id, "   ").await.unwrap_err();
        assert!(matches!(err, ServiceError::Domain(DomainError::EmptyMessage)));

        let err = service
            .create_message(user.id, &"x".repeat(141))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Domain(DomainError::ContentTooLong { max: 140 })));

        let err = service
            .create_message(UserId::new(999), "test message")
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Domain(DomainError::UserNotFound(_))));

        assert_eq!(store.message_count(), 0);
    }

    #[tokio::test]
    async fn test_only_author_deletes() {
        let (ctx, _store) = memory_context();
        let author = signup(&ctx, "author").await;
        let other = signup(&ctx, "other").await;
        let service = MessageService::new(&ctx);
        let message = service.create_message(author.id, "mine").await.unwrap();

        let err = service.delete_message(other.id, message.id).await.unwrap_err();
        assert_eq!(err.status_code(), 403);

        service.delete_message(author.id, message.id).await.unwrap();
        let err = service.get_message(message.id).await.unwrap_err();
        assert_eq!(err.status_code(), 404);
    }

    #[tokio::test]
    async fn test_home_timeline() {
        let (ctx, _store) = memory_context();
        let me = signup(&ctx, "me").await;
        let friend = signup(&ctx, "friend").await;
        let stranger = signup(&ctx, "stranger").await;
        UserService::new(&ctx).follow(me.id, friend.id).await.unwrap();

        let service = MessageService::new(&ctx);
        let mine = service.create_message(me.id, "mine").await.unwrap();
        let theirs = service.create_message(friend.id, "theirs").await.unwrap();
        service.create_message(stranger.id, "noise").await.unwrap();

        let timeline = service.home_timeline(me.id, None).await.unwrap();
        let ids: Vec<MessageId> = timeline.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![theirs.id, mine.id]);

        let page = service.home_timeline(me.id, Some(1)).await.unwrap();
        assert_eq!(page.len(), 1);

        let own = service.user_messages(me.id, None).await.unwrap();
        assert_eq!(own, vec![mine]);
    }
}
