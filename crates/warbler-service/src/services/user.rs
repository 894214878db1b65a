//! User service
//!
//! Handles signup, credential checks, the follow graph, and account removal.

use tracing::{info, instrument, warn};
use validator::Validate;

use warbler_core::entities::{Follow, NewUser, User, UserProfile};
use warbler_core::{DomainError, UserId};

use crate::dto::{first_validation_message, SignupForm};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user
    ///
    /// Nothing is persisted when validation or a uniqueness check fails.
    #[instrument(skip(self, form), fields(username = %form.username))]
    pub async fn signup(&self, form: SignupForm) -> ServiceResult<User> {
        form.validate()
            .map_err(|e| ServiceError::validation(first_validation_message(&e)))?;

        let password_hash = self.ctx.password_service().hash(&form.password)?;
        let new_user = NewUser::new(
            &form.username,
            &form.email,
            password_hash,
            form.image_url.as_deref(),
        )?;

        let user = self.ctx.user_repo().create(&new_user).await?;
        info!(user_id = %user.id, "User signed up");

        Ok(user)
    }

    /// Check a username/password pair
    ///
    /// Returns `None` for an unknown username or a wrong password. Both
    /// paths run one password verification. The username is trimmed the
    /// same way signup trims it.
    #[instrument(skip(self, password))]
    pub async fn authenticate(&self, username: &str, password: &str) -> ServiceResult<Option<User>> {
        let user = self.ctx.user_repo().find_by_username(username.trim()).await?;
        let hash = match &user {
            Some(user) => self.ctx.user_repo().get_password_hash(user.id).await?,
            None => None,
        };

        if self.ctx.password_service().verify(password, hash.as_deref()) {
            Ok(user)
        } else {
            warn!("Authentication failed");
            Ok(None)
        }
    }

    /// Whether `user` follows `other`
    #[instrument(skip(self))]
    pub async fn is_following(&self, user: UserId, other: UserId) -> ServiceResult<bool> {
        Ok(self.ctx.follow_repo().exists(Follow::new(user, other)).await?)
    }

    /// Whether `other` follows `user`
    #[instrument(skip(self))]
    pub async fn is_followed_by(&self, user: UserId, other: UserId) -> ServiceResult<bool> {
        Ok(self.ctx.follow_repo().exists(Follow::new(other, user)).await?)
    }

    /// Start following another user
    #[instrument(skip(self))]
    pub async fn follow(&self, current: UserId, other: UserId) -> ServiceResult<()> {
        let edge = Follow::new(current, other);
        if edge.is_self_follow() {
            return Err(DomainError::CannotFollowSelf.into());
        }
        self.get_user(other).await?;

        self.ctx.follow_repo().create(edge).await?;
        info!(follower = %current, followed = %other, "Follow created");
        Ok(())
    }

    /// Stop following another user, returning whether an edge was removed
    #[instrument(skip(self))]
    pub async fn unfollow(&self, current: UserId, other: UserId) -> ServiceResult<bool> {
        let removed = self
            .ctx
            .follow_repo()
            .delete(Follow::new(current, other))
            .await?;
        if removed {
            info!(follower = %current, followed = %other, "Follow removed");
        }
        Ok(removed)
    }

    /// Users following the given user
    #[instrument(skip(self))]
    pub async fn followers(&self, user_id: UserId) -> ServiceResult<Vec<User>> {
        self.get_user(user_id).await?;
        Ok(self.ctx.follow_repo().followers(user_id).await?)
    }

    /// Users the given user follows
    #[instrument(skip(self))]
    pub async fn following(&self, user_id: UserId) -> ServiceResult<Vec<User>> {
        self.get_user(user_id).await?;
        Ok(self.ctx.follow_repo().following(user_id).await?)
    }

    /// User together with message, follower, and following counts
    #[instrument(skip(self))]
    pub async fn profile(&self, user_id: UserId) -> ServiceResult<UserProfile> {
        let user = self.get_user(user_id).await?;

        Ok(UserProfile {
            messages_count: self.ctx.message_repo().count_by_user(user_id).await?,
            followers_count: self.ctx.follow_repo().count_followers(user_id).await?,
            following_count: self.ctx.follow_repo().count_following(user_id).await?,
            user,
        })
    }

    /// Get user by ID
    #[instrument(skip(self))]
    pub async fn get_user(&self, user_id: UserId) -> ServiceResult<User> {
        self.ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))
    }

    /// Look a user up by username
    #[instrument(skip(self))]
    pub async fn find_by_username(&self, username: &str) -> ServiceResult<Option<User>> {
        Ok(self.ctx.user_repo().find_by_username(username).await?)
    }

    /// Delete a user account with its messages and follow edges
    #[instrument(skip(self))]
    pub async fn delete_user(&self, user_id: UserId) -> ServiceResult<()> {
        self.ctx.user_repo().delete(user_id).await?;
        info!(user_id = %user_id, "User account deleted");
        Ok(())
    }
}
