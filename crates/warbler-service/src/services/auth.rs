//! Authentication service
//!
//! Pairs signup and login with session tokens for the `curr_user` cookie.

use tracing::{info, instrument};
use validator::Validate;

use warbler_core::entities::User;
use warbler_core::UserId;

use crate::dto::{LoginForm, SignupForm};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::user::UserService;

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Sign a new user up and open a session for them
    #[instrument(skip(self, form), fields(username = %form.username))]
    pub async fn register(&self, form: SignupForm) -> ServiceResult<(User, String)> {
        let user = UserService::new(self.ctx).signup(form).await?;
        let token = self.start_session(user.id)?;
        Ok((user, token))
    }

    /// Check credentials and open a session on success
    ///
    /// `None` means the credentials were rejected.
    #[instrument(skip(self, form), fields(username = %form.username))]
    pub async fn login(&self, form: LoginForm) -> ServiceResult<Option<(User, String)>> {
        if form.validate().is_err() {
            return Ok(None);
        }

        let Some(user) = UserService::new(self.ctx)
            .authenticate(&form.username, &form.password)
            .await?
        else {
            return Ok(None);
        };

        let token = self.start_session(user.id)?;
        info!(user_id = %user.id, "User logged in");
        Ok(Some((user, token)))
    }

    /// Issue a session token for a user
    pub fn start_session(&self, user_id: UserId) -> ServiceResult<String> {
        Ok(self.ctx.session_service().issue(user_id)?)
    }

    /// Resolve a session token to a user id
    ///
    /// Invalid or expired tokens resolve to `None`.
    pub fn resolve_session(&self, token: &str) -> Option<UserId> {
        self.ctx.session_service().verify(token).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::memory_context;

    fn signup_form() -> SignupForm {
        SignupForm {
            username: "testuser".to_string(),
            email: "test@test.com".to_string(),
            password: "HASHED_PASSWORD".to_string(),
            image_url: None,
        }
    }

    fn login_form(username: &str, password: &str) -> LoginForm {
        LoginForm {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_opens_session() {
        let (ctx, _store) = memory_context();
        let service = AuthService::new(&ctx);

        let (user, token) = service.register(signup_form()).await.unwrap();
        assert_eq!(service.resolve_session(&token), Some(user.id));
    }

    #[tokio::test]
    async fn test_login() {
        let (ctx, _store) = memory_context();
        let service = AuthService::new(&ctx);
        let (user, _) = service.register(signup_form()).await.unwrap();

        let (logged_in, token) = service
            .login(login_form("testuser", "HASHED_PASSWORD"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(logged_in.id, user.id);
        assert_eq!(service.resolve_session(&token), Some(user.id));

        assert!(service.login(login_form("testuser", "nope")).await.unwrap().is_none());
        assert!(service.login(login_form("ghost", "HASHED_PASSWORD")).await.unwrap().is_none());
        assert!(service.login(login_form("", "")).await.unwrap().is_none());
    }

    #[test]
    fn test_resolve_garbage_session() {
        let (ctx, _store) = memory_context();
        assert!(AuthService::new(&ctx).resolve_session("garbage").is_none());
    }
}
