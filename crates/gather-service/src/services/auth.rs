//! Authentication service
//!
//! Handles user registration and email/password login. Login starts a user
//! session and invalidates the guest session it supersedes in the same
//! transaction, so no request window exists where both are valid.

use tracing::{info, instrument, warn};
use uuid::Uuid;
use validator::Validate;

use gather_common::auth::validate_password_strength;
use gather_common::AppError;
use gather_core::entities::NewUser;
use gather_core::{DomainError, EmailAddress, Session, User};

use crate::dto::{LoginRequest, RegisterRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<User> {
        request.validate()?;
        validate_password_strength(&request.password)?;

        let email = EmailAddress::parse(&request.email)
            .map_err(|_| ServiceError::from(DomainError::InvalidEmail))?;

        if self.ctx.user_repo().email_exists(email.as_str()).await? {
            return Err(ServiceError::from(DomainError::EmailAlreadyExists));
        }

        let password_hash = self.ctx.password_service().hash(&request.password)?;

        let new_user = NewUser {
            email: email.into_inner(),
            first_name: request.first_name,
            last_name: request.last_name,
        };

        let user = self.ctx.user_repo().create(&new_user, &password_hash).await?;

        info!(user_id = %user.id, "User registered successfully");

        Ok(user)
    }

    /// Login with email and password
    ///
    /// `current_session` is the visitor's guest session cookie, if present;
    /// it gets invalidated atomically when the user session is created.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(
        &self,
        request: LoginRequest,
        current_session: Option<Uuid>,
    ) -> ServiceResult<(User, Session)> {
        request.validate()?;

        let email = EmailAddress::parse(&request.email)
            .map_err(|_| ServiceError::from(DomainError::InvalidEmail))?;

        let user = self
            .ctx
            .user_repo()
            .find_by_email(email.as_str())
            .await?
            .ok_or_else(|| {
                warn!("Login failed: user not found");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        if !user.is_active() {
            warn!(user_id = %user.id, "Login failed: inactive account");
            return Err(ServiceError::from(DomainError::UserInactive));
        }

        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = %user.id, "Login failed: no password hash");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        self.ctx
            .password_service()
            .verify_or_error(&request.password, &password_hash)
            .map_err(|e| {
                warn!(user_id = %user.id, "Login failed: invalid password");
                ServiceError::App(e)
            })?;

        let session = self
            .ctx
            .session_repo()
            .start_user_session(user.id, current_session)
            .await?;

        info!(user_id = %user.id, session_id = %session.id, "User logged in successfully");

        Ok((user, session))
    }
}
