//! Identity resolution
//!
//! Resolves the session cookie (if any) to an [`Identity`]. Two modes exist:
//! lenient resolution never fails, it just yields `None` when no usable
//! session is present; strict resolution requires an authenticated user and
//! rejects everything else.

use tracing::{instrument, warn};
use uuid::Uuid;

use gather_core::{DomainError, Identity, User};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Identity resolution service
pub struct IdentityService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> IdentityService<'a> {
    /// Create a new IdentityService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Resolve a session id leniently
    ///
    /// Missing cookie, unknown session, and invalidated session all resolve
    /// to `None` without error. A valid session yields `Identity::User` when
    /// it belongs to a user and `Identity::Guest` otherwise.
    #[instrument(skip(self))]
    pub async fn resolve_lenient(
        &self,
        session_id: Option<Uuid>,
    ) -> ServiceResult<Option<Identity>> {
        let Some(session_id) = session_id else {
            return Ok(None);
        };

        let session = self.ctx.session_repo().find_valid(session_id).await?;
        Ok(session.map(|s| s.identity()))
    }

    /// Resolve a session id strictly, requiring an authenticated user
    ///
    /// # Errors
    /// `Unauthorized` when the session is missing, invalid, or a guest
    /// session; `UserNotFound` when the session points at a deleted user.
    #[instrument(skip(self))]
    pub async fn resolve_strict(&self, session_id: Option<Uuid>) -> ServiceResult<User> {
        let identity = self.resolve_lenient(session_id).await?;

        let user_id = match identity {
            Some(Identity::User(id)) => id,
            Some(Identity::Guest(_)) => {
                warn!("Strict resolution rejected guest session");
                return Err(ServiceError::from(DomainError::Unauthorized(
                    "authentication required".to_string(),
                )));
            }
            None => {
                return Err(ServiceError::from(DomainError::Unauthorized(
                    "no valid session".to_string(),
                )))
            }
        };

        self.ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::from(DomainError::UserNotFound(user_id)))
    }
}
