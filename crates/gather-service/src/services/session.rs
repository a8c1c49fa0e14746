//! Session management service
//!
//! Sessions are the anonymous-friendly identity anchor: every visitor can be
//! handed a guest session, and logging in upgrades it to a user session.

use tracing::{info, instrument};
use uuid::Uuid;

use gather_core::Session;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Session service
pub struct SessionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SessionService<'a> {
    /// Create a new SessionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a fresh guest session
    #[instrument(skip(self))]
    pub async fn create_guest(&self) -> ServiceResult<Session> {
        let session = self.ctx.session_repo().create_guest().await?;
        info!(session_id = %session.id, "Guest session created");
        Ok(session)
    }

    /// Return the valid session behind the cookie, or mint a guest session
    ///
    /// Invalid and unknown session ids are treated the same as a missing
    /// cookie: the caller gets a fresh guest session.
    #[instrument(skip(self))]
    pub async fn get_or_create(&self, session_id: Option<Uuid>) -> ServiceResult<Session> {
        if let Some(id) = session_id {
            if let Some(session) = self.ctx.session_repo().find_valid(id).await? {
                return Ok(session);
            }
        }
        self.create_guest().await
    }

    /// Invalidate a session (logout)
    ///
    /// # Errors
    /// `SessionNotFound` for an unknown id, `SessionAlreadyInvalid` when the
    /// session was already invalidated.
    #[instrument(skip(self))]
    pub async fn invalidate(&self, session_id: Uuid) -> ServiceResult<()> {
        self.ctx.session_repo().invalidate(session_id).await?;
        info!(session_id = %session_id, "Session invalidated");
        Ok(())
    }
}
