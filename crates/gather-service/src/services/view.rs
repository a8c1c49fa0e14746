//! View counting service
//!
//! Every view is attributed to an identity so repeat visits do not inflate
//! the counter. A visitor without a session gets a guest session minted
//! here, and the caller is expected to hand the session id back to the
//! client as its cookie.

use tracing::{info, instrument};
use uuid::Uuid;

use gather_core::{Event, Session};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::session::SessionService;

/// Result of recording a view
#[derive(Debug)]
pub struct ViewOutcome {
    /// The event with its current view counter
    pub event: Event,
    /// The session the view was attributed to
    pub session: Session,
}

/// View counting service
pub struct ViewService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ViewService<'a> {
    /// Create a new ViewService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Record a view of an event
    ///
    /// Idempotent per identity: only the first view from a given user or
    /// guest session moves the counter.
    #[instrument(skip(self))]
    pub async fn record(
        &self,
        event_id: i64,
        session_id: Option<Uuid>,
    ) -> ServiceResult<ViewOutcome> {
        let session = SessionService::new(self.ctx)
            .get_or_create(session_id)
            .await?;

        let identity = session.identity();
        let event = self.ctx.view_repo().record(event_id, identity).await?;

        info!(event_id = %event_id, identity = %identity, views = event.views, "View recorded");

        Ok(ViewOutcome { event, session })
    }
}
