//! RSVP service
//!
//! Authenticated users register under their account; anonymous visitors
//! register with an email address. The two are mutually exclusive: a logged
//! in user's registration always binds to the account, any email in the
//! request body is ignored.

use tracing::{info, instrument, warn};
use uuid::Uuid;

use gather_core::{DomainError, EmailAddress, Identity, Rsvp, RsvpActor};

use crate::dto::RsvpRequest;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::identity::IdentityService;

/// RSVP service
pub struct RsvpService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RsvpService<'a> {
    /// Create a new RsvpService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register for an event
    #[instrument(skip(self, request))]
    pub async fn register(
        &self,
        event_id: i64,
        session_id: Option<Uuid>,
        request: RsvpRequest,
    ) -> ServiceResult<Rsvp> {
        let identity = IdentityService::new(self.ctx)
            .resolve_lenient(session_id)
            .await?;

        let actor = match identity {
            Some(Identity::User(user_id)) => {
                let user = self
                    .ctx
                    .user_repo()
                    .find_by_id(user_id)
                    .await?
                    .ok_or_else(|| ServiceError::from(DomainError::UserNotFound(user_id)))?;

                if !user.is_active() {
                    warn!(user_id = %user_id, "RSVP rejected: inactive account");
                    return Err(ServiceError::from(DomainError::UserInactive));
                }

                RsvpActor::User(user_id)
            }
            _ => {
                let raw = request
                    .email
                    .ok_or_else(|| ServiceError::from(DomainError::MissingRsvpIdentity))?;

                let email = EmailAddress::parse(&raw)
                    .map_err(|_| ServiceError::from(DomainError::InvalidEmail))?;

                RsvpActor::GuestEmail(email)
            }
        };

        let rsvp = self.ctx.rsvp_repo().register(event_id, &actor).await?;

        info!(event_id = %event_id, rsvp_id = %rsvp.id, "Registered for event");

        Ok(rsvp)
    }

    /// Count registrations for an event
    #[instrument(skip(self))]
    pub async fn count_for_event(&self, event_id: i64) -> ServiceResult<i64> {
        Ok(self.ctx.rsvp_repo().count_for_event(event_id).await?)
    }
}
