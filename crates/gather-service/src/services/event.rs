//! Event service

use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

use gather_core::entities::NewEvent;
use gather_core::{DomainError, Event};

use crate::dto::CreateEventRequest;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::identity::IdentityService;

/// Event service
pub struct EventService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> EventService<'a> {
    /// Create a new EventService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a new event; requires an authenticated session
    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn create(
        &self,
        session_id: Option<Uuid>,
        request: CreateEventRequest,
    ) -> ServiceResult<Event> {
        request.validate()?;

        let author = IdentityService::new(self.ctx)
            .resolve_strict(session_id)
            .await?;

        let new_event = NewEvent {
            name: request.name,
            description: request.description,
            event_date: request.event_date,
            location: request.location,
            author_id: author.id,
            max_participants: request.max_participants,
        };

        let event = self.ctx.event_repo().create(&new_event).await?;

        info!(event_id = %event.id, author_id = %author.id, "Event created");

        Ok(event)
    }

    /// Get an event by id
    #[instrument(skip(self))]
    pub async fn get(&self, event_id: i64) -> ServiceResult<Event> {
        self.ctx
            .event_repo()
            .find_by_id(event_id)
            .await?
            .ok_or_else(|| ServiceError::from(DomainError::EventNotFound(event_id)))
    }
}
