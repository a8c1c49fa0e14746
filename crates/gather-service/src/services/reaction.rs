//! Reaction service
//!
//! Likes and dislikes on events and comments. Guests react through their
//! session identity, so a visitor without any session cannot react at all.

use tracing::{info, instrument};
use uuid::Uuid;

use gather_core::traits::ReactionOutcome;
use gather_core::{ContentRef, DomainError, ReactionKind};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::identity::IdentityService;

/// Reaction service
pub struct ReactionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReactionService<'a> {
    /// Create a new ReactionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Apply a reaction to a content item
    ///
    /// `kind` is the raw client string; anything other than "like" or
    /// "dislike" is rejected. Repeating the current reaction is a no-op and
    /// switching kinds moves both counters atomically.
    #[instrument(skip(self))]
    pub async fn react(
        &self,
        session_id: Option<Uuid>,
        target: ContentRef,
        kind: &str,
    ) -> ServiceResult<ReactionOutcome> {
        let kind: ReactionKind = kind
            .parse()
            .map_err(|_| ServiceError::from(DomainError::InvalidReactionKind(kind.to_string())))?;

        let identity = IdentityService::new(self.ctx)
            .resolve_lenient(session_id)
            .await?
            .ok_or_else(|| {
                ServiceError::from(DomainError::Unauthorized(
                    "a session is required to react".to_string(),
                ))
            })?;

        let outcome = self.ctx.reaction_repo().apply(target, identity, kind).await?;

        info!(target = %target, identity = %identity, outcome = ?outcome, "Reaction applied");

        Ok(outcome)
    }
}
