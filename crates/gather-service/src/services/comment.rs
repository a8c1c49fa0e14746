//! Comment service

use tracing::{info, instrument};
use validator::Validate;

use gather_core::entities::NewComment;
use gather_core::{Comment, DomainError};

use crate::dto::CreateCommentRequest;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Comment service
pub struct CommentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommentService<'a> {
    /// Create a new CommentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Post a comment on an event
    #[instrument(skip(self, request))]
    pub async fn create(
        &self,
        event_id: i64,
        request: CreateCommentRequest,
    ) -> ServiceResult<Comment> {
        request.validate()?;

        let new_comment = NewComment {
            event_id,
            author_name: request.author_name,
            content: request.content,
        };

        let comment = self.ctx.comment_repo().create(&new_comment).await?;

        info!(comment_id = %comment.id, event_id = %event_id, "Comment created");

        Ok(comment)
    }

    /// Get a comment by id
    #[instrument(skip(self))]
    pub async fn get(&self, comment_id: i64) -> ServiceResult<Comment> {
        self.ctx
            .comment_repo()
            .find_by_id(comment_id)
            .await?
            .ok_or_else(|| ServiceError::from(DomainError::CommentNotFound(comment_id)))
    }
}
