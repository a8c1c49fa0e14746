//! PostgreSQL implementation of CommentRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use gather_core::traits::{CommentRepository, RepoResult};
use gather_core::{Comment, DomainError, NewComment};

use crate::models::CommentModel;

use super::error::{map_db_error, map_fk_violation};

/// PostgreSQL implementation of CommentRepository
#[derive(Clone)]
pub struct PgCommentRepository {
    pool: PgPool,
}

impl PgCommentRepository {
    /// Create a new PgCommentRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Comment>> {
        let result = sqlx::query_as::<_, CommentModel>(
            r#"
            SELECT id, event_id, author_name, content, like_count, dislike_count, created_at
            FROM comments
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Comment::from))
    }

    #[instrument(skip(self))]
    async fn create(&self, comment: &NewComment) -> RepoResult<Comment> {
        let event_id = comment.event_id;
        let model = sqlx::query_as::<_, CommentModel>(
            r#"
            INSERT INTO comments (event_id, author_name, content)
            VALUES ($1, $2, $3)
            RETURNING id, event_id, author_name, content, like_count, dislike_count, created_at
            "#,
        )
        .bind(comment.event_id)
        .bind(&comment.author_name)
        .bind(&comment.content)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_fk_violation(e, || DomainError::EventNotFound(event_id)))?;

        Ok(Comment::from(model))
    }
}
