//! PostgreSQL implementation of SessionRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use gather_core::traits::{RepoResult, SessionRepository};
use gather_core::{DomainError, Session};

use crate::models::SessionModel;

use super::error::map_db_error;

/// PostgreSQL implementation of SessionRepository
#[derive(Clone)]
pub struct PgSessionRepository {
    pool: PgPool,
}

impl PgSessionRepository {
    /// Create a new PgSessionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionRepository for PgSessionRepository {
    #[instrument(skip(self))]
    async fn find(&self, id: Uuid) -> RepoResult<Option<Session>> {
        let result = sqlx::query_as::<_, SessionModel>(
            r#"
            SELECT id, user_id, is_valid, created_at
            FROM sessions
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Session::from))
    }

    #[instrument(skip(self))]
    async fn find_valid(&self, id: Uuid) -> RepoResult<Option<Session>> {
        let result = sqlx::query_as::<_, SessionModel>(
            r#"
            SELECT id, user_id, is_valid, created_at
            FROM sessions
            WHERE id = $1 AND is_valid = TRUE
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Session::from))
    }

    #[instrument(skip(self))]
    async fn create_guest(&self) -> RepoResult<Session> {
        let model = sqlx::query_as::<_, SessionModel>(
            r#"
            INSERT INTO sessions DEFAULT VALUES
            RETURNING id, user_id, is_valid, created_at
            "#,
        )
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Session::from(model))
    }

    #[instrument(skip(self))]
    async fn start_user_session(
        &self,
        user_id: i64,
        supersedes: Option<Uuid>,
    ) -> RepoResult<Session> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // The superseded guest session may already be invalid (or gone);
        // either way the new session must still be created.
        if let Some(old_id) = supersedes {
            sqlx::query(
                r#"
                UPDATE sessions SET is_valid = FALSE
                WHERE id = $1 AND is_valid = TRUE
                "#,
            )
            .bind(old_id)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;
        }

        let model = sqlx::query_as::<_, SessionModel>(
            r#"
            INSERT INTO sessions (user_id)
            VALUES ($1)
            RETURNING id, user_id, is_valid, created_at
            "#,
        )
        .bind(user_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(Session::from(model))
    }

    #[instrument(skip(self))]
    async fn invalidate(&self, id: Uuid) -> RepoResult<()> {
        // Conditional update: only one of two racing invalidations flips
        // the flag, the loser falls through to the disambiguation probe.
        let result = sqlx::query(
            r#"
            UPDATE sessions SET is_valid = FALSE
            WHERE id = $1 AND is_valid = TRUE
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 1 {
            return Ok(());
        }

        let exists = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(SELECT 1 FROM sessions WHERE id = $1)
            "#,
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        if exists {
            Err(DomainError::SessionAlreadyInvalid)
        } else {
            Err(DomainError::SessionNotFound(id))
        }
    }
}
