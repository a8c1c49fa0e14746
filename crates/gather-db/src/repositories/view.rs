//! PostgreSQL implementation of ViewRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use gather_core::traits::{RepoResult, ViewRepository};
use gather_core::{DomainError, Event, Identity};

use crate::models::EventModel;

use super::error::map_db_error;

const EVENT_COLUMNS: &str = "id, name, description, event_date, location, author_id, \
     max_participants, views, like_count, dislike_count, created_at";

/// PostgreSQL implementation of ViewRepository
#[derive(Clone)]
pub struct PgViewRepository {
    pool: PgPool,
}

impl PgViewRepository {
    /// Create a new PgViewRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ViewRepository for PgViewRepository {
    #[instrument(skip(self))]
    async fn record(&self, event_id: i64, identity: Identity) -> RepoResult<Event> {
        let user_id = identity.user_id();
        let session_id = identity.session_id();

        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let event = sqlx::query_as::<_, EventModel>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events WHERE id = $1 FOR UPDATE"
        ))
        .bind(event_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let Some(event) = event else {
            return Err(DomainError::EventNotFound(event_id));
        };

        let seen = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM event_views
                WHERE event_id = $1
                  AND user_id IS NOT DISTINCT FROM $2
                  AND session_id IS NOT DISTINCT FROM $3
            )
            "#,
        )
        .bind(event_id)
        .bind(user_id)
        .bind(session_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        // Repeat view: counter stays where it is.
        if seen {
            tx.commit().await.map_err(map_db_error)?;
            return Ok(Event::from(event));
        }

        sqlx::query(
            r#"
            INSERT INTO event_views (event_id, user_id, session_id)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(event_id)
        .bind(user_id)
        .bind(session_id)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let updated = sqlx::query_as::<_, EventModel>(&format!(
            "UPDATE events SET views = views + 1 WHERE id = $1 RETURNING {EVENT_COLUMNS}"
        ))
        .bind(event_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(Event::from(updated))
    }
}
