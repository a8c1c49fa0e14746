//! PostgreSQL implementation of EventRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use gather_core::traits::{EventRepository, RepoResult};
use gather_core::{Event, NewEvent};

use crate::models::EventModel;

use super::error::map_db_error;

const EVENT_COLUMNS: &str = "id, name, description, event_date, location, author_id, \
     max_participants, views, like_count, dislike_count, created_at";

/// PostgreSQL implementation of EventRepository
#[derive(Clone)]
pub struct PgEventRepository {
    pool: PgPool,
}

impl PgEventRepository {
    /// Create a new PgEventRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventRepository for PgEventRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Event>> {
        let result = sqlx::query_as::<_, EventModel>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Event::from))
    }

    #[instrument(skip(self))]
    async fn create(&self, event: &NewEvent) -> RepoResult<Event> {
        let model = sqlx::query_as::<_, EventModel>(&format!(
            r#"
            INSERT INTO events (name, description, event_date, location, author_id, max_participants)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {EVENT_COLUMNS}
            "#
        ))
        .bind(&event.name)
        .bind(&event.description)
        .bind(event.event_date)
        .bind(&event.location)
        .bind(event.author_id)
        .bind(event.max_participants)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Event::from(model))
    }
}
