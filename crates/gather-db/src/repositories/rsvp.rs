//! PostgreSQL implementation of RsvpRepository
//!
//! Registration locks the event row with SELECT ... FOR UPDATE before the
//! duplicate and capacity checks, so two racing registrations for the last
//! slot serialize and exactly one succeeds. Partial unique indexes on
//! (event_id, user_id) and (event_id, email) back the duplicate check as a
//! second line of defense.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use gather_core::traits::{RepoResult, RsvpRepository};
use gather_core::{DomainError, Rsvp, RsvpActor};

use crate::mappers::rsvp_from_model;
use crate::models::RsvpModel;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of RsvpRepository
#[derive(Clone)]
pub struct PgRsvpRepository {
    pool: PgPool,
}

impl PgRsvpRepository {
    /// Create a new PgRsvpRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn actor_columns(actor: &RsvpActor) -> (Option<i64>, Option<&str>) {
    match actor {
        RsvpActor::User(id) => (Some(*id), None),
        RsvpActor::GuestEmail(email) => (None, Some(email.as_str())),
    }
}

#[async_trait]
impl RsvpRepository for PgRsvpRepository {
    #[instrument(skip(self))]
    async fn register(&self, event_id: i64, actor: &RsvpActor) -> RepoResult<Rsvp> {
        let (user_id, email) = actor_columns(actor);

        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let capacity = sqlx::query_scalar::<_, Option<i32>>(
            r#"
            SELECT max_participants FROM events WHERE id = $1 FOR UPDATE
            "#,
        )
        .bind(event_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let Some(capacity) = capacity else {
            return Err(DomainError::EventNotFound(event_id));
        };

        let already = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM rsvps
                WHERE event_id = $1
                  AND user_id IS NOT DISTINCT FROM $2
                  AND email IS NOT DISTINCT FROM $3
            )
            "#,
        )
        .bind(event_id)
        .bind(user_id)
        .bind(email)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if already {
            return Err(DomainError::AlreadyRegistered);
        }

        if let Some(max) = capacity {
            let registered = sqlx::query_scalar::<_, i64>(
                r#"
                SELECT COUNT(*) FROM rsvps WHERE event_id = $1
                "#,
            )
            .bind(event_id)
            .fetch_one(&mut *tx)
            .await
            .map_err(map_db_error)?;

            if registered >= i64::from(max) {
                return Err(DomainError::EventFull);
            }
        }

        let model = sqlx::query_as::<_, RsvpModel>(
            r#"
            INSERT INTO rsvps (event_id, user_id, email)
            VALUES ($1, $2, $3)
            RETURNING id, event_id, user_id, email, created_at
            "#,
        )
        .bind(event_id)
        .bind(user_id)
        .bind(email)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::AlreadyRegistered))?;

        tx.commit().await.map_err(map_db_error)?;

        rsvp_from_model(model)
    }

    #[instrument(skip(self))]
    async fn count_for_event(&self, event_id: i64) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM rsvps WHERE event_id = $1
            "#,
        )
        .bind(event_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count)
    }
}
