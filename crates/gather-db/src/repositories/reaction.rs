//! PostgreSQL implementation of ReactionRepository
//!
//! Reactions for events and comments live in separate tables with the same
//! shape, so every query is dispatched on the content type. The counter
//! columns live on the content row itself and are adjusted in the same
//! transaction that mutates the reaction row, with the content row locked
//! first so two racing appliers serialize.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use gather_core::traits::{ReactionOutcome, ReactionRepository, RepoResult};
use gather_core::{ContentRef, DomainError, Identity, Reaction, ReactionKind};

use crate::mappers::reaction_from_model;
use crate::models::ReactionModel;

use super::error::{map_db_error, map_unique_violation};

/// Table names for one content type
struct ReactionTables {
    reactions: &'static str,
    items: &'static str,
    item_col: &'static str,
}

fn tables_for(target: ContentRef) -> ReactionTables {
    match target {
        ContentRef::Event(_) => ReactionTables {
            reactions: "event_reactions",
            items: "events",
            item_col: "event_id",
        },
        ContentRef::Comment(_) => ReactionTables {
            reactions: "comment_reactions",
            items: "comments",
            item_col: "comment_id",
        },
    }
}

fn counter_col(kind: ReactionKind) -> &'static str {
    match kind {
        ReactionKind::Like => "like_count",
        ReactionKind::Dislike => "dislike_count",
    }
}

/// PostgreSQL implementation of ReactionRepository
#[derive(Clone)]
pub struct PgReactionRepository {
    pool: PgPool,
}

impl PgReactionRepository {
    /// Create a new PgReactionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReactionRepository for PgReactionRepository {
    #[instrument(skip(self))]
    async fn find(&self, target: ContentRef, identity: Identity) -> RepoResult<Option<Reaction>> {
        let t = tables_for(target);
        let result = sqlx::query_as::<_, ReactionModel>(&format!(
            r#"
            SELECT user_id, session_id, kind, created_at
            FROM {}
            WHERE {} = $1
              AND user_id IS NOT DISTINCT FROM $2
              AND session_id IS NOT DISTINCT FROM $3
            "#,
            t.reactions, t.item_col
        ))
        .bind(target.id())
        .bind(identity.user_id())
        .bind(identity.session_id())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(|m| reaction_from_model(target, m)).transpose()
    }

    #[instrument(skip(self))]
    async fn apply(
        &self,
        target: ContentRef,
        identity: Identity,
        kind: ReactionKind,
    ) -> RepoResult<ReactionOutcome> {
        let t = tables_for(target);
        let user_id: Option<i64> = identity.user_id();
        let session_id: Option<Uuid> = identity.session_id();

        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Lock the content row first; the counter update below depends on it
        // and the lock serializes racing appliers for the same item.
        let locked = sqlx::query_scalar::<_, i64>(&format!(
            "SELECT id FROM {} WHERE id = $1 FOR UPDATE",
            t.items
        ))
        .bind(target.id())
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if locked.is_none() {
            return Err(DomainError::ContentNotFound(target));
        }

        let existing = sqlx::query_scalar::<_, String>(&format!(
            r#"
            SELECT kind FROM {}
            WHERE {} = $1
              AND user_id IS NOT DISTINCT FROM $2
              AND session_id IS NOT DISTINCT FROM $3
            "#,
            t.reactions, t.item_col
        ))
        .bind(target.id())
        .bind(user_id)
        .bind(session_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let outcome = match existing.as_deref() {
            None => {
                sqlx::query(&format!(
                    r#"
                    INSERT INTO {} ({}, user_id, session_id, kind)
                    VALUES ($1, $2, $3, $4)
                    "#,
                    t.reactions, t.item_col
                ))
                .bind(target.id())
                .bind(user_id)
                .bind(session_id)
                .bind(kind.as_str())
                .execute(&mut *tx)
                .await
                .map_err(|e| map_unique_violation(e, || DomainError::ReactionConflict))?;

                sqlx::query(&format!(
                    "UPDATE {} SET {} = {} + 1 WHERE id = $1",
                    t.items,
                    counter_col(kind),
                    counter_col(kind)
                ))
                .bind(target.id())
                .execute(&mut *tx)
                .await
                .map_err(map_db_error)?;

                ReactionOutcome::Added
            }
            Some(k) if k == kind.as_str() => ReactionOutcome::Unchanged,
            Some(_) => {
                sqlx::query(&format!(
                    r#"
                    UPDATE {} SET kind = $4, created_at = NOW()
                    WHERE {} = $1
                      AND user_id IS NOT DISTINCT FROM $2
                      AND session_id IS NOT DISTINCT FROM $3
                    "#,
                    t.reactions, t.item_col
                ))
                .bind(target.id())
                .bind(user_id)
                .bind(session_id)
                .bind(kind.as_str())
                .execute(&mut *tx)
                .await
                .map_err(map_db_error)?;

                // Both counters move in one statement so no reader observes
                // the sum off by one.
                sqlx::query(&format!(
                    "UPDATE {} SET {} = {} + 1, {} = {} - 1 WHERE id = $1",
                    t.items,
                    counter_col(kind),
                    counter_col(kind),
                    counter_col(kind.opposite()),
                    counter_col(kind.opposite())
                ))
                .bind(target.id())
                .execute(&mut *tx)
                .await
                .map_err(map_db_error)?;

                ReactionOutcome::Switched
            }
        };

        tx.commit().await.map_err(map_db_error)?;

        Ok(outcome)
    }
}
