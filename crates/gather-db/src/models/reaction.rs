//! Reaction database model
//!
//! Shared by the event_reactions and comment_reactions tables; the item
//! column is selected per table by the repository.

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for a reaction row
#[derive(Debug, Clone, FromRow)]
pub struct ReactionModel {
    pub user_id: Option<i64>,
    pub session_id: Option<Uuid>,
    pub kind: String,
    pub created_at: DateTime<Utc>,
}
