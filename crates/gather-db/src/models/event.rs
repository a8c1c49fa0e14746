//! Event database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the events table
#[derive(Debug, Clone, FromRow)]
pub struct EventModel {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub event_date: DateTime<Utc>,
    pub location: String,
    pub author_id: i64,
    pub max_participants: Option<i32>,
    pub views: i32,
    pub like_count: i32,
    pub dislike_count: i32,
    pub created_at: DateTime<Utc>,
}
