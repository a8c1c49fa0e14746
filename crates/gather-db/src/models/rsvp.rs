//! RSVP database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the rsvps table
#[derive(Debug, Clone, FromRow)]
pub struct RsvpModel {
    pub id: i64,
    pub event_id: i64,
    pub user_id: Option<i64>,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
}
