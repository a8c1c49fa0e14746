//! Comment entity - the second reaction-bearing content item

use chrono::{DateTime, Utc};

/// Comment entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: i64,
    pub event_id: i64,
    pub author_name: String,
    pub content: String,
    pub like_count: i32,
    pub dislike_count: i32,
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new comment
#[derive(Debug, Clone)]
pub struct NewComment {
    pub event_id: i64,
    pub author_name: String,
    pub content: String,
}
