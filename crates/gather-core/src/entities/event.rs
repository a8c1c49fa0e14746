//! Event entity - the central content item
//!
//! Carries the aggregate counters (`views`, `like_count`, `dislike_count`)
//! that must stay equal to the number of matching records at all times.
//! Counters are only mutated inside the same transaction as the record
//! insert or delete that justifies them.

use chrono::{DateTime, Utc};

/// Event entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub event_date: DateTime<Utc>,
    pub location: String,
    pub author_id: i64,
    /// Optional RSVP capacity; `None` means unbounded
    pub max_participants: Option<i32>,
    pub views: i32,
    pub like_count: i32,
    pub dislike_count: i32,
    pub created_at: DateTime<Utc>,
}

impl Event {
    /// Check whether `registered` registrations leave room for one more
    #[inline]
    pub fn has_capacity_for(&self, registered: i64) -> bool {
        match self.max_participants {
            Some(cap) => registered < i64::from(cap),
            None => true,
        }
    }
}

/// Data required to create a new event
#[derive(Debug, Clone)]
pub struct NewEvent {
    pub name: String,
    pub description: String,
    pub event_date: DateTime<Utc>,
    pub location: String,
    pub author_id: i64,
    pub max_participants: Option<i32>,
}
