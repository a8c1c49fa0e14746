//! RSVP entity - one registration per (event, actor)

use chrono::{DateTime, Utc};

use crate::value_objects::RsvpActor;

/// RSVP entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rsvp {
    pub id: i64,
    pub event_id: i64,
    pub actor: RsvpActor,
    pub created_at: DateTime<Utc>,
}
