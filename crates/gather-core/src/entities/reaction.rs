//! Reaction entity - a like or dislike on a content item
//!
//! A given identity has at most one reaction per content item at any time.
//! Switching kinds replaces the existing record and moves both counters.

use chrono::{DateTime, Utc};

use crate::value_objects::{ContentRef, Identity, ReactionKind};

/// Reaction entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reaction {
    pub target: ContentRef,
    pub identity: Identity,
    pub kind: ReactionKind,
    pub created_at: DateTime<Utc>,
}

impl Reaction {
    /// Create a new Reaction
    pub fn new(target: ContentRef, identity: Identity, kind: ReactionKind) -> Self {
        Self {
            target,
            identity,
            kind,
            created_at: Utc::now(),
        }
    }
}
