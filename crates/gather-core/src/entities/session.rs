//! Session entity - tracks an authenticated user or an anonymous guest
//!
//! The validity flag is monotonic: once a session is invalidated it never
//! becomes valid again. A session with no owning user is a guest session.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::value_objects::Identity;

/// Session entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub id: Uuid,
    /// Owning user, or `None` for a guest session
    pub user_id: Option<i64>,
    pub is_valid: bool,
    pub created_at: DateTime<Utc>,
}

impl Session {
    /// Create a new guest session value (id assigned by storage in practice)
    pub fn guest(id: Uuid) -> Self {
        Self {
            id,
            user_id: None,
            is_valid: true,
            created_at: Utc::now(),
        }
    }

    /// Create a new authenticated session value
    pub fn for_user(id: Uuid, user_id: i64) -> Self {
        Self {
            id,
            user_id: Some(user_id),
            is_valid: true,
            created_at: Utc::now(),
        }
    }

    /// Check if this session belongs to a registered user
    #[inline]
    pub fn is_guest(&self) -> bool {
        self.user_id.is_none()
    }

    /// The identity this session resolves to
    ///
    /// Only meaningful for valid sessions; callers check `is_valid` first.
    pub fn identity(&self) -> Identity {
        match self.user_id {
            Some(user_id) => Identity::User(user_id),
            None => Identity::Guest(self.id),
        }
    }
}
