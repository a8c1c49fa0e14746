//! Request identity and related tagged variants
//!
//! The resolved actor for a request is either a registered user or an
//! anonymous session. Representing this as an enum (rather than a pair of
//! nullable fields) makes the "both set" and "both null" states
//! unrepresentable.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::EmailAddress;

/// The resolved actor behind a request
///
/// Absence of any identity is modeled as `Option<Identity>::None` by callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "lowercase")]
pub enum Identity {
    /// A registered user, by user id
    User(i64),
    /// An anonymous actor, keyed by its session id
    Guest(Uuid),
}

impl Identity {
    /// The user id, if this identity is a registered user
    #[inline]
    pub fn user_id(&self) -> Option<i64> {
        match self {
            Self::User(id) => Some(*id),
            Self::Guest(_) => None,
        }
    }

    /// The session id, if this identity is an anonymous guest
    #[inline]
    pub fn session_id(&self) -> Option<Uuid> {
        match self {
            Self::User(_) => None,
            Self::Guest(id) => Some(*id),
        }
    }

    /// Check whether this identity is a registered user
    #[inline]
    pub fn is_user(&self) -> bool {
        matches!(self, Self::User(_))
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User(id) => write!(f, "user:{id}"),
            Self::Guest(id) => write!(f, "guest:{id}"),
        }
    }
}

/// Reference to a content item that can carry reactions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "lowercase")]
pub enum ContentRef {
    Event(i64),
    Comment(i64),
}

impl ContentRef {
    /// The referenced row id
    #[inline]
    pub fn id(&self) -> i64 {
        match self {
            Self::Event(id) | Self::Comment(id) => *id,
        }
    }
}

impl fmt::Display for ContentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Event(id) => write!(f, "event:{id}"),
            Self::Comment(id) => write!(f, "comment:{id}"),
        }
    }
}

/// The kind of a reaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactionKind {
    Like,
    Dislike,
}

impl ReactionKind {
    /// Stable string form used in storage and wire payloads
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Like => "like",
            Self::Dislike => "dislike",
        }
    }

    /// The opposite kind
    #[inline]
    pub fn opposite(&self) -> Self {
        match self {
            Self::Like => Self::Dislike,
            Self::Dislike => Self::Like,
        }
    }
}

impl fmt::Display for ReactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error when parsing a reaction kind from a string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown reaction kind: {0}")]
pub struct ReactionKindParseError(pub String);

impl FromStr for ReactionKind {
    type Err = ReactionKindParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "like" => Ok(Self::Like),
            "dislike" => Ok(Self::Dislike),
            other => Err(ReactionKindParseError(other.to_string())),
        }
    }
}

/// The actor behind an RSVP registration
///
/// Holds exactly one of a registered user id or a guest email, so the
/// invalid combinations are unrepresentable at the type level.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum RsvpActor {
    /// A registered user, by user id
    User(i64),
    /// An anonymous guest, keyed by normalized email
    GuestEmail(EmailAddress),
}

impl RsvpActor {
    #[inline]
    pub fn user_id(&self) -> Option<i64> {
        match self {
            Self::User(id) => Some(*id),
            Self::GuestEmail(_) => None,
        }
    }

    #[inline]
    pub fn guest_email(&self) -> Option<&EmailAddress> {
        match self {
            Self::User(_) => None,
            Self::GuestEmail(email) => Some(email),
        }
    }
}

impl fmt::Display for RsvpActor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User(id) => write!(f, "user:{id}"),
            Self::GuestEmail(email) => write!(f, "email:{email}"),
        }
    }
}
