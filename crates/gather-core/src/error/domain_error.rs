//! Domain errors - error types for the domain layer

use thiserror::Error;
use uuid::Uuid;

use crate::value_objects::ContentRef;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(i64),

    #[error("Event not found: {0}")]
    EventNotFound(i64),

    #[error("Comment not found: {0}")]
    CommentNotFound(i64),

    #[error("Content item not found: {0}")]
    ContentNotFound(ContentRef),

    #[error("Session not found: {0}")]
    SessionNotFound(Uuid),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Invalid reaction kind: {0}")]
    InvalidReactionKind(String),

    #[error("Guest email required for anonymous registration")]
    MissingRsvpIdentity,

    // =========================================================================
    // Authentication / Authorization Errors
    // =========================================================================
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("User account is inactive")]
    UserInactive,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Email already in use")]
    EmailAlreadyExists,

    #[error("Already registered for this event")]
    AlreadyRegistered,

    #[error("Event is full")]
    EventFull,

    #[error("Session is already invalid")]
    SessionAlreadyInvalid,

    #[error("Concurrent reaction update detected")]
    ReactionConflict,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::EventNotFound(_) => "UNKNOWN_EVENT",
            Self::CommentNotFound(_) => "UNKNOWN_COMMENT",
            Self::ContentNotFound(_) => "UNKNOWN_CONTENT",
            Self::SessionNotFound(_) => "UNKNOWN_SESSION",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::InvalidReactionKind(_) => "INVALID_REACTION_KIND",
            Self::MissingRsvpIdentity => "MISSING_RSVP_IDENTITY",

            // Authentication / Authorization
            Self::Unauthorized(_) => "UNAUTHORIZED",
            Self::UserInactive => "USER_INACTIVE",

            // Conflict
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::AlreadyRegistered => "ALREADY_REGISTERED",
            Self::EventFull => "EVENT_FULL",
            Self::SessionAlreadyInvalid => "SESSION_ALREADY_INVALID",
            Self::ReactionConflict => "REACTION_CONFLICT",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::EventNotFound(_)
                | Self::CommentNotFound(_)
                | Self::ContentNotFound(_)
                | Self::SessionNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidEmail
                | Self::InvalidReactionKind(_)
                | Self::MissingRsvpIdentity
        )
    }

    /// Check if this is an authentication error
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized(_))
    }

    /// Check if this is an authorization (permission) error
    pub fn is_forbidden(&self) -> bool {
        matches!(self, Self::UserInactive)
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::EmailAlreadyExists
                | Self::AlreadyRegistered
                | Self::EventFull
                | Self::SessionAlreadyInvalid
                | Self::ReactionConflict
        )
    }
}
