//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.
//!
//! Multi-step read-modify-write sequences (reaction apply, RSVP capacity
//! check, view insert + counter bump, login superseding a guest session)
//! are single trait methods, so the transaction boundary lives with the
//! storage handle rather than being stitched together by callers.

use async_trait::async_trait;
use uuid::Uuid;

use crate::entities::{Comment, Event, NewComment, NewEvent, NewUser, Reaction, Rsvp, Session, User};
use crate::error::DomainError;
use crate::value_objects::{ContentRef, Identity, ReactionKind, RsvpActor};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Session Repository
// ============================================================================

#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Find a session by id regardless of validity
    async fn find(&self, id: Uuid) -> RepoResult<Option<Session>>;

    /// Find a session by id, only if its validity flag is still true
    async fn find_valid(&self, id: Uuid) -> RepoResult<Option<Session>>;

    /// Create a new guest session (no owning user, valid)
    async fn create_guest(&self) -> RepoResult<Session>;

    /// Create an authenticated session for a user, invalidating the
    /// superseded guest session (if any) in the same transaction
    async fn start_user_session(
        &self,
        user_id: i64,
        supersedes: Option<Uuid>,
    ) -> RepoResult<Session>;

    /// Flip the validity flag from true to false
    ///
    /// Uses a conditional update so concurrent double-invalidation is safe:
    /// exactly one caller wins, the other observes `SessionAlreadyInvalid`.
    ///
    /// # Errors
    /// `SessionNotFound` if no such session, `SessionAlreadyInvalid` if the
    /// flag was already false.
    async fn invalidate(&self, id: Uuid) -> RepoResult<()>;
}

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Check if email is already taken
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Create a new user
    ///
    /// # Errors
    /// `EmailAlreadyExists` on a duplicate email.
    async fn create(&self, user: &NewUser, password_hash: &str) -> RepoResult<User>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: i64) -> RepoResult<Option<String>>;
}

// ============================================================================
// Event Repository
// ============================================================================

#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Find event by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Event>>;

    /// Create a new event
    async fn create(&self, event: &NewEvent) -> RepoResult<Event>;
}

// ============================================================================
// Comment Repository
// ============================================================================

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Find comment by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Comment>>;

    /// Create a new comment
    ///
    /// # Errors
    /// `EventNotFound` if the parent event does not exist.
    async fn create(&self, comment: &NewComment) -> RepoResult<Comment>;
}

// ============================================================================
// Reaction Repository
// ============================================================================

/// What a reaction application did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactionOutcome {
    /// First reaction from this identity on this item
    Added,
    /// Same kind already present; nothing changed
    Unchanged,
    /// Existing reaction of the other kind was replaced
    Switched,
}

#[async_trait]
pub trait ReactionRepository: Send + Sync {
    /// Find the reaction of an identity on a content item
    async fn find(&self, target: ContentRef, identity: Identity) -> RepoResult<Option<Reaction>>;

    /// Apply a reaction atomically
    ///
    /// Runs as one transaction with the content item row locked: inserts a
    /// new record and increments the matching counter, no-ops on a repeat
    /// of the same kind, or deletes + reinserts and adjusts both counters
    /// on a kind switch. Counters never go negative and are never
    /// double-counted.
    ///
    /// # Errors
    /// `ContentNotFound` if the item does not exist; `ReactionConflict` if a
    /// concurrent insert hits the uniqueness constraint.
    async fn apply(
        &self,
        target: ContentRef,
        identity: Identity,
        kind: ReactionKind,
    ) -> RepoResult<ReactionOutcome>;
}

// ============================================================================
// RSVP Repository
// ============================================================================

#[async_trait]
pub trait RsvpRepository: Send + Sync {
    /// Register an actor for an event atomically
    ///
    /// The event row is read under a write lock for the duration of the
    /// decision, so the capacity check cannot race with a concurrent
    /// registration for the last slot.
    ///
    /// # Errors
    /// `EventNotFound` if the event does not exist; `AlreadyRegistered` if
    /// an identity-matching record exists; `EventFull` if the configured
    /// capacity is reached.
    async fn register(&self, event_id: i64, actor: &RsvpActor) -> RepoResult<Rsvp>;

    /// Count registrations for an event
    async fn count_for_event(&self, event_id: i64) -> RepoResult<i64>;
}

// ============================================================================
// View Repository
// ============================================================================

#[async_trait]
pub trait ViewRepository: Send + Sync {
    /// Record a view atomically, once per (event, identity)
    ///
    /// Inserts a view record and increments the event's `views` counter in
    /// one transaction. A repeat view from the same identity leaves the
    /// counter unchanged. Returns the event with its current counter.
    ///
    /// # Errors
    /// `EventNotFound` if the event does not exist.
    async fn record(&self, event_id: i64, identity: Identity) -> RepoResult<Event>;
}
