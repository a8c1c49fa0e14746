//! # gather-core
//!
//! Domain layer containing entities, value objects, repository traits, and domain errors.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    Comment, Event, NewComment, NewEvent, NewUser, Reaction, Rsvp, Session, User, UserStatus,
};
pub use error::DomainError;
pub use traits::{
    CommentRepository, EventRepository, ReactionOutcome, ReactionRepository, RepoResult,
    RsvpRepository, SessionRepository, UserRepository, ViewRepository,
};
pub use value_objects::{ContentRef, EmailAddress, Identity, ReactionKind, RsvpActor};
