//! Repository traits (ports)

mod repositories;

pub use repositories::{
    CommentRepository, EventRepository, ReactionOutcome, ReactionRepository, RepoResult,
    RsvpRepository, SessionRepository, UserRepository, ViewRepository,
};
