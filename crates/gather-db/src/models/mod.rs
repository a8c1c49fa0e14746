//! Database models - SQLx-compatible structs for PostgreSQL tables

mod comment;
mod event;
mod reaction;
mod rsvp;
mod session;
mod user;

pub use comment::CommentModel;
pub use event::EventModel;
pub use reaction::ReactionModel;
pub use rsvp::RsvpModel;
pub use session::SessionModel;
pub use user::UserModel;
