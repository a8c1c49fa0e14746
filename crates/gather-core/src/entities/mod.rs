//! Domain entities - core business objects

mod comment;
mod event;
mod reaction;
mod rsvp;
mod session;
mod user;

pub use comment::{Comment, NewComment};
pub use event::{Event, NewEvent};
pub use reaction::Reaction;
pub use rsvp::Rsvp;
pub use session::Session;
pub use user::{NewUser, User, UserStatus};
