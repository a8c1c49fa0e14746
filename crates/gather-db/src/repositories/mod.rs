//! PostgreSQL repository implementations

mod comment;
mod error;
mod event;
mod reaction;
mod rsvp;
mod session;
mod user;
mod view;

pub use comment::PgCommentRepository;
pub use event::PgEventRepository;
pub use reaction::PgReactionRepository;
pub use rsvp::PgRsvpRepository;
pub use session::PgSessionRepository;
pub use user::PgUserRepository;
pub use view::PgViewRepository;
