//! Value objects - immutable domain values with no identity of their own

mod email;
mod identity;

pub use email::{EmailAddress, EmailParseError};
pub use identity::{ContentRef, Identity, ReactionKind, RsvpActor};
