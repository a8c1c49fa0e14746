//! Mappers between database models and domain entities

mod comment;
mod event;
mod reaction;
mod rsvp;
mod session;
mod user;

pub use reaction::reaction_from_model;
pub use rsvp::rsvp_from_model;
