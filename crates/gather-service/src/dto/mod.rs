//! Data transfer objects for service inputs
//!
//! Request DTOs carry validation rules for the values callers hand to the
//! services. Output shaping stays with the callers.

pub mod requests;

pub use requests::{
    CreateCommentRequest, CreateEventRequest, LoginRequest, RegisterRequest, RsvpRequest,
};
