//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod auth;
pub mod comment;
pub mod context;
pub mod error;
pub mod event;
pub mod identity;
pub mod reaction;
pub mod rsvp;
pub mod session;
pub mod view;

// Re-export all services for convenience
pub use auth::AuthService;
pub use comment::CommentService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use event::EventService;
pub use identity::IdentityService;
pub use reaction::ReactionService;
pub use rsvp::RsvpService;
pub use session::SessionService;
pub use view::{ViewOutcome, ViewService};
