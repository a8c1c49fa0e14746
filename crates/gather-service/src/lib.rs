//! # gather-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use services::{
    AuthService, CommentService, EventService, IdentityService, ReactionService, RsvpService,
    ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult, SessionService,
    ViewService,
};
