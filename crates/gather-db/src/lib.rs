//! # gather-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for all repository traits
//! defined in `gather-core`. It handles:
//!
//! - Connection pool management
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Repository implementations, including the transactional read-modify-write
//!   sequences (reaction apply, RSVP capacity check, view counting, session
//!   supersession) that must not be stitched together by callers
//!
//! ## Usage
//!
//! ```rust,ignore
//! use gather_db::pool::DatabaseConfig;
//! use gather_db::repositories::PgSessionRepository;
//! use gather_core::traits::SessionRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = DatabaseConfig::from_env().connect().await?;
//!     let session_repo = PgSessionRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool_from_env, DatabaseConfig, PgPool};
pub use repositories::{
    PgCommentRepository, PgEventRepository, PgReactionRepository, PgRsvpRepository,
    PgSessionRepository, PgUserRepository, PgViewRepository,
};
