//! Integration test utilities
//!
//! This crate provides in-memory repository fakes and fixtures for driving
//! the service layer end to end without a database.

pub mod fakes;
pub mod fixtures;

pub use fakes::*;
pub use fixtures::*;
