//! Shared types and models for the Smooth Business platform
//!
//! This crate contains the domain model (businesses, reviews, user profile)
//! and the boundary validation helpers used by the application crate.

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
