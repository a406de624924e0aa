//! Smooth Business, a local business directory with reviews
//!
//! Everything is client-local: state lives in an in-memory [`store::AggregateStore`],
//! screen selection in a [`router::Router`], and all "network" operations are
//! simulations that resolve instantly or after a fixed delay.

pub mod config;
pub mod error;
pub mod router;
pub mod screens;
pub mod seed;
pub mod store;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use router::{Params, Router, View};
pub use store::AggregateStore;
