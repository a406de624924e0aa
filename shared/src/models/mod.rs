//! Domain models for the Smooth Business platform

mod business;
mod review;
mod user;

pub use business::*;
pub use review::*;
pub use user::*;
