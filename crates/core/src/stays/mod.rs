//! Stays module - lodging catalog, AI travel advice, and traveler reviews.

mod stays_constants;
mod stays_model;
mod stays_service;

// Re-export the public interface
pub use stays_constants::*;
pub use stays_model::{Review, Stay};
pub use stays_service::{StayService, StayServiceTrait};
