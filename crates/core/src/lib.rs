//! ZenTime Core - Domain entities, services, and workflows.
//!
//! This crate contains the application core of the ZenTime Exchange: the
//! donation flow, the stay catalog with AI advice and reviews, the credit
//! wallet, and the key-value persistence layer. It is UI-agnostic; a
//! frontend drives it through the services wired by [`app_state::AppState`].

pub mod app_state;
pub mod constants;
pub mod donations;
pub mod errors;
pub mod stays;
pub mod store;
pub mod wallet;

// Re-export common types
pub use app_state::AppState;
pub use errors::Error;
pub use errors::Result;
