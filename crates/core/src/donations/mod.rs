//! Donations module - donation records, persisted history, and the
//! four-state donation flow.

mod donations_model;
mod donations_repository;
mod donations_service;
mod donations_traits;

// Re-export the public interface
pub use donations_model::DonationRecord;
pub use donations_repository::DonationRepository;
pub use donations_service::{DonationFlow, DonationFlowState};
pub use donations_traits::DonationRepositoryTrait;
