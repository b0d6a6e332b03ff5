use crate::donations::DonationRecord;
use crate::errors::Result;

/// Trait for donation history operations.
///
/// The history lives under one store key as a single JSON array, newest
/// first; every mutation is a read-modify-write of the whole sequence.
pub trait DonationRepositoryTrait: Send + Sync {
    /// Load the persisted history, newest first.
    ///
    /// A missing, unreadable, or unparsable stored value yields an empty
    /// history; corruption is logged but never surfaced.
    fn load(&self) -> Vec<DonationRecord>;

    /// Prepend a record to the history and persist the full sequence.
    fn append(&self, record: DonationRecord) -> Result<()>;

    /// Flip one record's `verified` flag and persist the full sequence.
    fn toggle_verified(&self, id: &str) -> Result<DonationRecord>;

    /// Sum of `credits` across the persisted history.
    fn total_credits(&self) -> i32;
}
