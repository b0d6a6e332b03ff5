//! Donation domain models.

use serde::{Deserialize, Serialize};

/// A confirmed eyewear donation.
///
/// Created once on confirmation and never deleted; the only mutation after
/// creation is toggling `verified`. The persisted history is an ordered
/// sequence of these, newest first.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DonationRecord {
    pub id: String,
    pub description: String,
    /// AI-assigned credit award (10–100 per the evaluation contract).
    pub credits: i32,
    pub verification_checklist: Vec<String>,
    pub verified: bool,
    /// Formatted confirmation timestamp (zh-TW style).
    pub date: String,
}
