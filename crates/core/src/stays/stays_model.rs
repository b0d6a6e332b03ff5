//! Stay and review domain models.

use serde::{Deserialize, Serialize};

/// A traveler review attached to a stay.
///
/// Created by feedback submission and immutable thereafter. The tag list
/// is produced by the AI feedback summarizer (3 tags per the contract,
/// not enforced here).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub user_name: String,
    /// Star rating, 1–5. Feedback submission always awards 5.
    pub rating: i32,
    pub comment: String,
    pub date: String,
    pub tags: Vec<String>,
}

/// A lodging listing in the fixed catalog.
///
/// Catalog entries live in memory only and reset with the process; the
/// single mutation is prepending a review.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Stay {
    pub id: String,
    pub host_id: String,
    pub location: String,
    pub description: String,
    pub credit_cost: i32,
    pub image_url: String,
    pub available_dates: Vec<String>,
    /// Newest first.
    pub reviews: Vec<Review>,
}
