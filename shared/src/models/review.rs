//! Review models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::ReviewId;

/// Author name recorded on reviews written through the app. There is no real
/// per-user attribution; seed data carries display names instead.
pub const REVIEW_AUTHOR_SELF: &str = "You";

/// A rating plus free-text entry owned by exactly one business
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub id: ReviewId,
    /// Star rating in [1, 5]
    pub rating: u8,
    pub title: String,
    pub comment: String,
    pub date: NaiveDate,
    pub author: String,
}

/// Input for a new review, pre-validated by the submitting screen
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewReview {
    pub rating: u8,
    pub title: String,
    pub comment: String,
}

/// Partial update for a review; `None` fields are left untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReviewPatch {
    pub rating: Option<u8>,
    pub title: Option<String>,
    pub comment: Option<String>,
}
