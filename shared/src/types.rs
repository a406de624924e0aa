//! Common types used across the platform

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Identifier for a business. Allocated by the store from a monotonic
/// counter, never reused within a session.
pub type BusinessId = u64;

/// Identifier for a review. Shares the store-wide counter with businesses,
/// so ids are unique across both entity kinds.
pub type ReviewId = u64;

/// An uploaded profile picture held entirely in memory.
///
/// The payload is the base64 encoding of the original file bytes; nothing is
/// written to disk and the picture does not survive a restart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfilePicture {
    /// Base64-encoded image bytes
    pub data: String,
    /// Name of the file the picture was loaded from
    pub original_filename: Option<String>,
}

impl ProfilePicture {
    pub fn new(data: String, original_filename: Option<String>) -> Self {
        Self {
            data,
            original_filename,
        }
    }
}

/// Format a date the way the UI displays it (`1/15/2026`, no zero padding).
pub fn format_display_date(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.month(), date.day(), date.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_date_no_padding() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        assert_eq!(format_display_date(date), "1/5/2026");
    }

    #[test]
    fn test_display_date_two_digit_parts() {
        let date = NaiveDate::from_ymd_opt(2026, 12, 31).unwrap();
        assert_eq!(format_display_date(date), "12/31/2026");
    }
}
