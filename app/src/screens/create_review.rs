//! Standalone write-a-review screen
//!
//! Unlike the inline form on the details screen, this one carries its own
//! business selector and redirects to the reviews list after the configured
//! delay on success.

use std::time::{Duration, Instant};

use shared::validation::{validate_comment, validate_rating};
use shared::{BusinessId, NewReview, ReviewId};

use crate::router::{Params, Router, View};
use crate::screens::FormErrors;
use crate::store::AggregateStore;

pub const SUCCESS_MESSAGE: &str = "Review submitted successfully! Redirecting...";

#[derive(Debug, Clone)]
pub struct CreateReviewForm {
    /// Falls back to the first business in the store when unset
    pub business_id: Option<BusinessId>,
    pub rating: u8,
    pub title: String,
    pub comment: String,
}

impl Default for CreateReviewForm {
    fn default() -> Self {
        Self {
            business_id: None,
            rating: 5,
            title: String::new(),
            comment: String::new(),
        }
    }
}

impl CreateReviewForm {
    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::new();
        if self.title.trim().is_empty() {
            errors.insert("title", "Review title is required");
        }
        errors.check("comment", validate_comment(&self.comment));
        errors.check("rating", validate_rating(self.rating));
        errors.into_result()
    }

    /// Submit the review and schedule the redirect to the reviews list
    pub fn submit(
        self,
        store: &mut AggregateStore,
        router: &mut Router,
        redirect_delay: Duration,
        now: Instant,
    ) -> Result<ReviewId, FormErrors> {
        self.validate()?;
        let business_id = self
            .business_id
            .or_else(|| store.businesses().first().map(|b| b.id));
        let Some(business_id) = business_id else {
            let mut errors = FormErrors::new();
            errors.insert("business_id", "Please select a business");
            return Err(errors);
        };
        let review_id = store
            .add_review(
                business_id,
                NewReview {
                    rating: self.rating,
                    title: self.title,
                    comment: self.comment,
                },
            )
            .map_err(|_| {
                let mut errors = FormErrors::new();
                errors.insert("business_id", "Business not found");
                errors
            })?;
        router.schedule(View::Reviews, Params::new(), redirect_delay, now);
        Ok(review_id)
    }
}

pub fn render(store: &AggregateStore) -> String {
    let mut out = String::new();
    out.push_str("=== Write a Review ===\n");
    out.push_str("Share your experience with the community.\n");
    out.push_str("Select a business:\n");
    for business in store.businesses() {
        out.push_str(&format!(
            "  [{}] {} ({})\n",
            business.id, business.name, business.category,
        ));
    }
    out.push_str("  [1] Submit review  [2] Cancel (back to reviews)");
    out
}
