//! Business-details screen
//!
//! Reads the selected business id from the one-shot navigation parameters.
//! An unknown id renders a not-found view instead of erroring. The inline
//! review form adds a review in place, without leaving the screen.

use rust_decimal::Decimal;
use shared::validation::{validate_comment, validate_rating};
use shared::{format_display_date, Business, BusinessId, NewReview, ReviewId};

use crate::router::Params;
use crate::screens::FormErrors;
use crate::store::AggregateStore;

/// The business id carried in the navigation parameters, if any
pub fn selected_business(params: &Params) -> Option<BusinessId> {
    params.get_u64("id")
}

/// Inline review form (rating defaults to 5 stars)
#[derive(Debug, Clone)]
pub struct ReviewForm {
    pub rating: u8,
    pub title: String,
    pub comment: String,
}

impl Default for ReviewForm {
    fn default() -> Self {
        Self {
            rating: 5,
            title: String::new(),
            comment: String::new(),
        }
    }
}

impl ReviewForm {
    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::new();
        if self.title.trim().is_empty() {
            errors.insert("title", "Review title is required");
        }
        errors.check("comment", validate_comment(&self.comment));
        errors.check("rating", validate_rating(self.rating));
        errors.into_result()
    }

    /// Add the review to the business shown on this screen. No navigation;
    /// the updated list renders in place.
    pub fn submit(
        self,
        store: &mut AggregateStore,
        business_id: BusinessId,
    ) -> Result<ReviewId, FormErrors> {
        self.validate()?;
        store
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
                errors.insert("business", "Business not found");
                errors
            })
    }
}

/// One row of the per-star rating distribution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistributionRow {
    pub stars: u8,
    pub count: usize,
    /// Share of all reviews at this star level, 0 when there are none
    pub percentage: Decimal,
}

/// Review counts per star level, 5 stars first
pub fn rating_distribution(business: &Business) -> Vec<DistributionRow> {
    let total = business.reviews.len();
    (1..=5u8)
        .rev()
        .map(|stars| {
            let count = business.reviews.iter().filter(|r| r.rating == stars).count();
            let percentage = if total == 0 {
                Decimal::ZERO
            } else {
                Decimal::from(count as u64) * Decimal::from(100) / Decimal::from(total as u64)
            };
            DistributionRow {
                stars,
                count,
                percentage,
            }
        })
        .collect()
}

pub fn render(business: Option<&Business>) -> String {
    let Some(business) = business else {
        return [
            "=== Business not found ===",
            "  [b] Back to Businesses",
        ]
        .join("\n");
    };

    let mut out = String::new();
    out.push_str(&format!("=== {} ({}) ===\n", business.name, business.category));
    out.push_str(&format!("Location: {}\n", business.location));
    out.push_str(&format!("Phone:    {}\n", business.phone));
    out.push_str(&format!("Email:    {}\n", business.email));
    if let Some(website) = &business.website {
        out.push_str(&format!("Website:  {}\n", website));
    }
    out.push_str(&format!("Created:  {}\n", format_display_date(business.created_at)));
    out.push_str(&format!("\nAbout: {}\n", business.description));
    out.push_str(&format!(
        "\nCustomer Reviews: {} based on {} review{}\n",
        business.rating.round_dp(1),
        business.reviews.len(),
        if business.reviews.len() == 1 { "" } else { "s" },
    ));
    for row in rating_distribution(business) {
        out.push_str(&format!(
            "  {} stars: {:>3} ({}%)\n",
            row.stars,
            row.count,
            row.percentage.round_dp(0),
        ));
    }
    if business.reviews.is_empty() {
        out.push_str("\nNo reviews yet. Be the first to review!\n");
    } else {
        out.push_str("\nAll Reviews:\n");
        for review in &business.reviews {
            out.push_str(&format!(
                "  [{}] {} ({}/5) by {} on {}\n      {}\n",
                review.id,
                review.title,
                review.rating,
                review.author,
                format_display_date(review.date),
                review.comment,
            ));
        }
    }
    out.push_str("  [r] Leave a review  [b] Back to Businesses");
    out
}
