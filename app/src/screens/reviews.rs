//! Reviews screen: every review on the platform, flattened across businesses
//!
//! Newest reviews first. Filters narrow by business category and by exact
//! star rating.

use shared::{format_display_date, Business, BusinessId, Category, Review};

/// A review joined with the business it belongs to
#[derive(Debug, Clone)]
pub struct ReviewWithBusiness<'a> {
    pub review: &'a Review,
    pub business_id: BusinessId,
    pub business_name: &'a str,
    pub business_category: Category,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReviewFilter {
    pub category: Option<Category>,
    pub rating: Option<u8>,
}

/// Flatten all reviews, newest first, applying the filters
pub fn all_reviews<'a>(
    businesses: &'a [Business],
    filter: &ReviewFilter,
) -> Vec<ReviewWithBusiness<'a>> {
    let mut rows: Vec<ReviewWithBusiness<'a>> = businesses
        .iter()
        .filter(|b| filter.category.map_or(true, |c| b.category == c))
        .flat_map(|b| {
            b.reviews.iter().map(move |review| ReviewWithBusiness {
                review,
                business_id: b.id,
                business_name: &b.name,
                business_category: b.category,
            })
        })
        .filter(|row| filter.rating.map_or(true, |r| row.review.rating == r))
        .collect();
    rows.sort_by(|a, b| b.review.date.cmp(&a.review.date));
    rows
}

pub fn render(businesses: &[Business], filter: &ReviewFilter) -> String {
    let rows = all_reviews(businesses, filter);
    let mut out = String::new();
    out.push_str("=== Customer Reviews ===\n");
    out.push_str(&format!(
        "Showing {} review{}\n",
        rows.len(),
        if rows.len() == 1 { "" } else { "s" }
    ));
    if rows.is_empty() {
        out.push_str("No reviews match the current filters.\n");
    }
    for row in &rows {
        out.push_str(&format!(
            "  [{}] {} ({}/5) for {} ({}) by {} on {}\n      {}\n",
            row.review.id,
            row.review.title,
            row.review.rating,
            row.business_name,
            row.business_category,
            row.review.author,
            format_display_date(row.review.date),
            row.review.comment,
        ));
    }
    out.push_str("  [w] Write a review  [c] Category filter  [r] Rating filter  [b] Back");
    out
}
