//! Dashboard screen: landing page after sign-in
//!
//! Shows the first three businesses as featured cards, platform totals, and
//! a search box that hands its term to the browse screen via the navigation
//! parameter bag.

use rust_decimal::Decimal;
use shared::Business;

use crate::router::{Params, Router, View};
use crate::store::AggregateStore;

/// Number of businesses shown as featured cards
const FEATURED_COUNT: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_businesses: usize,
    pub total_reviews: usize,
    /// Mean of the business ratings. Divides by 1 when the collection is
    /// empty so an empty platform shows 0.0 rather than erroring.
    pub average_rating: Decimal,
}

pub fn stats(businesses: &[Business]) -> DashboardStats {
    let total_reviews = businesses.iter().map(|b| b.reviews.len()).sum();
    let rating_sum: Decimal = businesses.iter().map(|b| b.rating).sum();
    let divisor = Decimal::from(businesses.len().max(1) as u64);
    DashboardStats {
        total_businesses: businesses.len(),
        total_reviews,
        average_rating: rating_sum / divisor,
    }
}

pub fn featured(businesses: &[Business]) -> &[Business] {
    &businesses[..businesses.len().min(FEATURED_COUNT)]
}

/// Hand the search term to the browse screen
pub fn search(router: &mut Router, term: &str) {
    router.navigate(View::Browse, Params::with("search", term));
}

pub fn render(store: &AggregateStore) -> String {
    let businesses = store.businesses();
    let stats = stats(businesses);
    let mut out = String::new();
    out.push_str("=== Smooth Business ===\n");
    out.push_str(&format!("Signed in as {}\n", store.profile().email));
    out.push_str("\nFeatured Businesses:\n");
    if businesses.is_empty() {
        out.push_str("  No businesses yet. Be the first!\n");
    }
    for business in featured(businesses) {
        out.push_str(&format!(
            "  [{}] {} ({}) - {} ({} reviews)\n",
            business.id,
            business.name,
            business.category,
            business.rating.round_dp(1),
            business.reviews.len(),
        ));
    }
    out.push_str(&format!(
        "\n{} businesses, {} reviews, {} avg rating\n",
        stats.total_businesses,
        stats.total_reviews,
        stats.average_rating.round_dp(1),
    ));
    out.push_str(
        "  [1] Create business  [2] Browse  [3] Reviews  [4] My profile\n  [5] Search  [6] Sign out",
    );
    out
}

/// Clear the session email and return to sign-in
pub fn logout(store: &mut AggregateStore, router: &mut Router) {
    store.sign_out();
    router.navigate(View::SignIn, Params::new());
}
