//! Business listing models

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::Review;
use crate::types::{BusinessId, ReviewId};

/// Categories a business can be listed under
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Retail,
    FoodAndBeverage,
    Services,
    Healthcare,
    Technology,
    Finance,
    Education,
    Entertainment,
    Transportation,
    Other,
}

impl Category {
    /// All categories, in the order the UI lists them
    pub const ALL: [Category; 10] = [
        Category::Retail,
        Category::FoodAndBeverage,
        Category::Services,
        Category::Healthcare,
        Category::Technology,
        Category::Finance,
        Category::Education,
        Category::Entertainment,
        Category::Transportation,
        Category::Other,
    ];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Retail => "Retail",
            Category::FoodAndBeverage => "Food & Beverage",
            Category::Services => "Services",
            Category::Healthcare => "Healthcare",
            Category::Technology => "Technology",
            Category::Finance => "Finance",
            Category::Education => "Education",
            Category::Entertainment => "Entertainment",
            Category::Transportation => "Transportation",
            Category::Other => "Other",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .find(|c| c.to_string().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| format!("Unknown category: {}", s))
    }
}

/// A business listed on the platform
///
/// Owns its reviews exclusively; `rating` is derived from them and must be
/// recomputed after every review mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Business {
    pub id: BusinessId,
    pub name: String,
    pub category: Category,
    pub location: String,
    pub phone: String,
    pub email: String,
    pub website: Option<String>,
    pub description: String,
    pub created_at: NaiveDate,
    /// Mean of the owned reviews' ratings, 0 when there are none
    pub rating: Decimal,
    /// Insertion order
    pub reviews: Vec<Review>,
}

impl Business {
    /// Restore the rating invariant: mean of all review ratings, or 0 when
    /// the review list is empty (never NaN).
    pub fn recompute_rating(&mut self) {
        self.rating = if self.reviews.is_empty() {
            Decimal::ZERO
        } else {
            let total: Decimal = self
                .reviews
                .iter()
                .map(|r| Decimal::from(r.rating))
                .sum();
            total / Decimal::from(self.reviews.len() as u64)
        };
    }

    pub fn review(&self, review_id: ReviewId) -> Option<&Review> {
        self.reviews.iter().find(|r| r.id == review_id)
    }
}

/// Input for listing a new business, pre-validated by the submitting screen
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBusiness {
    pub name: String,
    pub category: Category,
    pub location: String,
    pub phone: String,
    pub email: String,
    pub website: Option<String>,
    pub description: String,
}

/// Partial update for a business; `None` fields are left untouched.
///
/// Derived state (`rating`, `reviews`) and `created_at` cannot be patched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BusinessPatch {
    pub name: Option<String>,
    pub category: Option<Category>,
    pub location: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub description: Option<String>,
}

impl BusinessPatch {
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn business_with_ratings(ratings: &[u8]) -> Business {
        let reviews = ratings
            .iter()
            .enumerate()
            .map(|(i, &rating)| Review {
                id: i as u64 + 1,
                rating,
                title: format!("Review {}", i + 1),
                comment: "A comment long enough to pass validation".to_string(),
                date: NaiveDate::from_ymd_opt(2026, 1, 18).unwrap(),
                author: "You".to_string(),
            })
            .collect();
        let mut business = Business {
            id: 1,
            name: "Test Business".to_string(),
            category: Category::Retail,
            location: "Downtown, NYC".to_string(),
            phone: "(555) 123-4567".to_string(),
            email: "test@example.com".to_string(),
            website: None,
            description: "A business for exercising the rating logic".to_string(),
            created_at: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
            rating: Decimal::ZERO,
            reviews,
        };
        business.recompute_rating();
        business
    }

    #[test]
    fn test_rating_mean_of_reviews() {
        let business = business_with_ratings(&[5, 3]);
        assert_eq!(business.rating, Decimal::from(4));
    }

    #[test]
    fn test_rating_zero_when_no_reviews() {
        let business = business_with_ratings(&[]);
        assert_eq!(business.rating, Decimal::ZERO);
    }

    #[test]
    fn test_rating_fractional_mean() {
        let business = business_with_ratings(&[3, 4]);
        assert_eq!(business.rating, Decimal::new(35, 1));
    }

    #[test]
    fn test_category_display_roundtrip() {
        for category in Category::ALL {
            let parsed: Category = category.to_string().parse().unwrap();
            assert_eq!(parsed, category);
        }
    }

    #[test]
    fn test_category_parse_case_insensitive() {
        assert_eq!(
            "food & beverage".parse::<Category>().unwrap(),
            Category::FoodAndBeverage
        );
    }

    #[test]
    fn test_category_parse_unknown() {
        assert!("Plumbing".parse::<Category>().is_err());
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// The recomputed rating always lands inside the star scale
            #[test]
            fn prop_rating_stays_within_star_bounds(
                ratings in prop::collection::vec(1u8..=5, 1..50)
            ) {
                let business = business_with_ratings(&ratings);
                prop_assert!(business.rating >= Decimal::from(1));
                prop_assert!(business.rating <= Decimal::from(5));
            }
        }
    }
}
