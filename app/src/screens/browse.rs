//! Browse screen: search, category filter and sorting over the collection
//!
//! The search term arrives as a one-shot navigation parameter from the
//! dashboard. A term that is digits-only searches the phone field alone;
//! anything else matches name, category, location or phone,
//! case-insensitively.

use shared::{Business, Category};

use crate::router::Params;

/// Category filter; `All` matches every business
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    HighestRating,
    MostReviews,
    Newest,
}

#[derive(Debug, Clone, Default)]
pub struct BrowseQuery {
    pub search: Option<String>,
    pub category: CategoryFilter,
    pub sort: SortOrder,
}

impl BrowseQuery {
    /// Pick up the one-shot search term from the parameter bag
    pub fn from_params(params: &Params) -> Self {
        let search = params
            .get_str("search")
            .filter(|term| !term.is_empty())
            .map(str::to_string);
        Self {
            search,
            ..Self::default()
        }
    }
}

/// Whether a business matches the search term
pub fn matches_search(business: &Business, term: &str) -> bool {
    let numeric_only = !term.is_empty() && term.chars().all(|c| c.is_ascii_digit());
    if numeric_only {
        // Phone-only search for numeric terms
        return business.phone.contains(term);
    }
    let term = term.to_lowercase();
    business.name.to_lowercase().contains(&term)
        || business.category.to_string().to_lowercase().contains(&term)
        || business.location.to_lowercase().contains(&term)
        || business.phone.contains(&term)
}

/// Apply search, category filter and sort; returns references in the
/// requested order
pub fn filter_and_sort<'a>(businesses: &'a [Business], query: &BrowseQuery) -> Vec<&'a Business> {
    let mut results: Vec<&Business> = businesses
        .iter()
        .filter(|b| match query.category {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => b.category == category,
        })
        .filter(|b| match &query.search {
            Some(term) => matches_search(b, term),
            None => true,
        })
        .collect();

    match query.sort {
        SortOrder::HighestRating => results.sort_by(|a, b| b.rating.cmp(&a.rating)),
        SortOrder::MostReviews => results.sort_by(|a, b| b.reviews.len().cmp(&a.reviews.len())),
        SortOrder::Newest => results.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
    }
    results
}

pub fn render(businesses: &[Business], query: &BrowseQuery) -> String {
    let results = filter_and_sort(businesses, query);
    let mut out = String::new();
    out.push_str("=== Browse Businesses ===\n");
    if let Some(term) = &query.search {
        out.push_str(&format!("Search: \"{}\"\n", term));
    }
    out.push_str(&format!(
        "Found {} business{}\n",
        results.len(),
        if results.len() == 1 { "" } else { "es" }
    ));
    if results.is_empty() {
        out.push_str("No businesses found. Can't find what you're looking for? Create a new business!\n");
    }
    for business in results {
        out.push_str(&format!(
            "  [{}] {} ({}) - {} - {} ({} reviews)\n",
            business.id,
            business.name,
            business.category,
            business.location,
            business.rating.round_dp(1),
            business.reviews.len(),
        ));
    }
    out.push_str("  [c] Category filter  [s] Sort  [v <id>] View details  [n] Create business  [b] Back");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use crate::store::AggregateStore;
    use shared::{NewBusiness, NewReview};

    fn seed_store() -> AggregateStore {
        let mut store = AggregateStore::new();
        let coffee = store.create_business_dated(
            NewBusiness {
                name: "Quick Coffee Shop".to_string(),
                category: Category::FoodAndBeverage,
                location: "Downtown, NYC".to_string(),
                phone: "(555) 123-4567".to_string(),
                email: "hello@quickcoffee.com".to_string(),
                website: None,
                description: "A cozy coffee shop in the heart of downtown".to_string(),
            },
            NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
        );
        let tech = store.create_business_dated(
            NewBusiness {
                name: "Tech Solutions Inc".to_string(),
                category: Category::Technology,
                location: "Silicon Valley, CA".to_string(),
                phone: "(555) 987-6543".to_string(),
                email: "support@techsolutions.com".to_string(),
                website: None,
                description: "Leading software development company".to_string(),
            },
            NaiveDate::from_ymd_opt(2026, 1, 10).unwrap(),
        );
        store
            .add_review(
                coffee,
                NewReview {
                    rating: 4,
                    title: "Great location".to_string(),
                    comment: "Convenient spot downtown".to_string(),
                },
            )
            .unwrap();
        store
            .add_review(
                tech,
                NewReview {
                    rating: 5,
                    title: "Professional".to_string(),
                    comment: "Delivered on time as promised".to_string(),
                },
            )
            .unwrap();
        store
    }

    #[test]
    fn test_numeric_term_searches_phone_only() {
        let store = seed_store();
        // "123" appears in the coffee shop's phone; "NYC" would match its
        // location but a numeric term must ignore everything except phone
        let results: Vec<_> = store
            .businesses()
            .iter()
            .filter(|b| matches_search(b, "123"))
            .collect();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Quick Coffee Shop");
    }

    #[test]
    fn test_text_search_is_case_insensitive() {
        let store = seed_store();
        let query = BrowseQuery {
            search: Some("tech".to_string()),
            ..BrowseQuery::default()
        };
        let results = filter_and_sort(store.businesses(), &query);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Tech Solutions Inc");
    }

    #[test]
    fn test_text_search_matches_location() {
        let store = seed_store();
        let query = BrowseQuery {
            search: Some("downtown".to_string()),
            ..BrowseQuery::default()
        };
        let results = filter_and_sort(store.businesses(), &query);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Quick Coffee Shop");
    }

    #[test]
    fn test_category_filter() {
        let store = seed_store();
        let query = BrowseQuery {
            category: CategoryFilter::Only(Category::Technology),
            ..BrowseQuery::default()
        };
        let results = filter_and_sort(store.businesses(), &query);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].category, Category::Technology);
    }

    #[test]
    fn test_sort_by_rating_descending() {
        let store = seed_store();
        let query = BrowseQuery::default();
        let results = filter_and_sort(store.businesses(), &query);
        assert_eq!(results[0].name, "Tech Solutions Inc"); // 5.0
        assert_eq!(results[1].name, "Quick Coffee Shop"); // 4.0
    }

    #[test]
    fn test_sort_newest_first() {
        let store = seed_store();
        let query = BrowseQuery {
            sort: SortOrder::Newest,
            ..BrowseQuery::default()
        };
        let results = filter_and_sort(store.businesses(), &query);
        assert_eq!(results[0].name, "Quick Coffee Shop"); // 1/15
        assert_eq!(results[1].name, "Tech Solutions Inc"); // 1/10
    }

    #[test]
    fn test_query_from_params_ignores_empty_term() {
        let params = Params::with("search", "");
        assert!(BrowseQuery::from_params(&params).search.is_none());

        let params = Params::with("search", "coffee");
        assert_eq!(
            BrowseQuery::from_params(&params).search.as_deref(),
            Some("coffee")
        );
    }
}
