//! Demo data loaded on startup when seeding is enabled
//!
//! Everything goes through the store API so ratings are computed from the
//! reviews rather than hard-coded, and ids come from the same counter every
//! later creation uses.

use chrono::NaiveDate;
use shared::{Category, NewBusiness, NewReview};

use crate::error::AppResult;
use crate::store::AggregateStore;

fn jan(day: u32) -> NaiveDate {
    // Seed dates are fixed and known valid
    NaiveDate::from_ymd_opt(2026, 1, day).unwrap_or_default()
}

pub fn seed_demo_data(store: &mut AggregateStore) -> AppResult<()> {
    tracing::info!("seeding demo data");

    let coffee = store.create_business_dated(
        NewBusiness {
            name: "Quick Coffee Shop".to_string(),
            category: Category::FoodAndBeverage,
            location: "Downtown, NYC".to_string(),
            phone: "(555) 123-4567".to_string(),
            email: "hello@quickcoffee.com".to_string(),
            website: Some("https://quickcoffee.com".to_string()),
            description: "A cozy coffee shop in the heart of downtown serving artisanal coffee and fresh pastries.".to_string(),
        },
        jan(15),
    );
    let tech = store.create_business_dated(
        NewBusiness {
            name: "Tech Solutions Inc".to_string(),
            category: Category::Technology,
            location: "Silicon Valley, CA".to_string(),
            phone: "(555) 987-6543".to_string(),
            email: "support@techsolutions.com".to_string(),
            website: Some("https://techsolutions.com".to_string()),
            description: "Leading software development company specializing in web and mobile applications.".to_string(),
        },
        jan(10),
    );
    let wellness = store.create_business_dated(
        NewBusiness {
            name: "Wellness Center".to_string(),
            category: Category::Healthcare,
            location: "Midtown, NYC".to_string(),
            phone: "(555) 456-7890".to_string(),
            email: "info@wellnesscenter.com".to_string(),
            website: Some("https://wellnesscenter.com".to_string()),
            description: "Full-service wellness center offering yoga, massage therapy, and nutritional counseling.".to_string(),
        },
        jan(12),
    );

    store.add_review_dated(
        coffee,
        NewReview {
            rating: 5,
            title: "Amazing coffee!".to_string(),
            comment: "Best coffee in town. The baristas are friendly and the atmosphere is perfect for working."
                .to_string(),
        },
        jan(18),
        "John D.".to_string(),
    )?;
    store.add_review_dated(
        coffee,
        NewReview {
            rating: 4,
            title: "Great atmosphere".to_string(),
            comment: "Love the ambiance here. Coffee is good, though a bit pricey.".to_string(),
        },
        jan(17),
        "Sarah M.".to_string(),
    )?;
    store.add_review_dated(
        tech,
        NewReview {
            rating: 5,
            title: "Excellent service".to_string(),
            comment: "They built our company website and it exceeded expectations. Highly professional team."
                .to_string(),
        },
        jan(16),
        "Mike L.".to_string(),
    )?;
    store.add_review_dated(
        wellness,
        NewReview {
            rating: 5,
            title: "Life changing!".to_string(),
            comment: "The yoga classes here have transformed my health. Instructors are top-notch.".to_string(),
        },
        jan(18),
        "Emma K.".to_string(),
    )?;
    store.add_review_dated(
        wellness,
        NewReview {
            rating: 4,
            title: "Very relaxing".to_string(),
            comment: "Great massage therapy services. Booking was easy and staff were welcoming.".to_string(),
        },
        jan(15),
        "Alex P.".to_string(),
    )?;

    tracing::debug!(businesses = store.businesses().len(), "demo data ready");
    Ok(())
}
