//! Create-business screen
//!
//! On success the business is appended to the store and the profile screen
//! is scheduled after the configured redirect delay, giving the user time to
//! read the success message.

use std::time::{Duration, Instant};

use shared::validation::{validate_description, validate_email};
use shared::{BusinessId, Category, NewBusiness};

use crate::router::{Params, Router, View};
use crate::screens::FormErrors;
use crate::store::AggregateStore;

pub const SUCCESS_MESSAGE: &str = "Business created successfully! Redirecting...";

#[derive(Debug, Clone)]
pub struct CreateBusinessForm {
    pub name: String,
    pub category: Category,
    pub location: String,
    pub phone: String,
    pub email: String,
    /// Optional; an empty string means no website
    pub website: String,
    pub description: String,
}

impl Default for CreateBusinessForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            category: Category::Retail,
            location: String::new(),
            phone: String::new(),
            email: String::new(),
            website: String::new(),
            description: String::new(),
        }
    }
}

impl CreateBusinessForm {
    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::new();
        if self.name.trim().is_empty() {
            errors.insert("name", "Business name is required");
        }
        if self.location.trim().is_empty() {
            errors.insert("location", "Location is required");
        }
        if self.phone.trim().is_empty() {
            errors.insert("phone", "Phone number is required");
        }
        if self.email.trim().is_empty() {
            errors.insert("email", "Email is required");
        } else {
            errors.check("email", validate_email(&self.email));
        }
        errors.check("description", validate_description(&self.description));
        errors.into_result()
    }

    fn into_input(self) -> NewBusiness {
        let website = if self.website.trim().is_empty() {
            None
        } else {
            Some(self.website)
        };
        NewBusiness {
            name: self.name,
            category: self.category,
            location: self.location,
            phone: self.phone,
            email: self.email,
            website,
            description: self.description,
        }
    }

    /// Create the business and schedule the profile redirect
    pub fn submit(
        self,
        store: &mut AggregateStore,
        router: &mut Router,
        redirect_delay: Duration,
        now: Instant,
    ) -> Result<BusinessId, FormErrors> {
        self.validate()?;
        let id = store.create_business(self.into_input());
        router.schedule(View::Profile, Params::new(), redirect_delay, now);
        Ok(id)
    }
}

pub fn render() -> String {
    [
        "=== Create New Business ===",
        "Add your business to the Smooth Business platform.",
        "  [1] Fill in the business form",
        "  [2] Cancel (back to dashboard)",
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn valid_form() -> CreateBusinessForm {
        CreateBusinessForm {
            name: "Quick Coffee Shop".to_string(),
            category: Category::FoodAndBeverage,
            location: "Downtown, NYC".to_string(),
            phone: "(555) 123-4567".to_string(),
            email: "hello@quickcoffee.com".to_string(),
            website: String::new(),
            description: "A cozy coffee shop in the heart of downtown".to_string(),
        }
    }

    #[test]
    fn test_all_required_fields() {
        let errors = CreateBusinessForm::default().validate().unwrap_err();
        assert_eq!(errors.get("name"), Some("Business name is required"));
        assert_eq!(errors.get("location"), Some("Location is required"));
        assert_eq!(errors.get("phone"), Some("Phone number is required"));
        assert_eq!(errors.get("email"), Some("Email is required"));
        assert_eq!(errors.get("description"), Some("Description is required"));
    }

    #[test]
    fn test_short_description_rejected() {
        let form = CreateBusinessForm {
            description: "Too short".to_string(),
            ..valid_form()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(
            errors.get("description"),
            Some("Description must be at least 20 characters")
        );
    }

    #[test]
    fn test_empty_website_becomes_none() {
        let mut store = AggregateStore::new();
        let mut router = Router::new();
        let id = valid_form()
            .submit(
                &mut store,
                &mut router,
                Duration::from_secs(2),
                Instant::now(),
            )
            .unwrap();
        assert_eq!(store.business(id).unwrap().website, None);
    }

    #[test]
    fn test_submit_creates_unrated_business_and_schedules_profile() {
        let mut store = AggregateStore::new();
        let mut router = Router::new();
        router.navigate(View::Create, Params::new());
        let start = Instant::now();

        let id = valid_form()
            .submit(&mut store, &mut router, Duration::from_secs(2), start)
            .unwrap();

        let business = store.business(id).unwrap();
        assert_eq!(business.rating, Decimal::ZERO);
        assert!(business.reviews.is_empty());

        // Still on the create screen until the redirect fires
        assert_eq!(router.current(), View::Create);
        assert_eq!(
            router.poll(start + Duration::from_secs(2)),
            Some(View::Profile)
        );
    }

    #[test]
    fn test_invalid_form_leaves_store_untouched() {
        let mut store = AggregateStore::new();
        let mut router = Router::new();
        let result = CreateBusinessForm::default().submit(
            &mut store,
            &mut router,
            Duration::from_secs(2),
            Instant::now(),
        );
        assert!(result.is_err());
        assert!(store.businesses().is_empty());
        assert!(router.next_deadline().is_none());
    }
}
