//! Profile screen: the signed-in user's businesses, reviews and settings
//!
//! Owns the edit and delete flows. Deletes go through a [`Confirmation`]
//! collaborator first and report whether the user declined. The profile
//! picture is read from disk and held in memory as base64; nothing persists.

use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rust_decimal::Decimal;
use shared::validation::{validate_comment, validate_description, validate_rating};
use shared::{
    format_display_date, BusinessId, BusinessPatch, ProfilePicture, Review, ReviewId, ReviewPatch,
    REVIEW_AUTHOR_SELF,
};

use crate::error::AppResult;
use crate::screens::{Confirmation, FormErrors};
use crate::store::AggregateStore;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProfileTab {
    #[default]
    MyBusinesses,
    MyReviews,
    Settings,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileStats {
    pub businesses_created: usize,
    pub reviews_written: usize,
    /// Mean rating across the user's own reviews, 0 when there are none
    pub average_review_rating: Decimal,
}

/// The user's own reviews, joined with the business they were left on
pub fn my_reviews(store: &AggregateStore) -> Vec<(BusinessId, &str, &Review)> {
    store
        .businesses()
        .iter()
        .flat_map(|b| {
            b.reviews
                .iter()
                .filter(|r| r.author == REVIEW_AUTHOR_SELF)
                .map(move |r| (b.id, b.name.as_str(), r))
        })
        .collect()
}

pub fn stats(store: &AggregateStore) -> ProfileStats {
    let mine = my_reviews(store);
    let average_review_rating = if mine.is_empty() {
        Decimal::ZERO
    } else {
        let total: Decimal = mine.iter().map(|(_, _, r)| Decimal::from(r.rating)).sum();
        total / Decimal::from(mine.len() as u64)
    };
    ProfileStats {
        businesses_created: store.businesses().len(),
        reviews_written: mine.len(),
        average_review_rating,
    }
}

/// Edit form for a business owned by the user. Only the fields the profile
/// screen exposes; category and website stay as they are.
#[derive(Debug, Clone, Default)]
pub struct EditBusinessForm {
    pub name: String,
    pub description: String,
    pub location: String,
    pub phone: String,
}

impl EditBusinessForm {
    /// Prefill from the current business state
    pub fn prefill(store: &AggregateStore, id: BusinessId) -> Option<Self> {
        store.business(id).map(|b| Self {
            name: b.name.clone(),
            description: b.description.clone(),
            location: b.location.clone(),
            phone: b.phone.clone(),
        })
    }

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
        errors.check("description", validate_description(&self.description));
        errors.into_result()
    }

    pub fn submit(self, store: &mut AggregateStore, id: BusinessId) -> Result<(), FormErrors> {
        self.validate()?;
        store
            .edit_business(
                id,
                BusinessPatch {
                    name: Some(self.name),
                    description: Some(self.description),
                    location: Some(self.location),
                    phone: Some(self.phone),
                    ..BusinessPatch::default()
                },
            )
            .map_err(|_| {
                let mut errors = FormErrors::new();
                errors.insert("business", "Business not found");
                errors
            })
    }
}

/// Edit form for one of the user's reviews
#[derive(Debug, Clone, Default)]
pub struct EditReviewForm {
    pub rating: u8,
    pub title: String,
    pub comment: String,
}

impl EditReviewForm {
    pub fn prefill(store: &AggregateStore, business_id: BusinessId, review_id: ReviewId) -> Option<Self> {
        let business = store.business(business_id)?;
        let review = business.review(review_id)?;
        Some(Self {
            rating: review.rating,
            title: review.title.clone(),
            comment: review.comment.clone(),
        })
    }

    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::new();
        if self.title.trim().is_empty() {
            errors.insert("title", "Review title is required");
        }
        errors.check("comment", validate_comment(&self.comment));
        errors.check("rating", validate_rating(self.rating));
        errors.into_result()
    }

    pub fn submit(
        self,
        store: &mut AggregateStore,
        business_id: BusinessId,
        review_id: ReviewId,
    ) -> Result<(), FormErrors> {
        self.validate()?;
        store
            .edit_review(
                business_id,
                review_id,
                ReviewPatch {
                    rating: Some(self.rating),
                    title: Some(self.title),
                    comment: Some(self.comment),
                },
            )
            .map_err(|_| {
                let mut errors = FormErrors::new();
                errors.insert("review", "Review not found");
                errors
            })
    }
}

/// Delete a business after confirmation. Returns `Ok(false)` when the user
/// declines and nothing is touched.
pub fn delete_business(
    store: &mut AggregateStore,
    confirmation: &mut dyn Confirmation,
    id: BusinessId,
) -> AppResult<bool> {
    if !confirmation.confirm("Are you sure you want to delete this business?") {
        return Ok(false);
    }
    store.delete_business(id)?;
    Ok(true)
}

/// Delete one of the user's reviews after confirmation
pub fn delete_review(
    store: &mut AggregateStore,
    confirmation: &mut dyn Confirmation,
    business_id: BusinessId,
    review_id: ReviewId,
) -> AppResult<bool> {
    if !confirmation.confirm("Are you sure you want to delete this review?") {
        return Ok(false);
    }
    store.delete_review(business_id, review_id)?;
    Ok(true)
}

/// Read an image file and store it on the profile as base64
pub fn upload_picture(store: &mut AggregateStore, path: &Path) -> AppResult<()> {
    let bytes = std::fs::read(path)?;
    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned());
    store.set_profile_picture(ProfilePicture::new(STANDARD.encode(bytes), filename));
    Ok(())
}

/// Remove the profile picture after confirmation; returns false on decline
pub fn delete_picture(store: &mut AggregateStore, confirmation: &mut dyn Confirmation) -> bool {
    if store.profile().picture.is_none() {
        return false;
    }
    if !confirmation.confirm("Remove your profile picture?") {
        return false;
    }
    store.delete_profile_picture();
    true
}

pub fn render(store: &AggregateStore, tab: ProfileTab) -> String {
    let stats = stats(store);
    let mut out = String::new();
    out.push_str("=== My Profile ===\n");
    out.push_str(&format!("Email: {}\n", store.profile().email));
    match &store.profile().picture {
        Some(picture) => out.push_str(&format!(
            "Picture: {}\n",
            picture.original_filename.as_deref().unwrap_or("(uploaded)"),
        )),
        None => out.push_str("Picture: none\n"),
    }
    out.push_str(&format!(
        "{} businesses, {} reviews written, {} avg review rating\n",
        stats.businesses_created,
        stats.reviews_written,
        stats.average_review_rating.round_dp(1),
    ));
    match tab {
        ProfileTab::MyBusinesses => {
            out.push_str("\nMy Businesses:\n");
            if store.businesses().is_empty() {
                out.push_str("  You haven't created any businesses yet.\n");
            }
            for business in store.businesses() {
                out.push_str(&format!(
                    "  [{}] {} ({}) - {} ({} reviews)\n",
                    business.id,
                    business.name,
                    business.category,
                    business.rating.round_dp(1),
                    business.reviews.len(),
                ));
            }
            out.push_str("  [e <id>] Edit  [d <id>] Delete  [n] Create business");
        }
        ProfileTab::MyReviews => {
            out.push_str("\nMy Reviews:\n");
            let mine = my_reviews(store);
            if mine.is_empty() {
                out.push_str("  You haven't written any reviews yet.\n");
            }
            for (_, business_name, review) in mine {
                out.push_str(&format!(
                    "  [{}] {} ({}/5) for {} on {}\n",
                    review.id,
                    review.title,
                    review.rating,
                    business_name,
                    format_display_date(review.date),
                ));
            }
            out.push_str("  [e <id>] Edit  [d <id>] Delete  [w] Write a review");
        }
        ProfileTab::Settings => {
            out.push_str("\nSettings:\n");
            out.push_str("  [u <path>] Upload profile picture\n");
            out.push_str("  [x] Remove profile picture\n");
            out.push_str("  [o] Sign out");
        }
    }
    out
}
