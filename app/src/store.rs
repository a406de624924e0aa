//! Aggregate store: single source of truth for the business collection and
//! the current user's transient profile
//!
//! The store owns every [`Business`] (and through it every [`Review`]) plus
//! the profile fields, and enforces the rating invariant: after any review
//! mutation a business's rating equals the mean of its reviews' ratings, or
//! 0 when it has none.
//!
//! Ids come from a store-wide monotonic counter rather than wall-clock time,
//! so two operations in the same tick cannot collide. Lookups by unknown id
//! return [`AppError::NotFound`] and leave the collection untouched; callers
//! decide whether to surface or swallow it.

use chrono::{Local, NaiveDate};
use shared::{
    Business, BusinessId, BusinessPatch, NewBusiness, NewReview, ProfilePicture, ReviewId,
    ReviewPatch, UserProfile, REVIEW_AUTHOR_SELF,
};

use crate::error::{AppError, AppResult};

/// In-memory holder of all businesses and derived state
#[derive(Debug, Default)]
pub struct AggregateStore {
    businesses: Vec<Business>,
    profile: UserProfile,
    next_id: u64,
}

impl AggregateStore {
    pub fn new() -> Self {
        Self {
            businesses: Vec::new(),
            profile: UserProfile::default(),
            next_id: 1,
        }
    }

    fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    // ------------------------------------------------------------------
    // Read-only projections
    // ------------------------------------------------------------------

    /// The full business collection, insertion order
    pub fn businesses(&self) -> &[Business] {
        &self.businesses
    }

    pub fn business(&self, id: BusinessId) -> Option<&Business> {
        self.businesses.iter().find(|b| b.id == id)
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    // ------------------------------------------------------------------
    // Business mutations
    // ------------------------------------------------------------------

    /// Append a new business with rating 0 and no reviews. Input is assumed
    /// pre-validated by the submitting screen; this never fails.
    pub fn create_business(&mut self, input: NewBusiness) -> BusinessId {
        self.create_business_dated(input, Local::now().date_naive())
    }

    /// [`Self::create_business`] with an explicit creation date (seed data,
    /// tests)
    pub fn create_business_dated(&mut self, input: NewBusiness, created_at: NaiveDate) -> BusinessId {
        let id = self.allocate_id();
        tracing::debug!(id, name = %input.name, "creating business");
        self.businesses.push(Business {
            id,
            name: input.name,
            category: input.category,
            location: input.location,
            phone: input.phone,
            email: input.email,
            website: input.website,
            description: input.description,
            created_at,
            rating: rust_decimal::Decimal::ZERO,
            reviews: Vec::new(),
        });
        id
    }

    /// Shallow-merge the provided fields into the matching business. Does
    /// not touch `rating`, `reviews` or `created_at`.
    pub fn edit_business(&mut self, id: BusinessId, patch: BusinessPatch) -> AppResult<()> {
        let business = self.business_mut(id)?;
        tracing::debug!(id, "editing business");
        if let Some(name) = patch.name {
            business.name = name;
        }
        if let Some(category) = patch.category {
            business.category = category;
        }
        if let Some(location) = patch.location {
            business.location = location;
        }
        if let Some(phone) = patch.phone {
            business.phone = phone;
        }
        if let Some(email) = patch.email {
            business.email = email;
        }
        if let Some(website) = patch.website {
            business.website = Some(website);
        }
        if let Some(description) = patch.description {
            business.description = description;
        }
        Ok(())
    }

    /// Remove a business. User confirmation is the caller's concern; the
    /// store performs none.
    pub fn delete_business(&mut self, id: BusinessId) -> AppResult<()> {
        let index = self
            .businesses
            .iter()
            .position(|b| b.id == id)
            .ok_or_else(|| AppError::NotFound("Business".to_string()))?;
        tracing::debug!(id, "deleting business");
        self.businesses.remove(index);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Review mutations
    // ------------------------------------------------------------------

    /// Append a review authored by the current user, dated today, and
    /// recompute the owning business's rating.
    pub fn add_review(&mut self, business_id: BusinessId, input: NewReview) -> AppResult<ReviewId> {
        self.add_review_dated(
            business_id,
            input,
            Local::now().date_naive(),
            REVIEW_AUTHOR_SELF.to_string(),
        )
    }

    /// [`Self::add_review`] with an explicit date and author (seed data,
    /// tests)
    pub fn add_review_dated(
        &mut self,
        business_id: BusinessId,
        input: NewReview,
        date: NaiveDate,
        author: String,
    ) -> AppResult<ReviewId> {
        if let Err(message) = shared::validate_rating(input.rating) {
            return Err(AppError::validation("rating", message));
        }
        // Allocate only once the target is known to exist, so a failed add
        // leaves no gap in the id sequence.
        let index = self
            .businesses
            .iter()
            .position(|b| b.id == business_id)
            .ok_or_else(|| AppError::NotFound("Business".to_string()))?;
        let id = self.allocate_id();
        tracing::debug!(business_id, review_id = id, rating = input.rating, "adding review");
        let business = &mut self.businesses[index];
        business.reviews.push(shared::Review {
            id,
            rating: input.rating,
            title: input.title,
            comment: input.comment,
            date,
            author,
        });
        business.recompute_rating();
        Ok(id)
    }

    /// Shallow-merge the provided fields into the matching review, then
    /// recompute the owning business's rating over all of its reviews.
    pub fn edit_review(
        &mut self,
        business_id: BusinessId,
        review_id: ReviewId,
        patch: ReviewPatch,
    ) -> AppResult<()> {
        let business = self.business_mut(business_id)?;
        let review = business
            .reviews
            .iter_mut()
            .find(|r| r.id == review_id)
            .ok_or_else(|| AppError::NotFound("Review".to_string()))?;
        tracing::debug!(business_id, review_id, "editing review");
        if let Some(rating) = patch.rating {
            if let Err(message) = shared::validate_rating(rating) {
                return Err(AppError::validation("rating", message));
            }
            review.rating = rating;
        }
        if let Some(title) = patch.title {
            review.title = title;
        }
        if let Some(comment) = patch.comment {
            review.comment = comment;
        }
        business.recompute_rating();
        Ok(())
    }

    /// Remove a review and recompute the owning business's rating over the
    /// remainder (exactly 0 when none remain).
    pub fn delete_review(&mut self, business_id: BusinessId, review_id: ReviewId) -> AppResult<()> {
        let business = self.business_mut(business_id)?;
        let index = business
            .reviews
            .iter()
            .position(|r| r.id == review_id)
            .ok_or_else(|| AppError::NotFound("Review".to_string()))?;
        tracing::debug!(business_id, review_id, "deleting review");
        business.reviews.remove(index);
        business.recompute_rating();
        Ok(())
    }

    // ------------------------------------------------------------------
    // Profile mutations
    // ------------------------------------------------------------------

    /// Record the signed-in email. There is no credential store; any
    /// well-formed input succeeds upstream of this call.
    pub fn sign_in(&mut self, email: String) {
        tracing::info!(%email, "user signed in");
        self.profile.email = email;
    }

    pub fn sign_out(&mut self) {
        tracing::info!("user signed out");
        self.profile.email.clear();
    }

    pub fn set_profile_picture(&mut self, picture: ProfilePicture) {
        tracing::debug!(filename = ?picture.original_filename, "profile picture updated");
        self.profile.picture = Some(picture);
    }

    /// Remove the profile picture. Confirmation is the caller's concern.
    pub fn delete_profile_picture(&mut self) {
        tracing::debug!("profile picture deleted");
        self.profile.picture = None;
    }

    fn business_mut(&mut self, id: BusinessId) -> AppResult<&mut Business> {
        self.businesses
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| AppError::NotFound("Business".to_string()))
    }
}
