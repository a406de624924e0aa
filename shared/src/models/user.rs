//! User profile model
//!
//! The profile is transient client state: an email captured at sign-in plus
//! an optional picture. It is not persisted and carries no foreign keys;
//! every business and review in the store is treated as the current user's
//! by convention.

use serde::{Deserialize, Serialize};

use crate::types::ProfilePicture;

/// The current user's transient profile
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserProfile {
    pub email: String,
    pub picture: Option<ProfilePicture>,
}

impl UserProfile {
    pub fn is_signed_in(&self) -> bool {
        !self.email.is_empty()
    }
}
