//! Sign-up screen
//!
//! Like sign-in, a simulation: no account is stored anywhere. A valid form
//! records the email on the profile and opens the dashboard immediately.

use shared::validation::{validate_email, validate_password};

use crate::router::{Params, Router, View};
use crate::screens::FormErrors;
use crate::store::AggregateStore;

pub const SUCCESS_MESSAGE: &str = "Account created successfully! Opening dashboard...";

#[derive(Debug, Clone, Default)]
pub struct SignUpForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub business_name: String,
    pub password: String,
    pub confirm_password: String,
    pub agree_to_terms: bool,
}

impl SignUpForm {
    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::new();
        if self.name.trim().is_empty() {
            errors.insert("name", "Full name is required");
        }
        if self.email.trim().is_empty() {
            errors.insert("email", "Email is required");
        } else {
            errors.check("email", validate_email(&self.email));
        }
        if self.phone.trim().is_empty() {
            errors.insert("phone", "Phone number is required");
        }
        if self.business_name.trim().is_empty() {
            errors.insert("business_name", "Business name is required");
        }
        errors.check("password", validate_password(&self.password));
        if self.password != self.confirm_password {
            errors.insert("confirm_password", "Passwords do not match");
        }
        if !self.agree_to_terms {
            errors.insert("agree_to_terms", "You must agree to the terms and conditions");
        }
        errors.into_result()
    }

    /// Record the email and open the dashboard immediately
    pub fn submit(self, store: &mut AggregateStore, router: &mut Router) -> Result<(), FormErrors> {
        self.validate()?;
        store.sign_in(self.email);
        router.navigate(View::Dashboard, Params::new());
        Ok(())
    }
}

pub fn render() -> String {
    [
        "=== Create Your Account ===",
        "Join Smooth Business and grow your business.",
        "  [1] Create account",
        "  [2] Already have an account? Sign In here",
    ]
    .join("\n")
}
