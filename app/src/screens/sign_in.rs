//! Sign-in screen
//!
//! Sign-in is a client-local simulation: any non-empty email and password
//! pair succeeds, the email is recorded on the profile, and the dashboard
//! opens after a short fixed delay so the success message is visible.

use std::time::{Duration, Instant};

use crate::router::{Params, Router, View};
use crate::screens::FormErrors;
use crate::store::AggregateStore;

pub const SUCCESS_MESSAGE: &str = "Sign In successful! Welcome back.";

#[derive(Debug, Clone, Default)]
pub struct SignInForm {
    pub email: String,
    pub password: String,
}

impl SignInForm {
    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::new();
        if self.email.is_empty() {
            errors.insert("email", "Email is required");
        }
        if self.password.is_empty() {
            errors.insert("password", "Password is required");
        }
        errors.into_result()
    }

    /// Record the email and schedule the dashboard transition
    pub fn submit(
        self,
        store: &mut AggregateStore,
        router: &mut Router,
        delay: Duration,
        now: Instant,
    ) -> Result<(), FormErrors> {
        self.validate()?;
        store.sign_in(self.email);
        router.schedule(View::Dashboard, Params::new(), delay, now);
        Ok(())
    }
}

pub fn render() -> String {
    [
        "=== Sign In ===",
        "Enter your email and password to continue.",
        "  [1] Sign in",
        "  [2] Don't have an account? Sign Up here",
        "  [q] Quit",
    ]
    .join("\n")
}
