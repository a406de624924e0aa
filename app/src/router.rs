//! View router: tracks the active screen and one-shot navigation parameters
//!
//! `navigate` atomically replaces both the current view and the parameter
//! bag; parameters never leak across navigations. There is no history stack
//! and no URL synchronization; "back" buttons are explicit navigations to a
//! hardcoded prior view.
//!
//! The two post-create redirects are modelled as a single cancellable
//! pending transition: scheduling replaces any earlier one, any explicit
//! `navigate` before the deadline cancels it, and [`Router::poll`] fires it
//! once the deadline has passed. A transition can therefore never fire
//! against a screen the user has already left.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use serde_json::Value;

/// Screen identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    SignIn,
    SignUp,
    Dashboard,
    Create,
    Browse,
    Details,
    Profile,
    Reviews,
    CreateReview,
}

/// One-shot navigation parameters, replaced wholesale on every navigation
#[derive(Debug, Clone, Default)]
pub struct Params(HashMap<String, Value>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Single-entry bag, the common case (`{id: ...}`, `{search: ...}`)
    pub fn with(key: impl Into<String>, value: impl Into<Value>) -> Self {
        let mut params = Self::new();
        params.insert(key, value);
        params
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get_u64(&self, key: &str) -> Option<u64> {
        self.0.get(key).and_then(Value::as_u64)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone)]
struct PendingTransition {
    target: View,
    params: Params,
    due_at: Instant,
}

/// The component selecting the active screen
#[derive(Debug)]
pub struct Router {
    current: View,
    params: Params,
    pending: Option<PendingTransition>,
}

impl Router {
    /// A fresh router starts on the sign-in screen with no parameters
    pub fn new() -> Self {
        Self {
            current: View::SignIn,
            params: Params::new(),
            pending: None,
        }
    }

    pub fn current(&self) -> View {
        self.current
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Atomically replace `(current_view, params)`. Cancels any pending
    /// delayed transition.
    pub fn navigate(&mut self, view: View, params: Params) {
        if self.pending.take().is_some() {
            tracing::debug!(?view, "pending transition cancelled by navigation");
        }
        tracing::debug!(from = ?self.current, to = ?view, "navigate");
        self.current = view;
        self.params = params;
    }

    /// Schedule a transition to fire `delay` after `now`, replacing any
    /// earlier pending transition.
    pub fn schedule(&mut self, view: View, params: Params, delay: Duration, now: Instant) {
        tracing::debug!(target = ?view, ?delay, "transition scheduled");
        self.pending = Some(PendingTransition {
            target: view,
            params,
            due_at: now + delay,
        });
    }

    /// Deadline of the pending transition, if one is scheduled
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.due_at)
    }

    /// Fire the pending transition if its deadline has passed. Returns the
    /// view navigated to, if any.
    pub fn poll(&mut self, now: Instant) -> Option<View> {
        if !self.pending.as_ref().is_some_and(|p| now >= p.due_at) {
            return None;
        }
        let PendingTransition { target, params, .. } = self.pending.take()?;
        self.current = target;
        self.params = params;
        tracing::debug!(view = ?target, "delayed transition fired");
        Some(target)
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_sign_in() {
        let router = Router::new();
        assert_eq!(router.current(), View::SignIn);
        assert!(router.params().is_empty());
    }

    #[test]
    fn test_params_do_not_leak_across_navigations() {
        let mut router = Router::new();
        router.navigate(View::Details, Params::with("id", 2));
        assert_eq!(router.params().get_u64("id"), Some(2));

        router.navigate(View::Dashboard, Params::new());
        assert!(router.params().is_empty());
    }

    #[test]
    fn test_pending_transition_fires_after_deadline() {
        let mut router = Router::new();
        let start = Instant::now();
        router.schedule(
            View::Profile,
            Params::new(),
            Duration::from_secs(2),
            start,
        );

        assert_eq!(router.poll(start + Duration::from_secs(1)), None);
        assert_eq!(
            router.poll(start + Duration::from_secs(2)),
            Some(View::Profile)
        );
        assert_eq!(router.current(), View::Profile);
        // Fired transitions are consumed
        assert_eq!(router.poll(start + Duration::from_secs(3)), None);
    }

    #[test]
    fn test_navigate_cancels_pending_transition() {
        let mut router = Router::new();
        let start = Instant::now();
        router.schedule(View::Reviews, Params::new(), Duration::from_secs(2), start);
        router.navigate(View::Browse, Params::new());

        assert_eq!(router.poll(start + Duration::from_secs(5)), None);
        assert_eq!(router.current(), View::Browse);
    }

    #[test]
    fn test_reschedule_replaces_pending_transition() {
        let mut router = Router::new();
        let start = Instant::now();
        router.schedule(View::Profile, Params::new(), Duration::from_secs(2), start);
        router.schedule(View::Reviews, Params::new(), Duration::from_secs(3), start);

        assert_eq!(router.poll(start + Duration::from_secs(2)), None);
        assert_eq!(
            router.poll(start + Duration::from_secs(3)),
            Some(View::Reviews)
        );
    }
}
