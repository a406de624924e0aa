//! Tests for navigation and delayed transitions
//! Verifies parameters are one-shot and pending redirects never fire after
//! the user navigates away

use std::time::{Duration, Instant};

use smooth_business_app::{Params, Router, View};

#[test]
fn navigation_replaces_view_and_params_atomically() {
    let mut router = Router::new();
    router.navigate(View::Details, Params::with("id", 3));
    assert_eq!(router.current(), View::Details);
    assert_eq!(router.params().get_u64("id"), Some(3));

    router.navigate(View::Browse, Params::with("search", "coffee"));
    assert_eq!(router.params().get_str("search"), Some("coffee"));
    assert_eq!(router.params().get_u64("id"), None);
}

#[test]
fn pending_transition_carries_its_own_params() {
    let mut router = Router::new();
    let start = Instant::now();
    router.navigate(View::Create, Params::new());
    router.schedule(
        View::Details,
        Params::with("id", 7),
        Duration::from_secs(2),
        start,
    );

    // Params only change once the transition fires
    assert!(router.params().is_empty());
    router.poll(start + Duration::from_secs(2));
    assert_eq!(router.current(), View::Details);
    assert_eq!(router.params().get_u64("id"), Some(7));
}

#[test]
fn stale_redirect_cannot_fire_after_navigation() {
    let mut router = Router::new();
    let start = Instant::now();
    router.navigate(View::Create, Params::new());
    router.schedule(View::Profile, Params::new(), Duration::from_secs(2), start);

    // User leaves before the redirect is due
    router.navigate(View::Browse, Params::new());

    // Long past the deadline, nothing fires
    assert_eq!(router.poll(start + Duration::from_secs(60)), None);
    assert_eq!(router.current(), View::Browse);
    assert!(router.next_deadline().is_none());
}

#[test]
fn only_the_latest_schedule_wins() {
    let mut router = Router::new();
    let start = Instant::now();
    router.schedule(View::Profile, Params::new(), Duration::from_secs(2), start);
    router.schedule(
        View::Reviews,
        Params::new(),
        Duration::from_millis(1500),
        start,
    );

    assert_eq!(
        router.poll(start + Duration::from_millis(1500)),
        Some(View::Reviews)
    );
    // The replaced transition is gone for good
    assert_eq!(router.poll(start + Duration::from_secs(10)), None);
}

#[test]
fn poll_before_deadline_is_a_no_op() {
    let mut router = Router::new();
    let start = Instant::now();
    router.schedule(View::Dashboard, Params::new(), Duration::from_secs(2), start);

    assert_eq!(router.poll(start), None);
    assert_eq!(router.poll(start + Duration::from_millis(1999)), None);
    assert_eq!(router.current(), View::SignIn);
    assert!(router.next_deadline().is_some());
}
