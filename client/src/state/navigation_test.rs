use super::*;
use crate::state::intent::IntentPayload;

fn search_intent(term: &str) -> Intent {
    Intent::new(IntentPayload::Search { term: term.to_owned() })
}

// =============================================================
// View
// =============================================================

#[test]
fn view_paths_match_routes() {
    assert_eq!(View::Landing.path(), "/");
    assert_eq!(View::SignIn.path(), "/signin");
    assert_eq!(View::SignUp.path(), "/signup");
    assert_eq!(View::Prediction.path(), "/prediction");
}

#[test]
fn only_sign_in_and_sign_up_are_auth_views() {
    assert!(View::SignIn.is_auth());
    assert!(View::SignUp.is_auth());
    assert!(!View::Landing.is_auth());
    assert!(!View::Prediction.is_auth());
}

// =============================================================
// Carried state
// =============================================================

#[test]
fn carried_state_is_readable_only_at_destination() {
    let mut nav = NavigationState::default();
    nav.navigate_to(View::SignIn, Some(CarriedState::deferred(search_intent("Camry"))));

    assert_eq!(nav.current, View::SignIn);
    let carried = nav.read_carried_state(View::SignIn).unwrap();
    assert_eq!(carried.intent.payload, IntentPayload::Search { term: "Camry".to_owned() });
    assert!(!carried.replay);
    assert!(nav.read_carried_state(View::Prediction).is_none());
}

#[test]
fn reading_does_not_consume() {
    let mut nav = NavigationState::default();
    nav.navigate_to(View::SignIn, Some(CarriedState::deferred(search_intent("Camry"))));
    assert!(nav.read_carried_state(View::SignIn).is_some());
    assert!(nav.read_carried_state(View::SignIn).is_some());
}

#[test]
fn clear_drops_carried_state() {
    let mut nav = NavigationState::default();
    nav.navigate_to(View::Prediction, Some(CarriedState::resumed(search_intent("Camry"), true)));
    nav.clear_carried_state();
    assert!(!nav.has_carried_state());
    assert!(nav.read_carried_state(View::Prediction).is_none());
}

#[test]
fn next_navigation_replaces_carried_state() {
    let mut nav = NavigationState::default();
    nav.navigate_to(View::SignIn, Some(CarriedState::deferred(search_intent("Camry"))));
    nav.navigate_to(View::Landing, None);
    assert!(!nav.has_carried_state());
    assert!(nav.read_carried_state(View::SignIn).is_none());
}

#[test]
fn resumed_state_keeps_replay_flag() {
    let mut nav = NavigationState::default();
    nav.navigate_to(View::Prediction, Some(CarriedState::resumed(search_intent("Camry"), true)));
    assert!(nav.read_carried_state(View::Prediction).unwrap().replay);
}

#[test]
fn malformed_carried_intent_reads_as_nothing() {
    let mut nav = NavigationState::default();
    nav.attach_raw(View::Prediction, "{not json", true);
    assert!(nav.has_carried_state());
    assert!(nav.read_carried_state(View::Prediction).is_none());
}

// =============================================================
// arrive
// =============================================================

#[test]
fn arriving_elsewhere_drops_state_addressed_to_another_view() {
    let mut nav = NavigationState::default();
    nav.navigate_to(View::SignIn, Some(CarriedState::deferred(search_intent("Camry"))));
    nav.arrive(View::Landing);
    assert_eq!(nav.current, View::Landing);
    assert!(!nav.has_carried_state());
}

#[test]
fn arriving_at_destination_keeps_state() {
    let mut nav = NavigationState::default();
    nav.navigate_to(View::SignIn, Some(CarriedState::deferred(search_intent("Camry"))));
    nav.arrive(View::SignIn);
    assert!(nav.read_carried_state(View::SignIn).is_some());
}
