use super::*;
use crate::net::types::{EngineStatus, Gearbox};
use crate::state::intent::{IntentPayload, PredictionForm};
use crate::state::navigation::NavigationState;
use crate::state::session::{MemorySessionStore, Session, SessionWriter};

// =============================================================
// Helpers
// =============================================================

fn search(term: &str) -> Intent {
    Intent::new(IntentPayload::Search { term: term.to_owned() })
}

fn filled_prediction() -> Intent {
    Intent::new(IntentPayload::PricePrediction(PredictionForm {
        name: "Toyota".to_owned(),
        model: "Camry".to_owned(),
        gearbox: Gearbox::Automatic,
        year: "2019".to_owned(),
        mile: "45000".to_owned(),
        body_health: 9.0,
        engine_status: EngineStatus::Original,
    }))
}

fn sign_in(store: &MemorySessionStore) {
    store.save(&Session { access_token: "access".to_owned(), refresh_token: Some("refresh".to_owned()) });
}

/// Stand-in for the prediction API: records every payload it receives.
#[derive(Default)]
struct RecordingApi {
    calls: Vec<IntentPayload>,
}

impl RecordingApi {
    fn dispatch(&mut self, intent: &Intent) {
        self.calls.push(intent.payload.clone());
    }
}

/// What the prediction page does on mount.
fn arrive_at_prediction(nav: &mut NavigationState, api: &mut RecordingApi) -> Option<CarriedState> {
    nav.arrive(View::Prediction);
    let carried = take_resume(nav, View::Prediction);
    if let Some(state) = &carried {
        if state.replay {
            api.dispatch(&state.intent);
        }
    }
    carried
}

/// What a gated submit handler does.
fn submit<S: SessionStore>(
    controller: &AuthResumeController<S>,
    nav: &mut NavigationState,
    api: &mut RecordingApi,
    intent: Intent,
) -> Outcome {
    let outcome = controller.attempt(&intent);
    match outcome {
        Outcome::Proceed => api.dispatch(&intent),
        Outcome::Defer => defer_to_auth(nav, View::SignIn, intent),
    }
    outcome
}

// =============================================================
// attempt
// =============================================================

#[test]
fn attempt_proceeds_with_session() {
    let controller = AuthResumeController::new(MemorySessionStore::signed_in("a", "r"));
    assert_eq!(controller.attempt(&search("Camry")), Outcome::Proceed);
}

#[test]
fn attempt_defers_without_session_and_is_idempotent() {
    let controller = AuthResumeController::new(MemorySessionStore::default());
    let intent = search("Camry");
    assert_eq!(controller.attempt(&intent), Outcome::Defer);
    assert_eq!(controller.attempt(&intent), Outcome::Defer);
}

#[test]
fn attempt_tracks_session_changes() {
    let store = MemorySessionStore::default();
    let controller = AuthResumeController::new(store.clone());
    let intent = search("Camry");
    assert_eq!(controller.attempt(&intent), Outcome::Defer);
    sign_in(&store);
    assert_eq!(controller.attempt(&intent), Outcome::Proceed);
}

#[test]
fn outcome_phases() {
    assert_eq!(Outcome::Proceed.phase(), IntentPhase::Proceeded);
    assert_eq!(Outcome::Defer.phase(), IntentPhase::Deferred);
}

#[test]
fn terminal_phases() {
    assert!(!IntentPhase::Created.is_terminal());
    assert!(!IntentPhase::Deferred.is_terminal());
    assert!(IntentPhase::Proceeded.is_terminal());
    assert!(IntentPhase::Replayed.is_terminal());
    assert!(IntentPhase::Abandoned.is_terminal());
}

// =============================================================
// on_authenticated / resolve
// =============================================================

#[test]
fn on_authenticated_returns_complete_auto_resume_intent() {
    let controller = AuthResumeController::new(MemorySessionStore::signed_in("a", "r"));
    let intent = search("Camry");
    assert_eq!(controller.on_authenticated(Some(intent.clone())), Some(intent));
}

#[test]
fn on_authenticated_with_nothing_carried_returns_none() {
    let controller = AuthResumeController::new(MemorySessionStore::signed_in("a", "r"));
    assert_eq!(controller.on_authenticated(None), None);
    assert_eq!(controller.resolve(None), Resolution::Nothing);
}

#[test]
fn on_authenticated_skips_manual_intents() {
    let controller = AuthResumeController::new(MemorySessionStore::signed_in("a", "r"));
    let intent = search("Camry").manual();
    assert_eq!(controller.on_authenticated(Some(intent.clone())), None);
    assert_eq!(controller.resolve(Some(intent.clone())), Resolution::Prefill(intent));
}

#[test]
fn on_authenticated_abandons_incomplete_intents() {
    let controller = AuthResumeController::new(MemorySessionStore::signed_in("a", "r"));
    let intent = search("   ");
    assert_eq!(controller.on_authenticated(Some(intent.clone())), None);
    let resolution = controller.resolve(Some(intent));
    assert!(matches!(resolution, Resolution::Abandon(_)));
    assert_eq!(resolution.phase(), Some(IntentPhase::Abandoned));
}

#[test]
fn on_authenticated_abandons_without_session() {
    let controller = AuthResumeController::new(MemorySessionStore::default());
    assert_eq!(controller.on_authenticated(Some(search("Camry"))), None);
}

#[test]
fn replay_resolution_is_replayed_phase() {
    let controller = AuthResumeController::new(MemorySessionStore::signed_in("a", "r"));
    let resolution = controller.resolve(Some(filled_prediction()));
    assert!(resolution.is_replay());
    assert_eq!(resolution.phase(), Some(IntentPhase::Replayed));
}

// =============================================================
// complete_auth
// =============================================================

#[test]
fn complete_auth_returns_to_target_with_replay() {
    let store = MemorySessionStore::default();
    let controller = AuthResumeController::new(store.clone());
    let mut nav = NavigationState::default();
    defer_to_auth(&mut nav, View::SignIn, search("Camry"));

    sign_in(&store);
    let dest = controller.complete_auth(&mut nav, View::SignIn);

    assert_eq!(dest, View::Prediction);
    assert_eq!(nav.current, View::Prediction);
    let carried = nav.read_carried_state(View::Prediction).unwrap();
    assert!(carried.replay);
    assert!(nav.read_carried_state(View::SignIn).is_none());
}

#[test]
fn complete_auth_without_carried_intent_goes_to_landing() {
    let controller = AuthResumeController::new(MemorySessionStore::signed_in("a", "r"));
    let mut nav = NavigationState::default();
    nav.navigate_to(View::SignIn, None);
    assert_eq!(controller.complete_auth(&mut nav, View::SignIn), View::Landing);
    assert!(!nav.has_carried_state());
}

#[test]
fn complete_auth_carries_manual_intent_for_prefill_only() {
    let controller = AuthResumeController::new(MemorySessionStore::signed_in("a", "r"));
    let mut nav = NavigationState::default();
    defer_to_auth(&mut nav, View::SignIn, search("Camry").manual());
    controller.complete_auth(&mut nav, View::SignIn);
    let carried = nav.read_carried_state(View::Prediction).unwrap();
    assert!(!carried.replay);
    assert_eq!(carried.intent.payload, IntentPayload::Search { term: "Camry".to_owned() });
}

#[test]
fn hand_over_moves_intent_to_sign_up() {
    let mut nav = NavigationState::default();
    defer_to_auth(&mut nav, View::SignIn, search("Camry"));
    hand_over(&mut nav, View::SignIn, View::SignUp);
    assert_eq!(nav.current, View::SignUp);
    assert!(nav.read_carried_state(View::SignUp).is_some());
    assert!(nav.read_carried_state(View::SignIn).is_none());
}

#[test]
fn second_read_after_take_resume_is_empty() {
    let controller = AuthResumeController::new(MemorySessionStore::signed_in("a", "r"));
    let mut nav = NavigationState::default();
    defer_to_auth(&mut nav, View::SignIn, search("Camry"));
    controller.complete_auth(&mut nav, View::SignIn);

    let first = take_resume(&mut nav, View::Prediction).map(|c| c.intent);
    assert!(first.is_some());
    let second = take_resume(&mut nav, View::Prediction).map(|c| c.intent);
    assert_eq!(controller.on_authenticated(second), None);
}

// =============================================================
// End-to-end scenarios
// =============================================================

#[test]
fn scenario_search_deferred_then_replayed_once() {
    let store = MemorySessionStore::default();
    let controller = AuthResumeController::new(store.clone());
    let mut nav = NavigationState::default();
    let mut api = RecordingApi::default();

    nav.arrive(View::Prediction);
    let outcome = submit(&controller, &mut nav, &mut api, search("Camry"));
    assert_eq!(outcome, Outcome::Defer);
    assert_eq!(nav.current, View::SignIn);
    assert!(api.calls.is_empty());

    sign_in(&store);
    controller.complete_auth(&mut nav, View::SignIn);
    arrive_at_prediction(&mut nav, &mut api);

    assert_eq!(api.calls, vec![IntentPayload::Search { term: "Camry".to_owned() }]);
}

#[test]
fn scenario_abandoned_sign_in_never_predicts() {
    let store = MemorySessionStore::default();
    let controller = AuthResumeController::new(store.clone());
    let mut nav = NavigationState::default();
    let mut api = RecordingApi::default();

    nav.arrive(View::Prediction);
    submit(&controller, &mut nav, &mut api, filled_prediction());
    assert_eq!(nav.current, View::SignIn);

    // User leaves for the landing page instead of signing in.
    nav.arrive(View::Landing);
    assert!(!nav.has_carried_state());

    // Even a later, unrelated sign-in finds nothing to resume.
    nav.navigate_to(View::SignIn, None);
    sign_in(&store);
    controller.complete_auth(&mut nav, View::SignIn);
    arrive_at_prediction(&mut nav, &mut api);

    assert!(api.calls.is_empty());
}

#[test]
fn scenario_authenticated_recommendation_proceeds_without_navigation() {
    let store = MemorySessionStore::signed_in("a", "r");
    let controller = AuthResumeController::new(store);
    let mut nav = NavigationState::default();
    let mut api = RecordingApi::default();
    nav.arrive(View::Prediction);

    let intent = Intent::new(IntentPayload::Recommendation { budget_rial: 1_000_000 });
    assert_eq!(submit(&controller, &mut nav, &mut api, intent), Outcome::Proceed);

    assert_eq!(nav.current, View::Prediction);
    assert!(!nav.has_carried_state());
    assert_eq!(api.calls, vec![IntentPayload::Recommendation { budget_rial: 1_000_000 }]);
}

#[test]
fn scenario_refresh_after_replay_does_not_duplicate() {
    let store = MemorySessionStore::default();
    let controller = AuthResumeController::new(store.clone());
    let mut nav = NavigationState::default();
    let mut api = RecordingApi::default();

    submit(&controller, &mut nav, &mut api, search("Camry"));
    sign_in(&store);
    controller.complete_auth(&mut nav, View::SignIn);
    arrive_at_prediction(&mut nav, &mut api);
    assert_eq!(api.calls.len(), 1);

    // Re-running the mount logic in place is what a refresh amounts to for
    // carried state: it has already been cleared.
    let again = arrive_at_prediction(&mut nav, &mut api);
    assert!(again.is_none());
    // A real reload starts from an empty navigation record.
    let mut reloaded = NavigationState::default();
    assert!(arrive_at_prediction(&mut reloaded, &mut api).is_none());
    assert_eq!(api.calls.len(), 1);
}

#[test]
fn scenario_failed_sign_in_keeps_intent_for_manual_retry() {
    let store = MemorySessionStore::default();
    let controller = AuthResumeController::new(store.clone());
    let mut nav = NavigationState::default();
    let mut api = RecordingApi::default();

    submit(&controller, &mut nav, &mut api, search("Camry"));
    // Sign-in request fails: the controller is not consulted and nothing moves.
    assert!(nav.read_carried_state(View::SignIn).is_some());

    sign_in(&store);
    controller.complete_auth(&mut nav, View::SignIn);
    arrive_at_prediction(&mut nav, &mut api);
    assert_eq!(api.calls.len(), 1);
}

#[test]
fn scenario_sign_up_completes_and_replays_once() {
    let store = MemorySessionStore::default();
    let controller = AuthResumeController::new(store.clone());
    let mut nav = NavigationState::default();
    let mut api = RecordingApi::default();

    nav.arrive(View::Prediction);
    submit(&controller, &mut nav, &mut api, search("Camry"));
    hand_over(&mut nav, View::SignIn, View::SignUp);
    assert_eq!(nav.current, View::SignUp);

    sign_in(&store);
    let dest = controller.complete_auth(&mut nav, View::SignUp);
    assert_eq!(dest, View::Prediction);
    arrive_at_prediction(&mut nav, &mut api);

    assert_eq!(api.calls, vec![IntentPayload::Search { term: "Camry".to_owned() }]);
    assert!(!nav.has_carried_state());
}

#[test]
fn scenario_sign_up_without_auto_login_hands_back_to_sign_in() {
    let store = MemorySessionStore::default();
    let controller = AuthResumeController::new(store.clone());
    let mut nav = NavigationState::default();
    let mut api = RecordingApi::default();

    nav.arrive(View::Prediction);
    submit(&controller, &mut nav, &mut api, filled_prediction());
    hand_over(&mut nav, View::SignIn, View::SignUp);

    // Registration worked but the follow-up login did not: back to sign-in.
    hand_over(&mut nav, View::SignUp, View::SignIn);
    assert_eq!(nav.current, View::SignIn);
    assert!(nav.read_carried_state(View::SignUp).is_none());
    assert!(nav.read_carried_state(View::SignIn).is_some());
    assert!(api.calls.is_empty());

    sign_in(&store);
    controller.complete_auth(&mut nav, View::SignIn);
    arrive_at_prediction(&mut nav, &mut api);

    assert_eq!(api.calls.len(), 1);
    assert!(matches!(api.calls[0], IntentPayload::PricePrediction(_)));
    assert!(!nav.has_carried_state());
}
