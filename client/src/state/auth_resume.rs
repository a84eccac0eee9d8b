//! Sign-in interrupt and resume.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every gated submit on the prediction page goes through
//! [`AuthResumeController::attempt`]. Without a session the caller carries the
//! [`Intent`] to an auth view; after a successful sign-in or sign-up that view
//! calls [`AuthResumeController::complete_auth`], which asks
//! [`AuthResumeController::on_authenticated`] whether the intent replays and
//! sends the user back to the target view. The target view takes the carried
//! state exactly once with [`take_resume`] and dispatches only when told to.
//!
//! Per intent: `Created -> (Proceeded | Deferred)`,
//! `Deferred -> (Replayed | Abandoned)`. Replayed and Abandoned are terminal.
//!
//! The controller never navigates on its own and never writes the session;
//! both are collaborators handed to it.

#[cfg(test)]
#[path = "auth_resume_test.rs"]
mod auth_resume_test;

use crate::state::intent::Intent;
use crate::state::navigation::{CarriedState, Navigator, View};
use crate::state::session::SessionStore;

/// Decision returned by [`AuthResumeController::attempt`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// A session exists; forward the payload to the API now.
    Proceed,
    /// No session; navigate to an auth view carrying the intent.
    Defer,
}

impl Outcome {
    /// Phase a freshly created intent moves to on this outcome.
    #[must_use]
    pub fn phase(self) -> IntentPhase {
        match self {
            Self::Proceed => IntentPhase::Proceeded,
            Self::Defer => IntentPhase::Deferred,
        }
    }
}

/// Lifecycle states of a single intent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntentPhase {
    Created,
    Proceeded,
    Deferred,
    Replayed,
    Abandoned,
}

impl IntentPhase {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Proceeded | Self::Replayed | Self::Abandoned)
    }
}

/// What the target view should do with a carried intent after sign-in.
#[derive(Clone, Debug, PartialEq)]
pub enum Resolution {
    /// Pre-fill and dispatch once, without user input.
    Replay(Intent),
    /// Pre-fill only; the user resubmits by hand.
    Prefill(Intent),
    /// Incomplete payload or no session: pre-fill what exists, never dispatch.
    Abandon(Intent),
    /// Nothing was carried.
    Nothing,
}

impl Resolution {
    /// Phase the intent lands in, if there was one.
    #[must_use]
    pub fn phase(&self) -> Option<IntentPhase> {
        match self {
            Self::Replay(_) => Some(IntentPhase::Replayed),
            Self::Prefill(_) | Self::Abandon(_) => Some(IntentPhase::Abandoned),
            Self::Nothing => None,
        }
    }

    #[must_use]
    pub fn intent(&self) -> Option<&Intent> {
        match self {
            Self::Replay(intent) | Self::Prefill(intent) | Self::Abandon(intent) => Some(intent),
            Self::Nothing => None,
        }
    }

    #[must_use]
    pub fn is_replay(&self) -> bool {
        matches!(self, Self::Replay(_))
    }

    #[must_use]
    pub fn into_intent(self) -> Option<Intent> {
        match self {
            Self::Replay(intent) | Self::Prefill(intent) | Self::Abandon(intent) => Some(intent),
            Self::Nothing => None,
        }
    }
}

/// Gates actions behind authentication and decides single-shot replay.
#[derive(Clone, Debug)]
pub struct AuthResumeController<S> {
    session: S,
}

impl<S: SessionStore> AuthResumeController<S> {
    pub fn new(session: S) -> Self {
        Self { session }
    }

    /// Decide whether `intent` may run now.
    ///
    /// Has no side effects beyond logging; calling it repeatedly with the same
    /// session yields the same outcome.
    pub fn attempt(&self, intent: &Intent) -> Outcome {
        if self.session.has_valid_session() {
            leptos::logging::log!("intent {} ({}): proceed", intent.id, intent.payload.kind());
            Outcome::Proceed
        } else {
            leptos::logging::log!("intent {} ({}): deferred until sign-in", intent.id, intent.payload.kind());
            Outcome::Defer
        }
    }

    /// Full post-authentication decision for whatever was carried.
    pub fn resolve(&self, carried: Option<Intent>) -> Resolution {
        let Some(intent) = carried else {
            return Resolution::Nothing;
        };
        let resolution = if !self.session.has_valid_session() {
            leptos::logging::warn!("intent {}: resume requested without a session", intent.id);
            Resolution::Abandon(intent)
        } else if !intent.is_complete() {
            Resolution::Abandon(intent)
        } else if !intent.auto_resume {
            Resolution::Prefill(intent)
        } else {
            Resolution::Replay(intent)
        };
        if let (Some(intent), Some(phase)) = (resolution.intent(), resolution.phase()) {
            leptos::logging::log!("intent {} ({}): {phase:?}", intent.id, intent.payload.kind());
        }
        resolution
    }

    /// Intent to replay after a successful sign-in or sign-up, if any.
    pub fn on_authenticated(&self, carried: Option<Intent>) -> Option<Intent> {
        match self.resolve(carried) {
            Resolution::Replay(intent) => Some(intent),
            _ => None,
        }
    }

    /// Finish an auth view: consume what was carried to `auth_view` and move
    /// on to the intent's target view (or the landing page when nothing was
    /// carried). Returns the view navigated to.
    pub fn complete_auth<N: Navigator>(&self, nav: &mut N, auth_view: View) -> View {
        let carried = nav.read_carried_state(auth_view).map(|c| c.intent);
        nav.clear_carried_state();

        let resolution = self.resolve(carried);
        let replay = resolution.is_replay();
        match resolution.into_intent() {
            Some(intent) => {
                let target = intent.target_view;
                nav.navigate_to(target, Some(CarriedState::resumed(intent, replay)));
                target
            }
            None => {
                nav.navigate_to(View::Landing, None);
                View::Landing
            }
        }
    }
}

/// Attach `intent` to a navigation to `auth_view`.
pub fn defer_to_auth<N: Navigator>(nav: &mut N, auth_view: View, intent: Intent) {
    debug_assert!(auth_view.is_auth());
    nav.navigate_to(auth_view, Some(CarriedState::deferred(intent)));
}

/// Move a deferred intent between auth views (sign-in -> sign-up link).
pub fn hand_over<N: Navigator>(nav: &mut N, from: View, to: View) {
    let carried = nav.read_carried_state(from);
    nav.navigate_to(to, carried);
}

/// Read and immediately clear carried state on arrival at `view`.
pub fn take_resume<N: Navigator>(nav: &mut N, view: View) -> Option<CarriedState> {
    let carried = nav.read_carried_state(view);
    nav.clear_carried_state();
    carried
}
