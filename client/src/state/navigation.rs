//! Navigation-scoped carried state.
//!
//! DESIGN
//! ======
//! Carried state is attached to exactly one navigation and addressed to its
//! destination view. Any later navigation replaces it, so leaving the sign-in
//! page for anywhere else drops a deferred intent without an explicit cancel.
//! The payload is held encoded, the same way history state would be, and is
//! never written to durable storage: a page refresh starts with nothing
//! carried.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use serde::{Deserialize, Serialize};

use crate::state::intent::Intent;

/// Routed views that take part in the resume flow.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    #[default]
    Landing,
    SignIn,
    SignUp,
    Prediction,
}

impl View {
    /// Route path for the view.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Landing => "/",
            Self::SignIn => "/signin",
            Self::SignUp => "/signup",
            Self::Prediction => "/prediction",
        }
    }

    /// Whether this view completes authentication.
    #[must_use]
    pub fn is_auth(self) -> bool {
        matches!(self, Self::SignIn | Self::SignUp)
    }
}

/// Data attached to a navigation, readable by the destination view.
#[derive(Clone, Debug, PartialEq)]
pub struct CarriedState {
    pub intent: Intent,
    /// Set only by an auth view after the resume controller approved replay.
    pub replay: bool,
}

impl CarriedState {
    /// Carry an intent to an auth view; nothing is replayed yet.
    #[must_use]
    pub fn deferred(intent: Intent) -> Self {
        Self { intent, replay: false }
    }

    /// Carry an intent back to its target view after authentication.
    #[must_use]
    pub fn resumed(intent: Intent, replay: bool) -> Self {
        Self { intent, replay }
    }
}

/// The navigation boundary the resume flow relies on.
pub trait Navigator {
    /// Move to `view`, replacing any previously carried state.
    fn navigate_to(&mut self, view: View, carried: Option<CarriedState>);
    /// Carried state addressed to `view`, if any.
    fn read_carried_state(&self, view: View) -> Option<CarriedState>;
    /// Drop carried state so a refresh or back-navigation cannot reuse it.
    fn clear_carried_state(&mut self);
}

/// In-memory navigation record shared through Leptos context.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavigationState {
    pub current: View,
    slot: Option<Slot>,
}

#[derive(Clone, Debug, PartialEq)]
struct Slot {
    destination: View,
    encoded_intent: String,
    replay: bool,
}

impl NavigationState {
    /// Whether anything is carried at all.
    #[must_use]
    pub fn has_carried_state(&self) -> bool {
        self.slot.is_some()
    }

    #[cfg(test)]
    pub(crate) fn attach_raw(&mut self, view: View, encoded_intent: &str, replay: bool) {
        self.slot = Some(Slot { destination: view, encoded_intent: encoded_intent.to_owned(), replay });
    }

    /// Record an arrival that did not go through [`Navigator::navigate_to`]
    /// (typed URL, link click, refresh).
    pub fn arrive(&mut self, view: View) {
        if self.current == view {
            return;
        }
        self.current = view;
        if self.slot.as_ref().is_some_and(|slot| slot.destination != view) {
            leptos::logging::log!("navigation: dropping carried state on arrival at {view:?}");
            self.slot = None;
        }
    }
}

impl Navigator for NavigationState {
    fn navigate_to(&mut self, view: View, carried: Option<CarriedState>) {
        self.current = view;
        self.slot = carried.and_then(|state| match state.intent.encode() {
            Ok(encoded_intent) => Some(Slot { destination: view, encoded_intent, replay: state.replay }),
            Err(e) => {
                leptos::logging::warn!("navigation: carried state not attached: {e}");
                None
            }
        });
    }

    fn read_carried_state(&self, view: View) -> Option<CarriedState> {
        let slot = self.slot.as_ref()?;
        if slot.destination != view {
            return None;
        }
        match Intent::decode(&slot.encoded_intent) {
            Ok(intent) => Some(CarriedState { intent, replay: slot.replay }),
            Err(e) => {
                leptos::logging::warn!("navigation: malformed carried state ignored: {e}");
                None
            }
        }
    }

    fn clear_carried_state(&mut self) {
        self.slot = None;
    }
}
