//! Auth-session tokens for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The resume controller only ever reads a session through [`SessionStore`].
//! Writing is a separate capability ([`SessionWriter`]) held by the sign-in,
//! sign-up and log-out handlers, so nothing on the replay path can mint or
//! destroy a session as a side effect.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

use crate::util::storage;

const ACCESS_TOKEN_KEY: &str = "token";
const REFRESH_TOKEN_KEY: &str = "refreshToken";

/// Proof of authentication held by the client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: Option<String>,
}

impl Session {
    /// Build a session from a token pair; `None` when the access token is blank.
    #[must_use]
    pub fn from_tokens(access: Option<String>, refresh: Option<String>) -> Option<Self> {
        let access_token = access.filter(|t| !t.trim().is_empty())?;
        let refresh_token = refresh.filter(|t| !t.trim().is_empty());
        Some(Self { access_token, refresh_token })
    }
}

/// Read-only view of the current session.
pub trait SessionStore {
    fn session(&self) -> Option<Session>;

    fn has_valid_session(&self) -> bool {
        self.session().is_some()
    }

    fn access_token(&self) -> Option<String> {
        self.session().map(|s| s.access_token)
    }
}

/// Mutating half of the session, kept away from the resume controller.
pub trait SessionWriter {
    fn save(&self, session: &Session);
    fn clear(&self);
}

/// Session persisted in `localStorage` under `token` / `refreshToken`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSessionStore;

impl SessionStore for BrowserSessionStore {
    fn session(&self) -> Option<Session> {
        Session::from_tokens(storage::load(ACCESS_TOKEN_KEY), storage::load(REFRESH_TOKEN_KEY))
    }
}

impl SessionWriter for BrowserSessionStore {
    fn save(&self, session: &Session) {
        storage::save(ACCESS_TOKEN_KEY, &session.access_token);
        match &session.refresh_token {
            Some(refresh) => storage::save(REFRESH_TOKEN_KEY, refresh),
            None => storage::remove(REFRESH_TOKEN_KEY),
        }
    }

    fn clear(&self) {
        storage::remove(ACCESS_TOKEN_KEY);
        storage::remove(REFRESH_TOKEN_KEY);
    }
}

/// Session held in memory; clones share the same slot.
#[cfg(test)]
#[derive(Clone, Debug, Default)]
pub struct MemorySessionStore {
    inner: Rc<RefCell<Option<Session>>>,
}

#[cfg(test)]
impl MemorySessionStore {
    #[must_use]
    pub fn signed_in(access: &str, refresh: &str) -> Self {
        let store = Self::default();
        store.save(&Session { access_token: access.to_owned(), refresh_token: Some(refresh.to_owned()) });
        store
    }
}

#[cfg(test)]
impl SessionStore for MemorySessionStore {
    fn session(&self) -> Option<Session> {
        self.inner.borrow().clone()
    }
}

#[cfg(test)]
impl SessionWriter for MemorySessionStore {
    fn save(&self, session: &Session) {
        *self.inner.borrow_mut() = Some(session.clone());
    }

    fn clear(&self) {
        *self.inner.borrow_mut() = None;
    }
}

/// Reactive mirror of "is anyone signed in", shared through context so
/// chrome can re-render after sign-in or log-out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub signed_in: bool,
}

impl AuthState {
    #[must_use]
    pub fn from_store(store: &impl SessionStore) -> Self {
        Self { signed_in: store.has_valid_session() }
    }
}
