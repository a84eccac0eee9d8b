//! Sign-in page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Arrival may carry a deferred intent. A failed attempt leaves it in place
//! so the user can retry; success hands it to the resume controller, which
//! decides where to go next. The "Sign up" link moves the intent along
//! instead of dropping it.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth_resume::{AuthResumeController, hand_over};
use crate::state::navigation::{NavigationState, View};
use crate::state::session::{AuthState, BrowserSessionStore, Session, SessionWriter};
use crate::util::validation::{SignInErrors, validate_sign_in};

/// Persist `session`, let the resume controller consume whatever was carried
/// to `auth_view`, and route to the view it chose.
pub(crate) fn finish_auth<F>(
    session: &Session,
    auth_view: View,
    navigation: RwSignal<NavigationState>,
    auth: RwSignal<AuthState>,
    navigate: F,
) where
    F: Fn(&str, NavigateOptions),
{
    BrowserSessionStore.save(session);
    auth.set(AuthState::from_store(&BrowserSessionStore));
    let controller = AuthResumeController::new(BrowserSessionStore);
    let target = navigation
        .try_update(|nav| controller.complete_auth(nav, auth_view))
        .unwrap_or(View::Landing);
    navigate(target.path(), NavigateOptions { replace: true, ..NavigateOptions::default() });
}

#[component]
pub fn SignInPage() -> impl IntoView {
    let navigation = expect_context::<RwSignal<NavigationState>>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    navigation.update(|nav| nav.arrive(View::SignIn));

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(SignInErrors::default());
    let busy = RwSignal::new(false);

    let navigate_done = navigate.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = email.get().trim().to_owned();
        let password_value = password.get();
        let found = validate_sign_in(&email_value, &password_value);
        let invalid = !found.is_empty();
        errors.set(found);
        if invalid {
            return;
        }
        busy.set(true);

        let navigate_done = navigate_done.clone();
        leptos::task::spawn_local(async move {
            let result = crate::net::api::login(&email_value, &password_value).await;
            busy.set(false);
            match result.and_then(|tokens| tokens.into_session().ok_or_else(|| "Invalid credentials.".to_owned())) {
                Ok(session) => finish_auth(&session, View::SignIn, navigation, auth, navigate_done),
                Err(message) => {
                    leptos::logging::warn!("sign-in failed: {message}");
                    errors.set(SignInErrors { email: Some(message), password: None });
                }
            }
        });
    };

    let on_sign_up = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        navigation.update(|nav| hand_over(nav, View::SignIn, View::SignUp));
        navigate(View::SignUp.path(), NavigateOptions::default());
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Sign in"</h1>
                <Show when=move || navigation.get().has_carried_state()>
                    <p class="auth-card__notice">"Sign in to continue where you left off."</p>
                </Show>
                <form class="auth-form" on:submit=on_submit>
                    <label class="field">
                        "Email"
                        <input
                            type="email"
                            placeholder="Enter your email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <Show when=move || errors.get().email.is_some()>
                        <p class="field__error">{move || errors.get().email.unwrap_or_default()}</p>
                    </Show>
                    <label class="field">
                        "Password"
                        <input
                            type="password"
                            placeholder="Enter your password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <Show when=move || errors.get().password.is_some()>
                        <p class="field__error">{move || errors.get().password.unwrap_or_default()}</p>
                    </Show>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <p class="auth-card__switch">
                    "Don't have an account? "
                    <a href=View::SignUp.path() on:click=on_sign_up>"Sign up"</a>
                </p>
            </div>
        </div>
    }
}
