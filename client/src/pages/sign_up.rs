//! Sign-up page: register, then sign in with the same credentials.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::pages::sign_in::finish_auth;
use crate::state::auth_resume::hand_over;
use crate::state::navigation::{NavigationState, View};
use crate::state::session::{AuthState, BrowserSessionStore, SessionWriter};
use crate::util::validation::{SignUpErrors, SignUpForm, validate_sign_up};

#[component]
pub fn SignUpPage() -> impl IntoView {
    let navigation = expect_context::<RwSignal<NavigationState>>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    navigation.update(|nav| nav.arrive(View::SignUp));

    let form = RwSignal::new(SignUpForm::default());
    let errors = RwSignal::new(SignUpErrors::default());
    let busy = RwSignal::new(false);

    let navigate_done = navigate.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let mut values = form.get();
        values.email = values.email.trim().to_owned();
        let found = validate_sign_up(&values);
        let invalid = !found.is_empty();
        errors.set(found);
        if invalid {
            return;
        }
        busy.set(true);

        let navigate_done = navigate_done.clone();
        leptos::task::spawn_local(async move {
            let registered =
                crate::net::api::register(&values.email, &values.first_name, &values.last_name, &values.password)
                    .await;
            let tokens = match registered {
                Ok(tokens) => tokens,
                Err(message) => {
                    busy.set(false);
                    leptos::logging::warn!("sign-up failed: {message}");
                    errors.set(SignUpErrors { email: Some(message), ..SignUpErrors::default() });
                    return;
                }
            };
            if let Some(session) = tokens.into_session() {
                BrowserSessionStore.save(&session);
            }

            let login = crate::net::api::login(&values.email, &values.password).await;
            busy.set(false);
            match login.and_then(|pair| pair.into_session().ok_or_else(|| "Please sign in manually.".to_owned())) {
                Ok(session) => finish_auth(&session, View::SignUp, navigation, auth, navigate_done),
                Err(message) => {
                    leptos::logging::warn!("automatic sign-in after sign-up failed: {message}");
                    auth.set(AuthState::from_store(&BrowserSessionStore));
                    navigation.update(|nav| hand_over(nav, View::SignUp, View::SignIn));
                    navigate_done(View::SignIn.path(), NavigateOptions { replace: true, ..NavigateOptions::default() });
                }
            }
        });
    };

    let on_sign_in = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        navigation.update(|nav| hand_over(nav, View::SignUp, View::SignIn));
        navigate(View::SignIn.path(), NavigateOptions::default());
    };

    let field_error = move |pick: fn(&SignUpErrors) -> Option<String>| {
        view! {
            <Show when=move || pick(&errors.get()).is_some()>
                <p class="field__error">{move || pick(&errors.get()).unwrap_or_default()}</p>
            </Show>
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create account"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <div class="auth-form__row">
                        <label class="field">
                            "First name"
                            <input
                                type="text"
                                placeholder="First name"
                                prop:value=move || form.with(|f| f.first_name.clone())
                                on:input=move |ev| form.update(|f| f.first_name = event_target_value(&ev))
                            />
                        </label>
                        <label class="field">
                            "Last name"
                            <input
                                type="text"
                                placeholder="Last name"
                                prop:value=move || form.with(|f| f.last_name.clone())
                                on:input=move |ev| form.update(|f| f.last_name = event_target_value(&ev))
                            />
                        </label>
                    </div>
                    {field_error(|e| e.first_name.clone())}
                    {field_error(|e| e.last_name.clone())}
                    <label class="field">
                        "Email"
                        <input
                            type="email"
                            placeholder="Enter your email"
                            prop:value=move || form.with(|f| f.email.clone())
                            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                        />
                    </label>
                    {field_error(|e| e.email.clone())}
                    <label class="field">
                        "Password"
                        <input
                            type="password"
                            placeholder="Create a password"
                            prop:value=move || form.with(|f| f.password.clone())
                            on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                        />
                    </label>
                    {field_error(|e| e.password.clone())}
                    <label class="field">
                        "Confirm password"
                        <input
                            type="password"
                            placeholder="Confirm your password"
                            prop:value=move || form.with(|f| f.confirm_password.clone())
                            on:input=move |ev| form.update(|f| f.confirm_password = event_target_value(&ev))
                        />
                    </label>
                    {field_error(|e| e.confirm_password.clone())}
                    <label class="field field--checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || form.with(|f| f.agreed_to_terms)
                            on:change=move |ev| form.update(|f| f.agreed_to_terms = event_target_checked(&ev))
                        />
                        "I agree to the terms and conditions"
                    </label>
                    {field_error(|e| e.terms.clone())}
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Sign up" }}
                    </button>
                </form>
                <p class="auth-card__switch">
                    "Already have an account? "
                    <a href=View::SignIn.path() on:click=on_sign_in>"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
