//! Site header with primary navigation and session controls.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::state::navigation::{NavigationState, Navigator, View};
use crate::state::session::{AuthState, BrowserSessionStore, SessionWriter};

#[component]
pub fn Header() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigation = expect_context::<RwSignal<NavigationState>>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        BrowserSessionStore.clear();
        auth.set(AuthState { signed_in: false });
        navigation.update(|nav| nav.navigate_to(View::Landing, None));
        leptos::logging::log!("session cleared by log-out");
        navigate(View::Landing.path(), NavigateOptions::default());
    };

    view! {
        <header class="site-header">
            <A href=View::Landing.path() attr:class="site-header__brand">"Caralytix"</A>
            <nav class="site-header__nav">
                <A href=View::Prediction.path()>"Prediction"</A>
            </nav>
            <span class="site-header__spacer"></span>
            <Show
                when=move || auth.get().signed_in
                fallback=move || {
                    view! {
                        <div class="site-header__auth">
                            <A href=View::SignIn.path() attr:class="btn btn--secondary">"Sign in"</A>
                            <A href=View::SignUp.path() attr:class="btn btn--primary">"Sign up"</A>
                        </div>
                    }
                }
            >
                <button class="btn btn--secondary site-header__logout" on:click=on_logout.clone()>
                    "Log out"
                </button>
            </Show>
        </header>
    }
}
