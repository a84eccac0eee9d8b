//! Landing page with entry points into the prediction tools.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::navigation::{NavigationState, View};
use crate::state::session::AuthState;

#[component]
pub fn LandingPage() -> impl IntoView {
    let navigation = expect_context::<RwSignal<NavigationState>>();
    let auth = expect_context::<RwSignal<AuthState>>();

    navigation.update(|nav| nav.arrive(View::Landing));

    view! {
        <section class="landing">
            <h1 class="landing__title">"Know what a car is worth"</h1>
            <p class="landing__subtitle">
                "Predict used-car prices, get recommendations for your budget, and browse current listings."
            </p>
            <div class="landing__actions">
                <A href=View::Prediction.path() attr:class="btn btn--primary">"Try a prediction"</A>
                <Show when=move || !auth.get().signed_in>
                    <A href=View::SignUp.path() attr:class="btn btn--secondary">"Create an account"</A>
                </Show>
            </div>
        </section>
    }
}
