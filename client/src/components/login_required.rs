//! Dialog asking a signed-out user to sign in before a gated action runs.

#[cfg(test)]
#[path = "login_required_test.rs"]
mod login_required_test;

use leptos::prelude::*;

use crate::state::intent::IntentPayload;

/// Body text for the dialog, by action.
#[must_use]
pub fn prompt_for(payload: &IntentPayload) -> &'static str {
    match payload {
        IntentPayload::PricePrediction(_) => "Please sign in to get your car price prediction.",
        IntentPayload::Recommendation { .. } => "Please sign in to get car recommendations.",
        IntentPayload::Search { .. } => "Please sign in to search for cars.",
    }
}

/// Shown while a deferred intent waits for the user's choice.
#[component]
pub fn LoginRequiredDialog(message: Signal<&'static str>, on_confirm: Callback<()>, on_cancel: Callback<()>) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog dialog--login-required" on:click=move |ev| ev.stop_propagation()>
                <h2 class="dialog__title">"Login Required"</h2>
                <p class="dialog__text">{move || message.get()}</p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| on_confirm.run(())>
                        "Sign in"
                    </button>
                </div>
            </div>
        </div>
    }
}
