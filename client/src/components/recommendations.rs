//! Recommendations tab: a Rial budget in, a list of suggested cars out.
//!
//! The budget is typed and shown in Rial but the upstream works in Toman, so
//! it is converted on the way out and prices are converted back for display.

use leptos::prelude::*;

use crate::net::types::SuggestedCar;
use crate::state::intent::{Intent, IntentPayload, recommendation_price};
use crate::state::prediction::{RecommendationsState, RequestState};
use crate::util::format::{
    digits_only, display_mileage, display_year, engine_status_label, format_amount, group_digit_string,
    normalize_digits, toman_to_rial,
};

/// Fetch recommendations for a budget in Rial; results land in `state`.
pub fn dispatch(state: RwSignal<RecommendationsState>, budget_rial: u64) {
    if budget_rial == 0 {
        state.update(|s| s.fail("Please enter a valid budget.".to_owned()));
        return;
    }
    let price_toman = recommendation_price(budget_rial);
    state.update(|s| s.begin());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use crate::state::session::{BrowserSessionStore, SessionStore};

        let token = BrowserSessionStore.access_token();
        match crate::net::api::fetch_recommendations(price_toman, token.as_deref()).await {
            Ok(result) => state.update(|s| s.succeed(result.suggested_cars)),
            Err(e) => {
                leptos::logging::warn!("recommendations failed: {e}");
                state.update(|s| s.fail("Failed to fetch recommendations.".to_owned()));
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = price_toman;
}

#[component]
pub fn RecommendationsTab(on_submit: Callback<Intent>) -> impl IntoView {
    let state = expect_context::<RwSignal<RecommendationsState>>();

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if state.get_untracked().loading {
            return;
        }
        let budget_rial = state.with_untracked(|s| s.budget.parse::<u64>().unwrap_or(0));
        if budget_rial == 0 {
            state.update(|s| s.error = Some("Please enter a valid budget.".to_owned()));
            return;
        }
        on_submit.run(Intent::new(IntentPayload::Recommendation { budget_rial }));
    };

    view! {
        <form class="tab-form recommendations" on:submit=on_form_submit>
            <label class="field">
                "Budget (Rial)"
                <input
                    type="text"
                    inputmode="numeric"
                    placeholder="Enter your budget in Rial (e.g., 1,000,000)"
                    prop:value=move || group_digit_string(&state.with(|s| s.budget.clone()))
                    on:input=move |ev| state.update(|s| s.budget = digits_only(&event_target_value(&ev)))
                />
            </label>
            <button class="btn btn--primary" type="submit" disabled=move || state.get().loading>
                {move || if state.get().loading { "Searching..." } else { "Get Recommendations" }}
            </button>

            <Show when=move || state.get().error.is_some()>
                <p class="tab-form__error">{move || state.get().error.unwrap_or_default()}</p>
            </Show>
            <Show
                when=move || !state.get().items.is_empty()
                fallback=move || {
                    view! {
                        <p class="placeholder-text">
                            {move || {
                                if state.get().has_searched {
                                    "No cars found within this budget."
                                } else {
                                    "Enter your budget above to discover personalized car recommendations"
                                }
                            }}
                        </p>
                    }
                }
            >
                <div class="recommendation-list">
                    {move || state.get().items.into_iter().map(|car| view! { <RecommendationCard car=car/> }).collect::<Vec<_>>()}
                </div>
            </Show>
        </form>
    }
}

#[component]
fn RecommendationCard(car: SuggestedCar) -> impl IntoView {
    let price_rial = format_amount(toman_to_rial(car.predicted_price));
    let usd = car.price_usd.map(format_amount);
    view! {
        <div class="recommendation-card">
            <div class="recommendation-card__title">
                <b>{format!("{} {}", car.name, car.model)}</b>
                <span class="recommendation-card__year">{display_year(&car.year)}</span>
            </div>
            <div class="recommendation-card__details">
                <span>"Gearbox: " <b>{car.gearbox.clone().unwrap_or_else(|| "N/A".to_owned())}</b></span>
                <span>"Mile: " <b>{display_mileage(&car.mile)}</b></span>
            </div>
            <div class="recommendation-card__details">
                <span>"Body Health: " <b>{normalize_digits(&car.body_health)}</b></span>
                <span>"Engine Status: " <b>{engine_status_label(car.engine_status.as_deref())}</b></span>
            </div>
            <div class="recommendation-card__price">
                <span class="price-value">{format!("{price_rial} Rial")}</span>
                {usd.map(|usd| view! { <span class="price-value price-value--usd">{format!("${usd} USD")}</span> })}
            </div>
        </div>
    }
}
