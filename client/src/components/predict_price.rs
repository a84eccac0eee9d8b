//! Price-prediction tab: car details form and predicted price.
//!
//! Brands load once on mount; models reload whenever the selected brand
//! changes, including when a carried intent pre-fills the form.

#[cfg(test)]
#[path = "predict_price_test.rs"]
mod predict_price_test;

use leptos::prelude::*;

use crate::net::types::{EngineStatus, Gearbox};
use crate::state::intent::{BODY_HEALTH_MAX, BODY_HEALTH_MIN, Intent, IntentPayload, PredictionForm};
use crate::state::prediction::{PricePredictionState, RequestState};
use crate::util::format::format_amount;

/// Validate `form` and send it; results land in `price`.
pub fn dispatch(price: RwSignal<PricePredictionState>, form: PredictionForm) {
    let request = match form.to_request() {
        Ok(request) => request,
        Err(message) => {
            price.update(|s| s.fail(message));
            return;
        }
    };
    price.update(|s| s.begin());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use crate::state::session::{BrowserSessionStore, SessionStore};

        let token = BrowserSessionStore.access_token();
        match crate::net::api::predict_price(&request, token.as_deref()).await {
            Ok(result) => price.update(|s| s.succeed(result.predicted_price)),
            Err(e) => {
                leptos::logging::warn!("price prediction failed: {e}");
                price.update(|s| s.fail("Failed to get prediction. Please try again.".to_owned()));
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = request;
}

/// Options for a `<select>`, each flagged when it matches `selected`.
///
/// A pre-filled value missing from `loaded` (the list has not arrived yet,
/// or failed) is kept as the first option so the form never shows it blank.
#[must_use]
pub fn select_options(loaded: &[String], selected: &str) -> Vec<(String, bool)> {
    let mut options: Vec<(String, bool)> =
        loaded.iter().map(|option| (option.clone(), option == selected)).collect();
    if !selected.is_empty() && !loaded.iter().any(|option| option == selected) {
        options.insert(0, (selected.to_owned(), true));
    }
    options
}

#[component]
pub fn PredictPriceTab(on_submit: Callback<Intent>) -> impl IntoView {
    let price = expect_context::<RwSignal<PricePredictionState>>();
    let brands = RwSignal::new(Vec::<String>::new());
    let models = RwSignal::new(Vec::<String>::new());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_car_names().await {
            Ok(names) => brands.set(names.into_iter().map(|n| n.name).collect()),
            Err(e) => leptos::logging::warn!("car brands unavailable: {e}"),
        }
    });

    Effect::new(move || {
        let name = price.with(|s| s.form.name.clone());
        models.set(Vec::new());
        if name.is_empty() {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_car_models(&name).await {
                Ok(list) => models.set(list.into_iter().map(|m| m.model).collect()),
                Err(e) => leptos::logging::warn!("car models unavailable for {name}: {e}"),
            }
        });
    });

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if price.get_untracked().loading {
            return;
        }
        let form = price.get_untracked().form;
        if let Err(message) = form.to_request() {
            price.update(|s| s.error = Some(message));
            return;
        }
        on_submit.run(Intent::new(IntentPayload::PricePrediction(form)));
    };

    view! {
        <form class="tab-form predict-price" on:submit=on_form_submit>
            <label class="field">
                "Brand"
                <select
                    prop:value=move || {
                        brands.track();
                        price.with(|s| s.form.name.clone())
                    }
                    on:change=move |ev| {
                        let name = event_target_value(&ev);
                        price.update(|s| {
                            s.form.name = name;
                            s.form.model.clear();
                        });
                    }
                >
                    <option value="">"Select name"</option>
                    {move || {
                        let selected = price.with(|s| s.form.name.clone());
                        brands
                            .with(|loaded| select_options(loaded, &selected))
                            .into_iter()
                            .map(|(name, on)| view! { <option value=name.clone() selected=on>{name.clone()}</option> })
                            .collect::<Vec<_>>()
                    }}
                </select>
            </label>
            <label class="field">
                "Model"
                <select
                    prop:value=move || {
                        models.track();
                        price.with(|s| s.form.model.clone())
                    }
                    on:change=move |ev| price.update(|s| s.form.model = event_target_value(&ev))
                >
                    <option value="">"Select model"</option>
                    {move || {
                        let selected = price.with(|s| s.form.model.clone());
                        models
                            .with(|loaded| select_options(loaded, &selected))
                            .into_iter()
                            .map(|(model, on)| view! { <option value=model.clone() selected=on>{model.clone()}</option> })
                            .collect::<Vec<_>>()
                    }}
                </select>
            </label>
            <label class="field">
                "Gearbox"
                <select
                    prop:value=move || if price.with(|s| s.form.gearbox) == Gearbox::Manual { "manual" } else { "automatic" }
                    on:change=move |ev| {
                        let gearbox = if event_target_value(&ev) == "manual" { Gearbox::Manual } else { Gearbox::Automatic };
                        price.update(|s| s.form.gearbox = gearbox);
                    }
                >
                    <option value="automatic">"Automatic"</option>
                    <option value="manual">"Manual"</option>
                </select>
            </label>
            <label class="field">
                "Mileage"
                <input
                    type="text"
                    inputmode="numeric"
                    placeholder="e.g. 10000"
                    prop:value=move || price.with(|s| s.form.mile.clone())
                    on:input=move |ev| price.update(|s| s.form.mile = event_target_value(&ev))
                />
            </label>
            <label class="field">
                "Year"
                <input
                    type="text"
                    inputmode="numeric"
                    placeholder="e.g. 2020"
                    prop:value=move || price.with(|s| s.form.year.clone())
                    on:input=move |ev| price.update(|s| s.form.year = event_target_value(&ev))
                />
            </label>
            <label class="field">
                {move || format!("Body health: {:.1}", price.with(|s| s.form.body_health))}
                <input
                    type="range"
                    min=BODY_HEALTH_MIN.to_string()
                    max=BODY_HEALTH_MAX.to_string()
                    step="0.1"
                    prop:value=move || price.with(|s| s.form.body_health).to_string()
                    on:input=move |ev| {
                        if let Ok(value) = event_target_value(&ev).parse::<f64>() {
                            price.update(|s| s.form.body_health = value.clamp(BODY_HEALTH_MIN, BODY_HEALTH_MAX));
                        }
                    }
                />
            </label>
            <label class="field field--switch">
                <input
                    type="checkbox"
                    prop:checked=move || price.with(|s| s.form.engine_status) == EngineStatus::Replaced
                    on:change=move |ev| {
                        let status = if event_target_checked(&ev) { EngineStatus::Replaced } else { EngineStatus::Original };
                        price.update(|s| s.form.engine_status = status);
                    }
                />
                {move || format!("Engine: {}", price.with(|s| s.form.engine_status).label())}
            </label>
            <button class="btn btn--primary" type="submit" disabled=move || price.get().loading>
                {move || if price.get().loading { "Predicting..." } else { "Predict Price" }}
            </button>

            <Show when=move || price.get().error.is_some()>
                <p class="tab-form__error">{move || price.get().error.unwrap_or_default()}</p>
            </Show>
            <Show when=move || price.get().predicted_price.is_some()>
                <div class="prediction-result">
                    <span class="prediction-result__label">"Predicted price"</span>
                    <span class="prediction-result__value">
                        {move || price.get().predicted_price.map(format_amount).unwrap_or_default()}
                    </span>
                </div>
            </Show>
        </form>
    }
}
