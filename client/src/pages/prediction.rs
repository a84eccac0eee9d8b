//! Prediction page hosting the price, recommendation and explorer tabs.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every tab submits through one gated callback. Signed-in users dispatch
//! immediately; everyone else gets the login-required dialog, whose confirm
//! carries the intent to `/signin`. On arrival the page consumes whatever was
//! carried back: it selects the intent's tab, pre-fills the form and, when
//! the resume controller approved replay, dispatches exactly once.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::explorer::{self, ExplorerTab};
use crate::components::login_required::{LoginRequiredDialog, prompt_for};
use crate::components::predict_price::{self, PredictPriceTab};
use crate::components::recommendations::{self, RecommendationsTab};
use crate::state::auth_resume::{AuthResumeController, Outcome, defer_to_auth, take_resume};
use crate::state::intent::{Intent, IntentPayload};
use crate::state::navigation::{CarriedState, NavigationState, View};
use crate::state::prediction::{ExplorerState, PredictionTab, PricePredictionState, RecommendationsState, prefill};
use crate::state::session::BrowserSessionStore;

/// Signals for the three tabs, bundled for dispatch.
#[derive(Clone, Copy)]
struct Tabs {
    active: RwSignal<PredictionTab>,
    price: RwSignal<PricePredictionState>,
    recommendations: RwSignal<RecommendationsState>,
    explorer: RwSignal<ExplorerState>,
}

impl Tabs {
    fn from_context() -> Self {
        Self {
            active: expect_context::<RwSignal<PredictionTab>>(),
            price: expect_context::<RwSignal<PricePredictionState>>(),
            recommendations: expect_context::<RwSignal<RecommendationsState>>(),
            explorer: expect_context::<RwSignal<ExplorerState>>(),
        }
    }

    fn dispatch(self, payload: IntentPayload) {
        match payload {
            IntentPayload::PricePrediction(form) => predict_price::dispatch(self.price, form),
            IntentPayload::Recommendation { budget_rial } => recommendations::dispatch(self.recommendations, budget_rial),
            IntentPayload::Search { term } => explorer::dispatch(self.explorer, term),
        }
    }

    fn resume(self, carried: CarriedState) {
        let payload = carried.intent.payload;
        self.active.set(payload.tab());

        let mut price = self.price.get_untracked();
        let mut recommendations = self.recommendations.get_untracked();
        let mut explorer = self.explorer.get_untracked();
        prefill(&payload, &mut price, &mut recommendations, &mut explorer);
        self.price.set(price);
        self.recommendations.set(recommendations);
        self.explorer.set(explorer);

        if carried.replay {
            leptos::logging::log!("intent {}: replaying {}", carried.intent.id, payload.kind());
            self.dispatch(payload);
        }
    }
}

#[component]
pub fn PredictionPage() -> impl IntoView {
    let navigation = expect_context::<RwSignal<NavigationState>>();
    let tabs = Tabs::from_context();
    let navigate = use_navigate();

    navigation.update(|nav| nav.arrive(View::Prediction));
    if let Some(carried) = navigation.try_update(|nav| take_resume(nav, View::Prediction)).flatten() {
        tabs.resume(carried);
    }

    let pending = RwSignal::new(None::<Intent>);
    let redirect = RwSignal::new(None::<View>);

    Effect::new(move || {
        if let Some(view) = redirect.get() {
            redirect.set(None);
            navigate(view.path(), NavigateOptions::default());
        }
    });

    let on_submit = Callback::new(move |intent: Intent| {
        let controller = AuthResumeController::new(BrowserSessionStore);
        match controller.attempt(&intent) {
            Outcome::Proceed => tabs.dispatch(intent.payload),
            Outcome::Defer => pending.set(Some(intent)),
        }
    });

    let on_confirm = Callback::new(move |()| {
        let Some(intent) = pending.get_untracked() else {
            return;
        };
        pending.set(None);
        navigation.update(|nav| defer_to_auth(nav, View::SignIn, intent));
        redirect.set(Some(View::SignIn));
    });
    let on_cancel = Callback::new(move |()| pending.set(None));
    let message = Signal::derive(move || pending.with(|p| p.as_ref().map_or("", |intent| prompt_for(&intent.payload))));

    view! {
        <div class="prediction-page">
            <nav class="tab-bar">
                {PredictionTab::ALL
                    .into_iter()
                    .map(|t| {
                        view! {
                            <button
                                class="tab-bar__tab"
                                class:tab-bar__tab--active=move || tabs.active.get() == t
                                on:click=move |_| tabs.active.set(t)
                            >
                                {t.label()}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>
            <div class="tab-panel">
                {move || match tabs.active.get() {
                    PredictionTab::PredictPrice => view! { <PredictPriceTab on_submit=on_submit/> }.into_any(),
                    PredictionTab::Recommendations => view! { <RecommendationsTab on_submit=on_submit/> }.into_any(),
                    PredictionTab::Explorer => view! { <ExplorerTab on_submit=on_submit/> }.into_any(),
                }}
            </div>
            <Show when=move || pending.with(Option::is_some)>
                <LoginRequiredDialog message=message on_confirm=on_confirm on_cancel=on_cancel/>
            </Show>
        </div>
    }
}
