//! Car-explorer tab: free-text search over marketplace listings.

use leptos::prelude::*;

use crate::net::types::{CarSearchResult, ListingSource};
use crate::state::intent::{Intent, IntentPayload};
use crate::state::prediction::{ExplorerState, RequestState};
use crate::util::format::{format_amount, toman_to_rial};

/// Search listings for `term`; results land in `state`.
pub fn dispatch(state: RwSignal<ExplorerState>, term: String) {
    let term = term.trim().to_owned();
    if term.is_empty() {
        state.update(|s| s.fail("Enter a car name to search.".to_owned()));
        return;
    }
    state.update(|s| s.begin());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use crate::state::session::{BrowserSessionStore, SessionStore};

        let token = BrowserSessionStore.access_token();
        match crate::net::api::search_cars(&term, token.as_deref()).await {
            Ok(result) => state.update(|s| s.succeed(result.data)),
            Err(e) => {
                leptos::logging::warn!("listing search failed: {e}");
                state.update(|s| s.fail(e));
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = term;
}

#[component]
pub fn ExplorerTab(on_submit: Callback<Intent>) -> impl IntoView {
    let state = expect_context::<RwSignal<ExplorerState>>();

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if state.get_untracked().loading {
            return;
        }
        let term = state.with_untracked(|s| s.term.trim().to_owned());
        if term.is_empty() {
            state.update(|s| s.error = Some("Enter a car name to search.".to_owned()));
            return;
        }
        on_submit.run(Intent::new(IntentPayload::Search { term }));
    };

    view! {
        <form class="tab-form explorer" on:submit=on_form_submit>
            <input
                class="explorer__search"
                type="text"
                placeholder="Enter car name to search..."
                prop:value=move || state.with(|s| s.term.clone())
                on:input=move |ev| state.update(|s| s.term = event_target_value(&ev))
            />
            <button class="btn btn--primary" type="submit" disabled=move || state.get().loading>
                {move || if state.get().loading { "Searching..." } else { "Search" }}
            </button>

            <Show when=move || state.get().error.is_some()>
                <p class="tab-form__error">{move || state.get().error.unwrap_or_default()}</p>
            </Show>
            <Show when=move || state.get().has_searched && state.get().results.is_empty() && state.get().error.is_none()>
                <p class="placeholder-text">"No cars found."</p>
            </Show>
            <div class="listing-grid">
                {move || state.get().results.into_iter().map(|listing| view! { <ListingCard listing=listing/> }).collect::<Vec<_>>()}
            </div>
        </form>
    }
}

#[component]
fn ListingCard(listing: CarSearchResult) -> impl IntoView {
    let source = listing.source.as_deref().and_then(ListingSource::parse);
    let price_rial = format_amount(toman_to_rial(listing.price));
    view! {
        <div class="listing-card">
            {listing.image.clone().map(|src| view! { <img class="listing-card__image" src=src alt=listing.name.clone()/> })}
            {source.map(|s| view! { <img class="listing-card__source" src=s.logo_url() alt=s.label()/> })}
            <div class="listing-card__name">{listing.name.clone()}</div>
            <div class="price-value">{format!("{price_rial} Rial")}</div>
            {listing.link.clone().map(|href| {
                view! {
                    <a class="btn listing-card__link" href=href target="_blank" rel="noopener noreferrer">
                        "View listing"
                    </a>
                }
            })}
        </div>
    }
}
