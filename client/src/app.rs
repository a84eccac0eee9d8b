//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::header::Header;
use crate::pages::{landing::LandingPage, prediction::PredictionPage, sign_in::SignInPage, sign_up::SignUpPage};
use crate::state::navigation::NavigationState;
use crate::state::prediction::{ExplorerState, PredictionTab, PricePredictionState, RecommendationsState};
use crate::state::session::AuthState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let navigation = RwSignal::new(NavigationState::default());
    let auth = RwSignal::new(AuthState::default());
    let tab = RwSignal::new(PredictionTab::default());
    let price = RwSignal::new(PricePredictionState::default());
    let recommendations = RwSignal::new(RecommendationsState::default());
    let explorer = RwSignal::new(ExplorerState::default());

    provide_context(navigation);
    provide_context(auth);
    provide_context(tab);
    provide_context(price);
    provide_context(recommendations);
    provide_context(explorer);

    // Tokens live in localStorage, so the signed-in flag is only known once
    // hydrated.
    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        auth.set(AuthState::from_store(&crate::state::session::BrowserSessionStore));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/caralytix.css"/>
        <Title text="Caralytix"/>

        <Router>
            <Header/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=LandingPage/>
                    <Route path=StaticSegment("signin") view=SignInPage/>
                    <Route path=StaticSegment("signup") view=SignUpPage/>
                    <Route path=StaticSegment("prediction") view=PredictionPage/>
                </Routes>
            </main>
        </Router>
    }
}
