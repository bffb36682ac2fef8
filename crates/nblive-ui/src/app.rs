//! Root application component

use leptos::prelude::*;

use crate::components::{Footer, NavBar, Toaster};
use crate::config::LandingConfig;
use crate::pages::LandingPage;
use crate::state::LandingState;

/// Root of the landing page
///
/// Owns the page state; every section receives it as a prop. The observer
/// threshold is resolved here once and carried by the state.
#[component]
pub fn App(#[prop(optional)] config: LandingConfig) -> impl IntoView {
    let threshold = config.observer.threshold_or_default();
    let state = LandingState::new(threshold, &config.notices);

    view! {
        <div class="page">
            <NavBar state=state />
            <LandingPage state=state root_margin=config.observer.root_margin />
            <Footer state=state />
            <Toaster state=state />
        </div>
    }
}
