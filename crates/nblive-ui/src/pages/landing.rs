//! Landing page body: the four sections plus visibility tracking

use leptos::prelude::*;

use crate::components::{About, ContactSection, Hero, Services};
use crate::interaction::visibility::{DomViewportObserver, VisibilityTracker};
use crate::state::LandingState;

/// Renders the sections and watches them for the reveal animation
///
/// Observation starts once the sections are mounted and is disconnected when
/// the component is cleaned up. If the browser cannot observe intersections,
/// every section is revealed immediately.
#[component]
pub fn LandingPage(state: LandingState, root_margin: String) -> impl IntoView {
    let tracker = StoredValue::new_local(None::<VisibilityTracker<DomViewportObserver>>);

    Effect::new(move |_| {
        let started = DomViewportObserver::new(state.threshold(), &root_margin, move |reports| {
            state.record_reports(&reports);
        })
        .and_then(|dom_observer| {
            let mut watcher = VisibilityTracker::new(dom_observer);
            watcher.start().map(|_| watcher)
        });

        match started {
            Ok(watcher) => tracker.set_value(Some(watcher)),
            Err(e) => {
                tracing::warn!(error = %e, "viewport observation unavailable, revealing all sections");
                state.reveal_all();
            }
        }
    });

    on_cleanup(move || {
        tracker.try_update_value(|slot| {
            if let Some(mut watcher) = slot.take() {
                watcher.teardown();
            }
        });
    });

    view! {
        <main>
            <Hero state=state />
            <Services state=state />
            <About state=state />
            <ContactSection state=state />
        </main>
    }
}
