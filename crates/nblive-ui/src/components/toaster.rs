//! Notification surface for transient notices

use leptos::prelude::*;

use crate::components::icons::{Icon, IconSvg};
use crate::models::notice::Notice;
use crate::state::LandingState;

#[component]
pub fn Toaster(state: LandingState) -> impl IntoView {
    view! {
        <ol class="toaster" aria-live="polite">
            <For
                each=move || state.notices.with(|queue| queue.items().to_vec())
                key=|notice| notice.id
                children=move |notice: Notice| {
                    let id = notice.id;
                    view! {
                        <li class="toast" role="status">
                            <div class="toast-body">
                                <div class="toast-title">{notice.title}</div>
                                <div class="toast-description">{notice.description}</div>
                            </div>
                            <button
                                type="button"
                                class="toast-close"
                                aria-label="Dismiss"
                                on:click=move |_| state.dismiss_notice(id)
                            >
                                <IconSvg icon=Icon::X classes="icon-sm" />
                            </button>
                        </li>
                    }
                }
            />
        </ol>
    }
}
