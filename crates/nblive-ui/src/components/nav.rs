//! Fixed navigation bar with desktop links and the mobile menu

use leptos::prelude::*;

use crate::components::icons::{Icon, IconSvg};
use crate::components::scroll_to;
use crate::components::ui::{Button, ButtonVariant};
use crate::content::{COMPANY_NAME, NAV_CTA};
use crate::models::section::SectionId;
use crate::state::LandingState;

#[component]
pub fn NavBar(state: LandingState) -> impl IntoView {
    view! {
        <nav class="navbar">
            <div class="container navbar-inner">
                <div class="brand">
                    <IconSvg icon=Icon::Brain classes="icon-lg text-blue" />
                    <span class="brand-name">{COMPANY_NAME}</span>
                </div>

                <div class="nav-desktop">
                    {SectionId::ALL
                        .into_iter()
                        .map(|section| {
                            view! {
                                <Button
                                    variant=ButtonVariant::Link
                                    classes="nav-link"
                                    on_press=scroll_to(state, section)
                                >
                                    {section.nav_label()}
                                </Button>
                            }
                        })
                        .collect_view()}
                    <Button on_press=scroll_to(state, NAV_CTA.target)>{NAV_CTA.label}</Button>
                </div>

                <button
                    type="button"
                    class="nav-toggle"
                    aria-label="Toggle navigation menu"
                    aria-expanded=move || state.menu_open().to_string()
                    on:click=move |_| state.toggle_menu()
                >
                    {move || {
                        let icon = if state.menu_open() { Icon::X } else { Icon::Menu };
                        view! { <IconSvg icon=icon classes="icon-md" /> }
                    }}
                </button>
            </div>

            <Show when=move || state.menu_open()>
                <MobileMenu state=state />
            </Show>
        </nav>
    }
}

#[component]
fn MobileMenu(state: LandingState) -> impl IntoView {
    view! {
        <div class="nav-mobile">
            {SectionId::ALL
                .into_iter()
                .map(|section| {
                    view! {
                        <Button
                            variant=ButtonVariant::Link
                            classes="nav-mobile-link"
                            on_press=scroll_to(state, section)
                        >
                            {section.nav_label()}
                        </Button>
                    }
                })
                .collect_view()}
        </div>
    }
}
