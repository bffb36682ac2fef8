//! Hero banner with the two headline calls to action

use leptos::prelude::*;

use crate::components::icons::{Icon, IconSvg};
use crate::components::ui::{Button, ButtonVariant};
use crate::components::{reveal_class, scroll_to};
use crate::content::{COMPANY_NAME, HERO_IMAGE_URL, HERO_PRIMARY_CTA, HERO_SECONDARY_CTA};
use crate::models::section::SectionId;
use crate::state::LandingState;

#[component]
pub fn Hero(state: LandingState) -> impl IntoView {
    let section = SectionId::Home;

    view! {
        <section
            id=section.anchor()
            class=move || reveal_class("hero", state.is_seen(section))
        >
            <div class="hero-backdrop" aria-hidden="true"></div>
            <div class="container hero-grid">
                <div class="animate-slide-up">
                    <h1 class="hero-title">
                        "Transform Your Business with "
                        <span class="gradient-text">"AI Innovation"</span>
                    </h1>
                    <p class="hero-lead">
                        {COMPANY_NAME}
                        " delivers cutting-edge artificial intelligence solutions that revolutionize how you work, "
                        "analyze data, and make decisions. Experience the future of business intelligence today."
                    </p>
                    <div class="hero-actions">
                        <Button
                            large=true
                            classes="hover-glow"
                            on_press=scroll_to(state, HERO_PRIMARY_CTA.target)
                        >
                            {HERO_PRIMARY_CTA.label}
                            <IconSvg icon=Icon::ArrowRight classes="icon-sm ml-2" />
                        </Button>
                        <Button
                            variant=ButtonVariant::Outline
                            large=true
                            on_press=scroll_to(state, HERO_SECONDARY_CTA.target)
                        >
                            {HERO_SECONDARY_CTA.label}
                        </Button>
                    </div>
                </div>

                <div class="hero-visual">
                    <div class="animate-float">
                        <img src=HERO_IMAGE_URL alt="AI Technology" class="hero-image" />
                    </div>
                    <div class="orb orb-bottom animate-glow" aria-hidden="true"></div>
                    <div class="orb orb-top animate-pulse" aria-hidden="true"></div>
                </div>
            </div>
        </section>
    }
}
