//! About section: company pitch, headline stats and the consultation call to action

use leptos::prelude::*;

use crate::components::icons::{Icon, IconSvg};
use crate::components::ui::{Button, ButtonVariant};
use crate::components::{reveal_class, scroll_to};
use crate::content::{ABOUT_CTA, ABOUT_IMAGE_URL, COMPANY_NAME, STATS};
use crate::models::section::SectionId;
use crate::state::LandingState;

#[component]
pub fn About(state: LandingState) -> impl IntoView {
    let section = SectionId::About;

    view! {
        <section
            id=section.anchor()
            class=move || reveal_class("section", state.is_seen(section))
        >
            <div class="container split-grid">
                <div>
                    <img src=ABOUT_IMAGE_URL alt="AI Development Team" class="about-image" />
                </div>
                <div>
                    <h2 class="section-title">"Leading AI Innovation in South Africa"</h2>
                    <p class="section-text">
                        {COMPANY_NAME}
                        " is at the forefront of artificial intelligence development, bringing world-class AI solutions "
                        "to businesses across South Africa. Our team of expert data scientists and AI engineers are passionate "
                        "about creating intelligent systems that drive real business value."
                    </p>
                    <div class="stats-grid">
                        {STATS
                            .iter()
                            .map(|stat| {
                                view! {
                                    <div class="stat">
                                        <div class=format!("stat-value {}", stat.accent.class())>
                                            {stat.value}
                                        </div>
                                        <div class="stat-label">{stat.label}</div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                    <Button
                        variant=ButtonVariant::Gradient
                        large=true
                        on_press=scroll_to(state, ABOUT_CTA.target)
                    >
                        {ABOUT_CTA.label}
                        <IconSvg icon=Icon::ArrowRight classes="icon-sm ml-2" />
                    </Button>
                </div>
            </div>
        </section>
    }
}
