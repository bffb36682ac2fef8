//! Services grid

use leptos::prelude::*;

use crate::components::icons::IconSvg;
use crate::components::reveal_class;
use crate::components::ui::{Bullet, Card};
use crate::content::{SERVICES, Service};
use crate::models::section::SectionId;
use crate::state::LandingState;

#[component]
pub fn Services(state: LandingState) -> impl IntoView {
    let section = SectionId::Services;

    view! {
        <section
            id=section.anchor()
            class=move || reveal_class("section section-muted", state.is_seen(section))
        >
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Our AI Solutions"</h2>
                    <p class="section-lead">
                        "Comprehensive AI services designed to accelerate your digital transformation"
                    </p>
                </div>

                <div class="services-grid">
                    {SERVICES.iter().map(|service| view! { <ServiceCard service=*service /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ServiceCard(service: Service) -> impl IntoView {
    view! {
        <Card classes="service-card">
            <div class="service-icon">
                <IconSvg icon=service.icon classes="icon-lg" />
            </div>
            <h3 class="card-title">{service.title}</h3>
            <p class="card-text">{service.description}</p>
            <ul class="feature-list">
                {service
                    .features
                    .into_iter()
                    .map(|feature| {
                        view! {
                            <li>
                                <Bullet accent="accent-blue" />
                                {feature}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </Card>
    }
}
