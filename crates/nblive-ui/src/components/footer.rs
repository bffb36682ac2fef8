//! Page footer: brand blurb, service list and company links

use leptos::prelude::*;

use crate::components::icons::{Icon, IconSvg};
use crate::components::scroll_to;
use crate::components::ui::{Button, ButtonVariant};
use crate::content::{COMPANY_NAME, CONTACT_EMAIL, FOOTER_LINKS, FOOTER_SERVICES, WEBSITE};
use crate::state::LandingState;

#[component]
pub fn Footer(state: LandingState) -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container footer-grid">
                <div>
                    <div class="brand">
                        <IconSvg icon=Icon::Brain classes="icon-lg text-blue-light" />
                        <span class="brand-name">{COMPANY_NAME}</span>
                    </div>
                    <p class="footer-text">
                        "Transforming businesses across South Africa with cutting-edge AI solutions."
                    </p>
                    <div class="footer-text">
                        <p>{format!("Email: {CONTACT_EMAIL}")}</p>
                        <p>{format!("Website: {WEBSITE}")}</p>
                    </div>
                </div>

                <div>
                    <h4 class="footer-heading">"Services"</h4>
                    <ul class="footer-list">
                        {FOOTER_SERVICES.iter().map(|name| view! { <li>{*name}</li> }).collect_view()}
                    </ul>
                </div>

                <div>
                    <h4 class="footer-heading">"Company"</h4>
                    <ul class="footer-list">
                        {FOOTER_LINKS
                            .iter()
                            .map(|link| {
                                view! {
                                    <li>
                                        <Button
                                            variant=ButtonVariant::Link
                                            classes="footer-link"
                                            on_press=scroll_to(state, link.target)
                                        >
                                            {link.label}
                                        </Button>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
            </div>

            <div class="container footer-bottom">
                <p>
                    {format!(
                        "\u{a9} 2024 {COMPANY_NAME}. All rights reserved. Transforming the future with artificial intelligence."
                    )}
                </p>
            </div>
        </footer>
    }
}
