//! Contact section: the local-only form and the company's contact details

use leptos::prelude::*;

use crate::components::icons::{Icon, IconSvg};
use crate::components::reveal_class;
use crate::components::ui::{Bullet, Button, ButtonVariant, Card};
use crate::content::{COMPANY_NAME, CONTACT_DETAILS, WHY_CHOOSE};
use crate::models::contact::ContactField;
use crate::models::section::SectionId;
use crate::state::LandingState;

/// DOM id of the input backing `field`
#[must_use]
pub const fn input_id(field: ContactField) -> &'static str {
    match field {
        ContactField::FirstName => "contact-first-name",
        ContactField::LastName => "contact-last-name",
        ContactField::Email => "contact-email",
        ContactField::Company => "contact-company",
        ContactField::Message => "contact-message",
    }
}

#[component]
pub fn ContactSection(state: LandingState) -> impl IntoView {
    let section = SectionId::Contact;

    view! {
        <section
            id=section.anchor()
            class=move || reveal_class("section section-muted", state.is_seen(section))
        >
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Ready to Transform Your Business?"</h2>
                    <p class="section-lead">
                        "Get in touch with our AI experts to discuss your project and discover how we can help you achieve your goals."
                    </p>
                </div>

                <div class="split-grid">
                    <ContactFormCard state=state />
                    <ContactDetails />
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactFormCard(state: LandingState) -> impl IntoView {
    // The browser enforces `required` and `type="email"` before this runs,
    // so every submit event is acknowledged
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        state.submit_contact();
    };

    view! {
        <Card classes="form-card">
            <h3 class="card-heading">"Send us a message"</h3>
            <form class="contact-form" on:submit=on_submit>
                <div class="field-row">
                    <FormField state=state field=ContactField::FirstName />
                    <FormField state=state field=ContactField::LastName />
                </div>
                <FormField state=state field=ContactField::Email />
                <FormField state=state field=ContactField::Company />
                <FormField state=state field=ContactField::Message />
                <Button variant=ButtonVariant::Gradient large=true submit=true classes="w-full">
                    "Send Message"
                    <IconSvg icon=Icon::ArrowRight classes="icon-sm ml-2" />
                </Button>
            </form>
        </Card>
    }
}

#[component]
fn FormField(state: LandingState, field: ContactField) -> impl IntoView {
    let id = input_id(field);
    let value = move || state.contact.with(|form| form.value(field).to_string());
    let on_input = move |ev: leptos::ev::Event| state.set_field(field, event_target_value(&ev));

    let control = if field == ContactField::Message {
        view! {
            <textarea
                id=id
                class="textarea"
                placeholder=field.placeholder()
                required=field.is_required()
                prop:value=value
                on:input=on_input
            ></textarea>
        }
        .into_any()
    } else {
        let input_type = if field == ContactField::Email { "email" } else { "text" };
        view! {
            <input
                id=id
                class="input"
                type=input_type
                placeholder=field.placeholder()
                required=field.is_required()
                prop:value=value
                on:input=on_input
            />
        }
        .into_any()
    };

    view! {
        <div class="field">
            <label class="field-label" for=id>{field.label()}</label>
            {control}
        </div>
    }
}

#[component]
fn ContactDetails() -> impl IntoView {
    view! {
        <div class="contact-details">
            <div>
                <h3 class="card-heading">"Get in touch"</h3>
                <p class="section-text">
                    "Ready to start your AI journey? Our team is here to help you transform your business with cutting-edge AI solutions."
                </p>
            </div>

            <div class="detail-list">
                {CONTACT_DETAILS
                    .iter()
                    .map(|detail| {
                        view! {
                            <div class="detail">
                                <div class="detail-icon">
                                    <IconSvg icon=detail.icon classes="icon-md" />
                                </div>
                                <div>
                                    <h4 class="detail-heading">{detail.heading}</h4>
                                    <p class="detail-value">{detail.value}</p>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="why-choose">
                <h4 class="detail-heading">{format!("Why Choose {COMPANY_NAME}?")}</h4>
                <ul class="feature-list">
                    {WHY_CHOOSE
                        .iter()
                        .map(|(reason, accent)| {
                            view! {
                                <li>
                                    <Bullet accent=accent.class() />
                                    {*reason}
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </div>
    }
}
