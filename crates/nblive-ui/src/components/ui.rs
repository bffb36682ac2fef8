//! Small presentational building blocks shared by the sections

use leptos::prelude::*;

/// Visual style of a [`Button`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Gradient,
    /// Plain text, used in menus and the footer
    Link,
}

impl ButtonVariant {
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Primary => "btn btn-primary",
            Self::Outline => "btn btn-outline",
            Self::Gradient => "btn btn-gradient",
            Self::Link => "btn-link",
        }
    }
}

/// Space-separated class list for a button
#[must_use]
pub fn button_class(variant: ButtonVariant, large: bool, classes: &str) -> String {
    let mut class = variant.class().to_string();
    if large {
        class.push_str(" btn-lg");
    }
    if !classes.is_empty() {
        class.push(' ');
        class.push_str(classes);
    }
    class
}

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] large: bool,
    /// Renders `type="submit"` instead of `type="button"`
    #[prop(optional)]
    submit: bool,
    #[prop(optional)] classes: &'static str,
    #[prop(optional, into)] on_press: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type=if submit { "submit" } else { "button" }
            class=button_class(variant, large, classes)
            on:click=move |_| {
                if let Some(callback) = on_press {
                    callback.run(());
                }
            }
        >
            {children()}
        </button>
    }
}

#[component]
pub fn Card(#[prop(optional)] classes: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class=format!("card {classes}")>
            <div class="card-content">{children()}</div>
        </div>
    }
}

/// Coloured dot in front of a list item
#[component]
pub fn Bullet(#[prop(optional)] accent: &'static str) -> impl IntoView {
    view! { <span class=format!("bullet {accent}") aria-hidden="true"></span> }
}
