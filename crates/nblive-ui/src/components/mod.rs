//! Leptos components for the landing page sections

pub mod about;
pub mod contact;
pub mod footer;
pub mod hero;
pub mod icons;
pub mod nav;
pub mod services;
pub mod toaster;
pub mod ui;

pub use about::About;
pub use contact::ContactSection;
pub use footer::Footer;
pub use hero::Hero;
pub use nav::NavBar;
pub use services::Services;
pub use toaster::Toaster;

use leptos::prelude::Callback;

use crate::models::section::SectionId;
use crate::state::LandingState;

/// Class list for a revealable section: hidden until first seen, then
/// faded in for good
#[must_use]
pub fn reveal_class(base: &str, seen: bool) -> String {
    if seen {
        format!("{base} reveal reveal-visible")
    } else {
        format!("{base} reveal")
    }
}

/// Click handler that navigates to `section`
pub fn scroll_to(state: LandingState, section: SectionId) -> Callback<()> {
    Callback::new(move |()| state.navigate(section))
}
