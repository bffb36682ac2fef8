//! Section navigation
//!
//! Every link and call-to-action on the page goes through
//! [`SectionNavigator::navigate`]: smooth-scroll the target region into view
//! and close the mobile menu. Identifiers that do not resolve to a present
//! region change nothing.

use crate::error::{LandingError, Result};
use crate::models::menu::MenuState;
use crate::models::section::SectionId;

/// Something that can bring a section's region into view
pub trait SectionScroller {
    /// Scrolls to `section`. Returns `Ok(false)` when the region is not on
    /// the page.
    ///
    /// # Errors
    ///
    /// Returns an error when the environment itself is unusable (no window
    /// or document).
    fn scroll_to(&self, section: SectionId) -> Result<bool>;
}

impl<S: SectionScroller + ?Sized> SectionScroller for &S {
    fn scroll_to(&self, section: SectionId) -> Result<bool> {
        (**self).scroll_to(section)
    }
}

/// What a navigation request ended up doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationOutcome {
    Scrolled {
        section: SectionId,
        /// The mobile menu was open and has been closed
        menu_closed: bool,
    },
    /// Unknown identifier or absent region; nothing changed
    Ignored,
}

impl NavigationOutcome {
    #[must_use]
    pub const fn scrolled(self) -> bool {
        matches!(self, Self::Scrolled { .. })
    }
}

#[derive(Debug, Clone, Default)]
pub struct SectionNavigator<S> {
    scroller: S,
}

impl<S: SectionScroller> SectionNavigator<S> {
    pub const fn new(scroller: S) -> Self {
        Self { scroller }
    }

    pub const fn scroller(&self) -> &S {
        &self.scroller
    }

    /// Navigates to the section named `target`.
    ///
    /// # Errors
    ///
    /// Only environment failures from the scroller are returned. An unknown
    /// identifier is not an error.
    pub fn navigate(&self, target: &str, menu: &mut MenuState) -> Result<NavigationOutcome> {
        match target.parse::<SectionId>() {
            Ok(section) => self.navigate_to(section, menu),
            Err(unknown) => {
                tracing::debug!(identifier = %unknown.0, "ignoring navigation to unknown section");
                Ok(NavigationOutcome::Ignored)
            }
        }
    }

    /// Navigates to a known section.
    ///
    /// # Errors
    ///
    /// Returns environment failures from the scroller.
    pub fn navigate_to(&self, section: SectionId, menu: &mut MenuState) -> Result<NavigationOutcome> {
        if !self.scroller.scroll_to(section)? {
            tracing::debug!(%section, "section region not present, navigation ignored");
            return Ok(NavigationOutcome::Ignored);
        }
        let menu_closed = menu.close();
        tracing::debug!(%section, menu_closed, "navigated to section");
        Ok(NavigationOutcome::Scrolled {
            section,
            menu_closed,
        })
    }
}

/// Scrolls the real document with `scrollIntoView({ behavior: "smooth" })`
#[derive(Debug, Clone, Copy, Default)]
pub struct DomScroller;

impl SectionScroller for DomScroller {
    fn scroll_to(&self, section: SectionId) -> Result<bool> {
        let document = web_sys::window()
            .ok_or(LandingError::WindowUnavailable)?
            .document()
            .ok_or(LandingError::DocumentUnavailable)?;

        let Some(element) = document.get_element_by_id(section.anchor()) else {
            return Ok(false);
        };

        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        Ok(true)
    }
}
