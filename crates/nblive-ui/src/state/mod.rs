//! Reactive page state
//!
//! [`LandingState`] holds the page's mutable structures in Leptos signals and
//! is handed to every section component. It is `Copy`, so event handlers can
//! capture it freely.
//!
//! # Ownership
//!
//! The signals belong to the reactive owner that was current when
//! [`LandingState::new`] ran (the `App` component). Timers that outlive the
//! page use the `try_*` signal methods.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::config::NoticeConfig;
use crate::interaction::contact::submit;
use crate::interaction::navigator::{
    DomScroller, NavigationOutcome, SectionNavigator, SectionScroller,
};
use crate::models::contact::{ContactField, ContactForm};
use crate::models::menu::MenuState;
use crate::models::notice::{NoticeId, NoticeQueue};
use crate::models::section::SectionId;
use crate::models::visibility::{IntersectionReport, Threshold, VisibilitySet};

#[derive(Debug, Clone, Copy)]
pub struct LandingState {
    pub visibility: RwSignal<VisibilitySet>,
    pub menu: RwSignal<MenuState>,
    pub notices: RwSignal<NoticeQueue>,
    pub contact: RwSignal<ContactForm>,
    threshold: Threshold,
    notice_duration_ms: u32,
}

impl LandingState {
    pub fn new(threshold: Threshold, notices: &NoticeConfig) -> Self {
        Self {
            visibility: RwSignal::new(VisibilitySet::new()),
            menu: RwSignal::new(MenuState::closed()),
            notices: RwSignal::new(NoticeQueue::new(notices.limit)),
            contact: RwSignal::new(ContactForm::default()),
            threshold,
            notice_duration_ms: notices.duration_ms,
        }
    }

    pub const fn threshold(&self) -> Threshold {
        self.threshold
    }

    pub fn is_seen(&self, section: SectionId) -> bool {
        self.visibility.with(|set| set.is_seen(section))
    }

    /// Feeds a batch of intersection reports into the visibility set and
    /// returns the sections that became visible. The signal only notifies
    /// when that list is non-empty.
    pub fn record_reports(&self, reports: &[IntersectionReport]) -> Vec<SectionId> {
        let mut set = self.visibility.get_untracked();
        let newly_seen = set.apply(reports, self.threshold);
        if !newly_seen.is_empty() {
            tracing::debug!(?newly_seen, "sections entered the viewport");
            self.visibility.try_set(set);
        }
        newly_seen
    }

    /// Shows every section at once, used when viewport observation is
    /// unavailable
    pub fn reveal_all(&self) {
        self.visibility.set(VisibilitySet::all_seen());
    }

    pub fn menu_open(&self) -> bool {
        self.menu.get().is_open()
    }

    pub fn toggle_menu(&self) {
        self.menu.update(MenuState::toggle);
    }

    /// Smooth-scrolls the document to `section` and closes the mobile menu
    pub fn navigate(&self, section: SectionId) {
        self.navigate_with(DomScroller, section);
    }

    /// Navigates through `scroller`. The menu signal is only written when a
    /// scroll actually happened.
    pub fn navigate_with<S: SectionScroller>(
        &self,
        scroller: S,
        section: SectionId,
    ) -> NavigationOutcome {
        let navigator = SectionNavigator::new(scroller);
        let mut menu = self.menu.get_untracked();
        match navigator.navigate_to(section, &mut menu) {
            Ok(outcome) => {
                if outcome.scrolled() {
                    self.menu.set(menu);
                }
                outcome
            }
            Err(e) => {
                tracing::warn!(error = %e, %section, "navigation failed");
                NavigationOutcome::Ignored
            }
        }
    }

    pub fn set_field(&self, field: ContactField, value: String) {
        self.contact.update(|form| form.set(field, value));
    }

    /// Acknowledges a submission the browser accepted and schedules the
    /// notice to dismiss itself
    pub fn submit_contact(&self) -> NoticeId {
        let id = self.acknowledge_submission();
        self.schedule_dismiss(id);
        id
    }

    /// Queues the acknowledgment notice without a dismissal timer
    pub fn acknowledge_submission(&self) -> NoticeId {
        let mut id = 0;
        self.notices.update(|notices| id = submit(notices));
        id
    }

    pub fn dismiss_notice(&self, id: NoticeId) {
        self.notices.try_update(|notices| notices.dismiss(id));
    }

    fn schedule_dismiss(&self, id: NoticeId) {
        let state = *self;
        Timeout::new(self.notice_duration_ms, move || state.dismiss_notice(id)).forget();
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::tests::fakes::{BrokenScroller, RecordingScroller};
    use leptos::reactive::owner::Owner;

    fn with_state(test: impl FnOnce(LandingState)) {
        let owner = Owner::new();
        owner.with(|| test(LandingState::new(Threshold::DEFAULT, &NoticeConfig::default())));
    }

    #[test]
    fn test_navigate_closes_menu_after_scroll() {
        with_state(|state| {
            state.toggle_menu();
            let scroller = RecordingScroller::with_all_sections();

            let outcome = state.navigate_with(&scroller, SectionId::Contact);

            assert!(outcome.scrolled());
            assert_eq!(scroller.scrolls(), vec![SectionId::Contact]);
            assert!(!state.menu.get_untracked().is_open());
        });
    }

    #[test]
    fn test_navigate_to_absent_region_keeps_menu_open() {
        with_state(|state| {
            state.toggle_menu();
            let scroller = RecordingScroller::with_sections(&[SectionId::Home]);

            let outcome = state.navigate_with(&scroller, SectionId::About);

            assert_eq!(outcome, NavigationOutcome::Ignored);
            assert!(state.menu.get_untracked().is_open());
        });
    }

    #[test]
    fn test_navigation_failure_keeps_menu_open() {
        with_state(|state| {
            state.toggle_menu();

            let outcome = state.navigate_with(BrokenScroller, SectionId::Home);

            assert_eq!(outcome, NavigationOutcome::Ignored);
            assert!(state.menu.get_untracked().is_open());
        });
    }

    #[test]
    fn test_record_reports_returns_only_new_sections() {
        with_state(|state| {
            let reports = [
                IntersectionReport::new("services", true, 0.4),
                IntersectionReport::new("about", true, 0.05),
            ];

            assert_eq!(state.record_reports(&reports), vec![SectionId::Services]);
            assert!(state.record_reports(&reports).is_empty());
            assert!(state.visibility.get_untracked().is_seen(SectionId::Services));
            assert!(!state.visibility.get_untracked().is_seen(SectionId::About));
        });
    }

    #[test]
    fn test_acknowledgment_ignores_form_contents() {
        with_state(|state| {
            // Accepted by browsers that convert the domain to ASCII
            state.set_field(ContactField::Email, "user@bücher.de".to_string());

            let id = state.acknowledge_submission();

            let notices = state.notices.get_untracked();
            assert_eq!(notices.len(), 1);
            assert_eq!(notices.items().first().unwrap().id, id);
        });
    }

    #[test]
    fn test_repeated_acknowledgment_respects_notice_limit() {
        with_state(|state| {
            state.acknowledge_submission();
            let latest = state.acknowledge_submission();

            let notices = state.notices.get_untracked();
            assert_eq!(notices.len(), 1);
            assert_eq!(notices.items().first().unwrap().id, latest);

            state.dismiss_notice(latest);
            assert!(state.notices.get_untracked().is_empty());
        });
    }
}
