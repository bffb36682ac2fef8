//! Behavioral tests for the whole visitor flow through the page state
//!
//! Load the page, use the "Contact" link, fill in the form and submit it. The
//! crate has no HTTP client, so the only observable effect of submitting is
//! the acknowledgment notice.

#![allow(clippy::unwrap_used)]

use leptos::prelude::GetUntracked;
use leptos::reactive::owner::Owner;

use super::fakes::RecordingScroller;
use crate::config::LandingConfig;
use crate::content::ACK_TITLE;
use crate::interaction::navigator::NavigationOutcome;
use crate::models::contact::ContactField;
use crate::models::section::SectionId;
use crate::models::visibility::IntersectionReport;
use crate::state::LandingState;

fn page_state(config: &LandingConfig) -> LandingState {
    LandingState::new(config.observer.threshold_or_default(), &config.notices)
}

#[test]
fn given_loaded_page_when_visitor_contacts_company_from_nav_then_one_acknowledgment() {
    Owner::new().with(|| {
        let state = page_state(&LandingConfig::default());
        let scroller = RecordingScroller::with_all_sections();

        // Page load: menu closed, hero visible
        state.record_reports(&[IntersectionReport::new("home", true, 0.9)]);
        assert!(!state.menu_open());
        assert!(state.is_seen(SectionId::Home));

        // "Contact" nav link
        let outcome = state.navigate_with(&scroller, SectionId::Contact);
        assert_eq!(
            outcome,
            NavigationOutcome::Scrolled {
                section: SectionId::Contact,
                menu_closed: false
            }
        );
        assert_eq!(scroller.scrolls(), vec![SectionId::Contact]);

        // The smooth scroll brings the contact section into the viewport
        state.record_reports(&[IntersectionReport::new("contact", true, 0.35)]);
        assert!(state.is_seen(SectionId::Contact));

        // Fill the required fields and submit
        state.set_field(ContactField::FirstName, "John".to_string());
        state.set_field(ContactField::LastName, "Doe".to_string());
        state.set_field(ContactField::Email, "john@example.com".to_string());
        state.set_field(ContactField::Message, "Tell me about AI security.".to_string());
        state.acknowledge_submission();

        let notices = state.notices.get_untracked();
        assert_eq!(notices.len(), 1);
        assert_eq!(
            notices.items().first().map(|notice| notice.title.as_str()),
            Some(ACK_TITLE)
        );
        assert!(!state.menu_open());
    });
}

#[test]
fn given_mobile_menu_open_when_visitor_navigates_then_menu_closes() {
    Owner::new().with(|| {
        let state = page_state(&LandingConfig::default());
        let scroller = RecordingScroller::with_all_sections();

        state.toggle_menu();
        assert!(state.menu_open());

        state.navigate_with(&scroller, SectionId::Services);
        assert!(!state.menu_open());

        // A section missing from the page leaves a freshly opened menu alone
        state.toggle_menu();
        let partial = RecordingScroller::with_sections(&[SectionId::Home]);
        assert_eq!(
            state.navigate_with(&partial, SectionId::About),
            NavigationOutcome::Ignored
        );
        assert!(state.menu_open());
    });
}
