//! Contact form acknowledgment
//!
//! Submitting the form never leaves the page. The browser enforces the
//! `required` and `type="email"` constraints before it fires `submit`, so a
//! submission that reaches this module is acknowledged with exactly one
//! notice and nothing else. [`ContactForm::validate`] mirrors those
//! constraints for code that runs without a browser.
//!
//! [`ContactForm::validate`]: crate::models::contact::ContactForm::validate

use crate::content::{ACK_DESCRIPTION, ACK_TITLE};
use crate::models::notice::{NoticeId, NoticeQueue};

/// Title and description of an acknowledgment notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Acknowledgment {
    pub title: &'static str,
    pub description: &'static str,
}

impl Default for Acknowledgment {
    fn default() -> Self {
        Self {
            title: ACK_TITLE,
            description: ACK_DESCRIPTION,
        }
    }
}

/// Queues the acknowledgment notice for an accepted submission
pub fn submit(notices: &mut NoticeQueue) -> NoticeId {
    let ack = Acknowledgment::default();
    let id = notices.push(ack.title, ack.description);
    tracing::info!(notice = id, "contact form acknowledged locally");
    id
}
