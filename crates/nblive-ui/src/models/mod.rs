//! Plain data behind the landing page
//!
//! Nothing in here touches the DOM, so all of it is testable natively.

pub mod contact;
pub mod menu;
pub mod notice;
pub mod section;
pub mod visibility;

pub use contact::{ContactField, ContactForm};
pub use menu::MenuState;
pub use notice::{Notice, NoticeId, NoticeQueue};
pub use section::{SectionId, UnknownSection};
pub use visibility::{IntersectionReport, Threshold, VisibilitySet};
