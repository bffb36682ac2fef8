//! Page behaviour: visibility tracking, section navigation and the contact
//! acknowledgment
//!
//! Each behaviour has a pure core plus a thin web-sys adapter, so the core
//! can be exercised without a browser.

pub mod contact;
pub mod navigator;
pub mod visibility;

pub use contact::{Acknowledgment, submit};
pub use navigator::{DomScroller, NavigationOutcome, SectionNavigator, SectionScroller};
pub use visibility::{DomViewportObserver, ViewportObserver, VisibilityTracker};
