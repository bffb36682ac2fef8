//! Behavioral tests for page behaviour
//!
//! BDD-style tests using given-when-then naming. They exercise the pure core
//! and the page state through recording fakes, so they run without a
//! browser.


pub mod landing_flow_behaviors;
pub mod visibility_behaviors;
