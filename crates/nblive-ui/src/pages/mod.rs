//! Page components
//!
//! The site is a single page; this module holds its body.

pub mod landing;

pub use landing::LandingPage;
