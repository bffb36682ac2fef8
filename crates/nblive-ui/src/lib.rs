//! Leptos 0.7 CSR landing page for NBLive AI
//!
//! A single marketing page: navigation, hero, services grid, about section,
//! contact form and footer. Nothing leaves the browser; the contact form only
//! shows a local acknowledgment.
//!
//! ## Architecture
//! - Pure CSR with Leptos 0.7, compiled to `wasm32-unknown-unknown` by Trunk
//! - Behaviour split into a pure core (`models`, `interaction`) and thin
//!   web-sys adapters, so the core is tested natively
//! - Page state in Leptos signals (`state::LandingState`)
//!
//! ## Module Structure
//! - `app`: root component
//! - `pages`: the landing page body and its visibility tracking
//! - `components`: section components and UI building blocks
//! - `interaction`: navigation, viewport observation, contact acknowledgment
//! - `models`: sections, visibility set, menu, contact form, notices
//! - `content`: page copy
//! - `config`, `logging`, `error`: ambient plumbing

#![forbid(unsafe_code)]

pub mod app;
pub mod components;
pub mod config;
pub mod content;
pub mod error;
pub mod interaction;
pub mod logging;
pub mod models;
pub mod pages;
pub mod state;

pub use app::App;

#[cfg(test)]
mod tests;
