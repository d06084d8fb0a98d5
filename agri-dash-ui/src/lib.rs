//! Shared Dioxus components and browser plumbing for the crop dashboard apps.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the D3.js chart functions via `js_sys::eval()`
//! - `fetch`: `window.fetch` calls against the analytics service
//! - `interval`: a cancellable `setInterval` and the `use_interval` hook
//! - `state`: reactive view state for each app, provided via Dioxus context
//! - `theme`: dashboard palette
//! - `components`: reusable RSX components (selectors, panels, timeline, etc.)

pub mod components;
pub mod fetch;
pub mod interval;
pub mod js_bridge;
pub mod state;
pub mod theme;
