//! Shared Dioxus components and D3.js bridge for the readmission dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the bundled D3.js renderers via `js_sys::eval()`
//! - `payload`: query results turned into the JSON each renderer expects
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (tiles, panels, selectors, containers)

pub mod components;
pub mod js_bridge;
pub mod palette;
pub mod payload;
pub mod state;
