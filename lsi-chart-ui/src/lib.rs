//! Shared Dioxus components and JS bridge for the Landsat index dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the D3 and Leaflet renderers via `js_sys::eval()`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (tabs, sidebar controls, panels)

pub mod components;
pub mod js_bridge;
pub mod state;
