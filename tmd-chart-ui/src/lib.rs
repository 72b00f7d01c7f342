//! Shared Dioxus components and browser glue for the diagnostics viewer.
//!
//! This crate provides:
//! - `state`: reactive `AppState` with Dioxus Signals
//! - `components`: reusable RSX components (axis selectors, plot, table)
//! - `dom`: typed web-sys wrappers for scrolling the topic table

pub mod components;
pub mod dom;
pub mod state;
