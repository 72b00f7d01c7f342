//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with
//! `use_context::<AppState>()` and render as pure projections of it, so
//! selection and axis changes never have to patch DOM state imperatively.

use dioxus::prelude::*;
use tmd_diagnostics::attributes::TopicAttr;
use tmd_diagnostics::topic::Topic;

/// Whether mark position changes animate.
///
/// The first committed render places marks directly; every render after that
/// moves them with a transform transition. The flag flips exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderPhase {
    Initial,
    Animated,
}

/// Shared application state for the diagnostics viewer.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Topic records, populated exactly once by the loader
    pub topics: Signal<Vec<Topic>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if startup failed
    pub error_msg: Signal<Option<String>>,
    /// Attribute plotted on the x axis
    pub x_attr: Signal<TopicAttr>,
    /// Attribute plotted on the y axis
    pub y_attr: Signal<TopicAttr>,
    /// Currently selected topic id, if any
    pub selected: Signal<Option<usize>>,
    /// Whether mark positions animate on re-render
    pub render_phase: Signal<RenderPhase>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            topics: Signal::new(Vec::new()),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            x_attr: Signal::new(TopicAttr::Id),
            y_attr: Signal::new(TopicAttr::Tokens),
            selected: Signal::new(None),
            render_phase: Signal::new(RenderPhase::Initial),
        }
    }
}
