//! Reusable Dioxus RSX components for the diagnostics viewer.

mod axis_selector;
mod error_display;
mod loading_spinner;
mod scatter_plot;
mod topic_table;

pub use axis_selector::{AxisRole, AxisSelector};
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use scatter_plot::ScatterPlot;
pub use topic_table::TopicTable;
