//! Topic-model diagnostics viewer.
//!
//! Plots one mark per topic on a selectable pair of diagnostic axes, next to
//! a scrollable table of each topic's top words colored by coherence.
//!
//! Data flow:
//! 1. On mount: fetch `data.xml` (MALLET topic diagnostics) from the app's
//!    directory.
//! 2. Parse it into topic records via `tmd-diagnostics`; any fetch or parse
//!    failure is rendered as a visible error and nothing else is shown.
//! 3. Render the axis selectors, scatterplot, and word table as projections
//!    of `AppState`; axis changes and clicks drive all further updates.

mod loader;

use dioxus::prelude::*;
use tmd_chart_ui::components::{
    AxisRole, AxisSelector, ErrorDisplay, LoadingSpinner, ScatterPlot, TopicTable,
};
use tmd_chart_ui::state::AppState;

/// Relative path of the diagnostics document, next to the served app.
const DIAGNOSTICS_FILE: &str = "data.xml";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("topic-scatter-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // One-shot startup: nothing below renders until this completes.
    use_future(move || async move {
        match loader::load_diagnostics(DIAGNOSTICS_FILE).await {
            Ok(topics) => {
                log::info!("diagnostics loaded: {} topics", topics.len());
                state.topics.set(topics);
            }
            Err(err) => {
                state
                    .error_msg
                    .set(Some(format!("could not load {DIAGNOSTICS_FILE}: {err:#}")));
            }
        }
        state.loading.set(false);
    });

    rsx! {
        div {
            style: "font-family: system-ui, -apple-system, sans-serif; padding: 8px;",

            h3 {
                style: "margin: 0 0 8px 0; font-size: 16px;",
                "Topic Model Diagnostics"
            }

            if let Some(err) = state.error_msg.read().as_ref() {
                ErrorDisplay { message: err.clone() }
            } else if *state.loading.read() {
                LoadingSpinner {}
            } else {
                div {
                    style: "margin: 8px 0; display: flex; gap: 12px; align-items: center;",
                    AxisSelector { role: AxisRole::X }
                    AxisSelector { role: AxisRole::Y }
                }
                div {
                    ScatterPlot {}
                    TopicTable {}
                }
            }
        }
    }
}
